use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use vicenza_api::models::NewsResponse;

use crate::errors::ApiError;
use crate::services::NewsService;

#[derive(Clone)]
pub struct NewsState {
    pub news_service: Arc<NewsService>,
}

pub fn news_router(news_state: NewsState) -> Router {
    Router::new()
        .route("/api/news", get(get_news))
        .with_state(news_state)
}

#[utoipa::path(
    get,
    path = "/api/news",
    tag = "news",
    responses(
        (status = 200, description = "Latest headlines from the configured feed", body = NewsResponse),
        (status = 500, description = "Failed to fetch news")
    )
)]
pub async fn get_news(State(state): State<NewsState>) -> Result<Json<NewsResponse>, ApiError> {
    let news = state.news_service.fetch().await?;

    Ok(Json(NewsResponse { news }))
}
