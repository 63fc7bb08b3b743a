use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::routing::get;
use serde_json::json;
use tower::ServiceExt;

mod common;
use common::mock_app::{MockApp, spawn_upstream};

async fn get_weather(app: &MockApp) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .uri("/api/weather")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_mock_weather_shape() {
    let app = MockApp::new().await.with_mock_weather_handle();

    let (status, body) = get_weather(&app).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["current"]["temp"], json!(22.0));
    assert_eq!(body["current"]["condition"], json!("Thunderstorms"));
    assert_eq!(body["current"]["location"], json!("New York"));
    assert_eq!(body["current"]["uvIndex"], json!(5));
    assert!(body["current"]["windSpeed"].is_number());

    assert_eq!(body["sun"]["sunrise"], json!("06:30"));
    assert_eq!(body["sun"]["sunset"], json!("19:45"));
    assert!(body["sun"]["currentTime"].is_string());

    let forecast = body["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 7);
    assert_eq!(forecast[0], json!({"day": "Monday", "temp": 26.0, "icon": "cloud"}));
    assert_eq!(forecast[6]["icon"], json!("sun-cloud"));

    assert_eq!(body["wind"]["gusts"].as_array().unwrap().len(), 7);
    assert_eq!(body["wind"]["history"].as_array().unwrap().len(), 11);
}

fn openweather_stub() -> Router {
    Router::new()
        .route(
            "/weather",
            get(|| async {
                axum::Json(json!({
                    "weather": [{"main": "Clouds", "description": "broken clouds"}],
                    "main": {"temp": 27.5},
                    "wind": {"speed": 3.5, "gust": 5.0},
                    "name": "Thanh Hoa",
                    "sys": {"sunrise": 1700002800, "sunset": 1700043300},
                    "timezone": 25200
                }))
            }),
        )
        .route(
            "/forecast",
            get(|| async {
                axum::Json(json!({
                    "list": [
                        {"dt": 1699992000, "main": {"temp": 25.0}, "weather": [{"main": "Rain"}], "wind": {"speed": 2.0}},
                        {"dt": 1700078400, "main": {"temp": 30.0}, "weather": [{"main": "Clear"}], "wind": {"speed": 4.0, "gust": 6.5}}
                    ]
                }))
            }),
        )
}

#[tokio::test]
async fn test_openweather_snapshot() {
    let base_url = spawn_upstream(openweather_stub()).await;
    let app = MockApp::new().await.with_openweather_handle(base_url);

    let (status, body) = get_weather(&app).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(body["current"]["condition"], json!("Clouds"));
    assert_eq!(body["current"]["description"], json!("broken clouds"));
    assert_eq!(body["current"]["location"], json!("Thanh Hoa"));
    assert_eq!(body["sun"]["sunrise"], json!("06:00"));
    assert_eq!(body["wind"]["gusts"], json!([2.0, 6.5]));
    assert_eq!(body["wind"]["history"], json!([3.5]));

    let forecast = body["forecast"].as_array().unwrap();
    assert_eq!(forecast.len(), 2);
    assert_eq!(forecast[0]["icon"], json!("rain"));
    assert_eq!(forecast[1]["icon"], json!("sun"));

    // Each request feeds the rolling wind history
    let (_, body) = get_weather(&app).await;
    assert_eq!(body["wind"]["history"], json!([3.5, 3.5]));
}

#[tokio::test]
async fn test_openweather_upstream_failure() {
    let stub = Router::new().route("/weather", get(|| async { StatusCode::UNAUTHORIZED }));
    let base_url = spawn_upstream(stub).await;
    let app = MockApp::new().await.with_openweather_handle(base_url);

    let (status, body) = get_weather(&app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["message"], json!("Failed to fetch weather data"));
    assert!(body["error"]["error_id"].is_string());
}

#[tokio::test]
async fn test_openweather_malformed_body() {
    let stub = Router::new()
        .route("/weather", get(|| async { axum::Json(json!({"unexpected": true})) }))
        .route("/forecast", get(|| async { axum::Json(json!({"list": []})) }));
    let base_url = spawn_upstream(stub).await;
    let app = MockApp::new().await.with_openweather_handle(base_url);

    let (status, body) = get_weather(&app).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"]["code"], json!(500));
}
