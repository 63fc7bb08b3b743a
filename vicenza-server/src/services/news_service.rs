use rss::Channel;
use vicenza_api::models::NewsItem;

use crate::configs::News;
use crate::errors::NewsError;

const UNTITLED: &str = "Không có tiêu đề";
const NO_LINK: &str = "#";

pub struct NewsService {
    client: reqwest::Client,
    feed_url: String,
    limit: usize,
}

impl NewsService {
    pub fn new(news: &News) -> Self {
        Self {
            client: reqwest::Client::new(),
            feed_url: news.feed_url.clone(),
            limit: news.limit,
        }
    }

    pub async fn fetch(&self) -> Result<Vec<NewsItem>, NewsError> {
        let bytes = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                tracing::error!("Error fetching news from {}: {}", self.feed_url, e);
                NewsError::FeedUnavailable
            })?
            .bytes()
            .await
            .map_err(|e| {
                tracing::error!("Error reading news feed body: {}", e);
                NewsError::FeedUnavailable
            })?;

        parse_feed(&bytes, self.limit)
    }
}

/// Maps the first `limit` feed items, filling missing fields with
/// placeholders.
pub fn parse_feed(bytes: &[u8], limit: usize) -> Result<Vec<NewsItem>, NewsError> {
    let channel = Channel::read_from(bytes).map_err(|e| {
        tracing::error!("Error parsing news feed: {}", e);
        NewsError::InvalidFeed
    })?;

    Ok(channel
        .items()
        .iter()
        .take(limit)
        .map(|item| NewsItem {
            title: non_empty(item.title()).unwrap_or(UNTITLED).to_string(),
            link: non_empty(item.link()).unwrap_or(NO_LINK).to_string(),
            pub_date: non_empty(item.pub_date()).unwrap_or_default().to_string(),
            snippet: non_empty(item.description())
                .map(str::to_string)
                .or_else(|| non_empty(item.content()).map(strip_tags))
                .unwrap_or_default(),
        })
        .collect())
}

fn non_empty(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|text| !text.is_empty())
}

/// Plain text of an HTML fragment, whitespace collapsed.
fn strip_tags(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
