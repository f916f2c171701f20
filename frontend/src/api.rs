use async_trait::async_trait;
use gloo_net::http::Request;
use portfolio_shared::{
    Clock, Collection, ContentError, ContentLoader, ContentSource, SourceMode, StaticSource,
};
use serde::Deserialize;

use crate::config::API_BASE;

/// Fetches collections from the content API with the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct GlooSource {
    base_url: String,
}

impl GlooSource {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait(?Send)]
impl ContentSource for GlooSource {
    async fn fetch(&self, collection: Collection) -> Result<String, ContentError> {
        let url = format!("{}{}", self.base_url, collection.api_path());
        let network = |err: gloo_net::Error| ContentError::Network {
            collection,
            message: err.to_string(),
        };

        let response = Request::get(&url)
            .header("Cache-Control", "no-cache")
            .send()
            .await
            .map_err(network)?;

        if !response.ok() {
            return Err(ContentError::Status {
                collection,
                status: response.status(),
            });
        }

        response.text().await.map_err(network)
    }
}

/// Collections compiled into the bundle from the repository's `content/`.
pub fn bundled_source() -> StaticSource {
    StaticSource::new()
        .with(Collection::Projects, include_str!("../../content/projects.json"))
        .with(Collection::Photography, include_str!("../../content/photography.json"))
        .with(Collection::Calligraphy, include_str!("../../content/calligraphy.json"))
        .with(Collection::Blog, include_str!("../../content/blog.json"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

impl Clock for BrowserClock {
    fn now_ms(&self) -> u64 {
        js_sys::Date::now() as u64
    }
}

pub fn build_loader(mode: SourceMode) -> ContentLoader {
    match mode {
        SourceMode::Remote => ContentLoader::new(GlooSource::new(API_BASE), BrowserClock),
        SourceMode::Bundled => ContentLoader::new(bundled_source(), BrowserClock),
    }
}

#[derive(Debug, Deserialize)]
struct MuseResponse {
    text: String,
}

/// Asks the content API's muse endpoint for a short thought about `topic`.
pub async fn fetch_muse(topic: &str) -> Result<String, String> {
    let url = format!("{}/api/muse", API_BASE.trim_end_matches('/'));
    let response = Request::get(&url)
        .query([("topic", topic)])
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let body: MuseResponse = response
        .json()
        .await
        .map_err(|e| format!("Parse error: {:?}", e))?;
    Ok(body.text)
}
