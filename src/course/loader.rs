use gloo_net::http::Request;
use log::{info, warn};

use crate::course::model::CourseModel;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server answered with status {0}")]
    Status(u16),
    #[error("could not read response body: {0}")]
    Body(String),
    #[error("malformed content document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("content document is not a JSON object")]
    NotAnObject,
}

/// Where the raw content document comes from.
pub trait ContentFetcher {
    async fn fetch(&self) -> Result<String, LoadError>;
}

pub struct HttpFetcher {
    url: String,
}

impl HttpFetcher {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl ContentFetcher for HttpFetcher {
    async fn fetch(&self) -> Result<String, LoadError> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(LoadError::Status(response.status()));
        }
        response.text().await.map_err(|e| LoadError::Body(e.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub model: CourseModel,
    pub source: ContentSource,
}

pub struct ContentLoader<F> {
    fetcher: F,
}

impl<F: ContentFetcher> ContentLoader<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Never fails: any problem with the remote document yields the fallback model.
    pub async fn load(&self) -> LoadResult {
        match self.try_load().await {
            Ok(model) => {
                info!("Course data loaded: {}", model.course_name);
                LoadResult { model, source: ContentSource::Remote }
            }
            Err(e) => {
                warn!("Error loading course data, showing fallback content: {}", e);
                LoadResult { model: CourseModel::fallback(), source: ContentSource::Fallback }
            }
        }
    }

    async fn try_load(&self) -> Result<CourseModel, LoadError> {
        let body = self.fetcher.fetch().await?;
        CourseModel::from_json(&body)
    }
}
