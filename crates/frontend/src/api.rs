//! HTTP surface for the dashboard backend.

use gloo_net::http::Request;
use thiserror::Error;
use web_types::RepositoryRecord;

/// Base URL of the data backend. The dashboard assumes a local backend
/// and has no other configuration surface.
pub const API_BASE: &str = "http://localhost:8000";

/// Path of the trending-repositories feed.
pub const TRENDING: &str = "/trending";

/// Path of the new-repositories feed.
pub const NEW: &str = "/new";

/// Errors from fetching or decoding a repository feed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Request(gloo_net::Error),

    #[error("unexpected status: {0}")]
    Status(u16),

    #[error("invalid feed body: {0}")]
    Decode(gloo_net::Error),
}

/// Fetch one feed and decode it against the expected record schema.
///
/// Shape mismatches surface here as [`FetchError::Decode`] instead of
/// failing later inside the render path.
pub async fn fetch_repos(path: &str) -> Result<Vec<RepositoryRecord>, FetchError> {
    let response = Request::get(&feed_url(path))
        .send()
        .await
        .map_err(FetchError::Request)?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<Vec<RepositoryRecord>>()
        .await
        .map_err(FetchError::Decode)
}

fn feed_url(path: &str) -> String {
    format!("{API_BASE}{path}")
}
