// src/api/tmdb.rs

use crate::api::models::{Movie, MovieListResponse, Video, VideoListResponse};
use crate::config::ApiConfig;

pub const YOUTUBE_WATCH_BASE: &str = "https://www.youtube.com/watch";

/// Client failures stay coarse: either the transport broke or the payload
/// didn't parse. Callers decide user-facing behavior; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum TmdbError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl TmdbClient {
    pub fn new(config: &ApiConfig, api_key: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key,
        }
    }

    /// GET a resource and parse the body. The body is read as text first so
    /// transport failures and malformed payloads stay distinguishable.
    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        extra: &[(&str, &str)],
    ) -> Result<T, TmdbError> {
        let mut query: Vec<(&str, &str)> = vec![("api_key", self.api_key.as_str())];
        query.extend_from_slice(extra);

        let body = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch the current popular listing (first page, API default ordering).
    pub async fn fetch_popular(&self) -> Result<Vec<Movie>, TmdbError> {
        let resp: MovieListResponse = self.get_json("/movie/popular", &[]).await?;
        Ok(resp.results)
    }

    /// Resolve a movie's trailer to a watchable URL. `Ok(None)` means the
    /// video listing had no matching entry, which is not an error.
    pub async fn fetch_trailer(&self, movie_id: u64) -> Result<Option<String>, TmdbError> {
        let resp: VideoListResponse = self
            .get_json(&format!("/movie/{}/videos", movie_id), &[])
            .await?;
        Ok(pick_trailer(&resp.results).map(|v| watch_url(&v.key)))
    }

    /// Check whether an image URL is actually servable. Used to drive the
    /// per-item poster state; any failure counts as unavailable.
    pub async fn probe_image(&self, url: &str) -> bool {
        match self.http.get(url).send().await {
            Ok(resp) => resp.status().is_success(),
            Err(_) => false,
        }
    }

    /// Free-text title search. A query that trims to nothing short-circuits
    /// to an empty result without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<Movie>, TmdbError> {
        if query.trim().is_empty() {
            return Ok(Vec::new());
        }
        let resp: MovieListResponse = self
            .get_json("/search/movie", &[("query", query)])
            .await?;
        Ok(resp.results)
    }
}

/// First entry that is an actual trailer hosted on YouTube. Teasers, clips,
/// and other hosting sites are skipped.
pub fn pick_trailer(videos: &[Video]) -> Option<&Video> {
    videos
        .iter()
        .find(|v| v.video_type == "Trailer" && v.site == "YouTube")
}

pub fn watch_url(key: &str) -> String {
    format!("{}?v={}", YOUTUBE_WATCH_BASE, key)
}
