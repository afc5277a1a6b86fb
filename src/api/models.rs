// src/api/models.rs

use serde::{Deserialize, Serialize};

/// Image CDN base. Paths from the API are opaque (`/abc123.jpg`) and get a
/// size segment prepended.
pub const IMAGE_BASE: &str = "https://image.tmdb.org/t/p";

/// Fixed poster display width.
pub const POSTER_SIZE: &str = "w500";

/// Backdrops render full-bleed in the hero panel.
pub const BACKDROP_SIZE: &str = "original";

// ── Movie listings (popular, search) ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub page: Option<u64>,
    pub results: Vec<Movie>,
    pub total_pages: Option<u64>,
    pub total_results: Option<u64>,
}

/// One catalog entry. `vote_average` defaults to 0 when the API omits it;
/// the display layer turns that into "no rating" rather than "0.0".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Movie {
    /// Star rating on a 0–5 scale, rounded from the API's 0–10 vote average.
    pub fn star_count(&self) -> u8 {
        ((self.vote_average / 10.0) * 5.0).round().clamp(0.0, 5.0) as u8
    }

    /// Filled/empty star glyphs for the star count.
    pub fn stars(&self) -> String {
        let filled = self.star_count() as usize;
        let mut s = String::with_capacity(5 * 3);
        for i in 0..5 {
            s.push(if i < filled { '★' } else { '☆' });
        }
        s
    }

    /// One-decimal numeric rating, or `None` when unrated (0/absent).
    pub fn rating_label(&self) -> Option<String> {
        if self.vote_average > 0.0 {
            Some(format!("{:.1}", self.vote_average))
        } else {
            None
        }
    }

    /// Release year parsed from the leading `YYYY` of the date string.
    pub fn release_year(&self) -> Option<i32> {
        let date = self.release_date.as_deref()?;
        let year = date.get(..4)?;
        year.parse().ok()
    }

    /// Year for display; unreleased or undated entries show "TBA".
    pub fn year_label(&self) -> String {
        self.release_year()
            .map_or_else(|| "TBA".to_string(), |y| y.to_string())
    }

    pub fn poster_url(&self) -> Option<String> {
        self.poster_path
            .as_ref()
            .map(|p| format!("{}/{}{}", IMAGE_BASE, POSTER_SIZE, p))
    }

    pub fn backdrop_url(&self) -> Option<String> {
        self.backdrop_path
            .as_ref()
            .map(|p| format!("{}/{}{}", IMAGE_BASE, BACKDROP_SIZE, p))
    }

    /// Overview truncated to at most `max` characters, with an ellipsis when
    /// cut. Counts chars, not bytes, so multibyte text stays intact.
    pub fn short_overview(&self, max: usize) -> String {
        if self.overview.chars().count() <= max {
            return self.overview.clone();
        }
        let cut: String = self.overview.chars().take(max).collect();
        format!("{}...", cut.trim_end())
    }
}

// ── Video listings (trailers) ──

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoListResponse {
    pub id: Option<u64>,
    pub results: Vec<Video>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    pub key: String,
    pub name: Option<String>,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
    #[serde(default)]
    pub official: bool,
}
