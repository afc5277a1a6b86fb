// TMDB response deserialization, Movie display derivations, and trailer
// resolution logic.

use marquee::api::models::{Movie, MovieListResponse, VideoListResponse};
use marquee::api::tmdb::{pick_trailer, watch_url, TmdbClient};
use marquee::config::ApiConfig;

fn make_movie(id: u64, title: &str, vote: f64, date: Option<&str>) -> Movie {
    Movie {
        id,
        title: title.to_string(),
        overview: String::new(),
        poster_path: None,
        backdrop_path: None,
        vote_average: vote,
        release_date: date.map(String::from),
    }
}

// ── API deserialization ──────────────────────────────────────────────────────

#[test]
fn test_movie_list_response_deserializes() {
    let json = r#"{
        "page": 1,
        "results": [
            {
                "id": 27205,
                "title": "Inception",
                "overview": "Cobb, a skilled thief...",
                "poster_path": "/oYuLEt3zVCKq57qu2F8dT7NIa6f.jpg",
                "backdrop_path": "/s3TBrRGB1iav7gFOCNx3H31MoES.jpg",
                "vote_average": 8.4,
                "release_date": "2010-07-15"
            },
            {
                "id": 99999,
                "title": "Unannounced Project",
                "overview": "",
                "poster_path": null,
                "backdrop_path": null,
                "release_date": null
            }
        ],
        "total_pages": 500,
        "total_results": 10000
    }"#;

    let resp: MovieListResponse =
        serde_json::from_str(json).expect("should deserialize MovieListResponse");
    assert_eq!(resp.results.len(), 2);

    let inception = &resp.results[0];
    assert_eq!(inception.id, 27205);
    assert_eq!(inception.title, "Inception");
    assert_eq!(inception.vote_average, 8.4);
    assert_eq!(inception.release_date.as_deref(), Some("2010-07-15"));
    assert!(inception.poster_path.is_some());

    // Missing vote_average defaults to 0, nullable fields stay None
    let unannounced = &resp.results[1];
    assert_eq!(unannounced.vote_average, 0.0);
    assert!(unannounced.poster_path.is_none());
    assert!(unannounced.release_date.is_none());
}

#[test]
fn test_video_list_response_deserializes() {
    let json = r#"{
        "id": 27205,
        "results": [
            { "key": "abc", "name": "Teaser", "site": "YouTube", "type": "Teaser" },
            { "key": "xyz", "name": "Official Trailer", "site": "YouTube", "type": "Trailer", "official": true },
            { "key": "vvv", "name": "Trailer on Vimeo", "site": "Vimeo", "type": "Trailer" }
        ]
    }"#;

    let resp: VideoListResponse =
        serde_json::from_str(json).expect("should deserialize VideoListResponse");
    assert_eq!(resp.results.len(), 3);
    assert_eq!(resp.results[1].key, "xyz");
    assert_eq!(resp.results[1].video_type, "Trailer");
    assert!(resp.results[1].official);
    assert!(!resp.results[0].official);
}

// ── Trailer resolution ───────────────────────────────────────────────────────

#[test]
fn test_pick_trailer_prefers_first_youtube_trailer() {
    let json = r#"{
        "id": 1,
        "results": [
            { "key": "teaser1", "site": "YouTube", "type": "Teaser" },
            { "key": "vimeo1", "site": "Vimeo", "type": "Trailer" },
            { "key": "first", "site": "YouTube", "type": "Trailer" },
            { "key": "second", "site": "YouTube", "type": "Trailer" }
        ]
    }"#;
    let resp: VideoListResponse = serde_json::from_str(json).unwrap();

    let picked = pick_trailer(&resp.results).expect("should find a trailer");
    assert_eq!(picked.key, "first", "wrong type/site entries must be skipped");
}

#[test]
fn test_pick_trailer_empty_list_is_absent() {
    assert!(pick_trailer(&[]).is_none());
}

#[test]
fn test_pick_trailer_no_matching_entry_is_absent() {
    let json = r#"{
        "id": 1,
        "results": [
            { "key": "a", "site": "Vimeo", "type": "Trailer" },
            { "key": "b", "site": "YouTube", "type": "Featurette" }
        ]
    }"#;
    let resp: VideoListResponse = serde_json::from_str(json).unwrap();
    assert!(pick_trailer(&resp.results).is_none());
}

#[test]
fn test_watch_url_format() {
    assert_eq!(watch_url("xyz"), "https://www.youtube.com/watch?v=xyz");
}

// ── Star ratings ─────────────────────────────────────────────────────────────

#[test]
fn test_star_count_rounds_and_clamps() {
    for (vote, expected) in [
        (0.0, 0),
        (1.0, 1), // 0.5 rounds up
        (4.0, 2),
        (8.0, 4),
        (8.4, 4),
        (9.0, 5), // 4.5 rounds up
        (10.0, 5),
        (11.0, 5), // bad upstream data clamps
        (-3.0, 0),
    ] {
        let movie = make_movie(1, "x", vote, None);
        assert_eq!(movie.star_count(), expected, "vote_average={vote}");
        assert!(movie.star_count() <= 5);
    }
}

#[test]
fn test_zero_vote_has_no_rating_label() {
    let unrated = make_movie(1, "x", 0.0, None);
    assert_eq!(unrated.rating_label(), None, "0 must not render as \"0.0\"");

    let rated = make_movie(2, "y", 8.4, None);
    assert_eq!(rated.rating_label().as_deref(), Some("8.4"));
}

#[test]
fn test_stars_glyph_string() {
    let movie = make_movie(1, "x", 8.0, None);
    assert_eq!(movie.stars(), "★★★★☆");
    let unrated = make_movie(2, "y", 0.0, None);
    assert_eq!(unrated.stars(), "☆☆☆☆☆");
}

#[test]
fn test_mixed_rating_listing() {
    // Records A, B, C with vote averages 8, 0, 10
    let a = make_movie(1, "A", 8.0, None);
    let b = make_movie(2, "B", 0.0, None);
    let c = make_movie(3, "C", 10.0, None);

    assert_eq!(a.star_count(), 4);
    assert_eq!(b.star_count(), 0);
    assert!(b.rating_label().is_none());
    assert_eq!(c.star_count(), 5);
}

// ── Release year ─────────────────────────────────────────────────────────────

#[test]
fn test_release_year_derivation() {
    let dated = make_movie(1, "x", 0.0, Some("2019-07-04"));
    assert_eq!(dated.release_year(), Some(2019));
    assert_eq!(dated.year_label(), "2019");

    let undated = make_movie(2, "y", 0.0, None);
    assert_eq!(undated.release_year(), None);
    assert_eq!(undated.year_label(), "TBA");

    // TMDB sometimes sends an empty string instead of null
    let empty = make_movie(3, "z", 0.0, Some(""));
    assert_eq!(empty.year_label(), "TBA");

    let garbage = make_movie(4, "w", 0.0, Some("soon"));
    assert_eq!(garbage.year_label(), "TBA");
}

// ── Image URLs ───────────────────────────────────────────────────────────────

#[test]
fn test_poster_url_fixed_width() {
    let mut movie = make_movie(1, "x", 0.0, None);
    movie.poster_path = Some("/abc.jpg".to_string());
    assert_eq!(
        movie.poster_url().as_deref(),
        Some("https://image.tmdb.org/t/p/w500/abc.jpg")
    );

    movie.poster_path = None;
    assert!(movie.poster_url().is_none());
}

#[test]
fn test_backdrop_url_original_size() {
    let mut movie = make_movie(1, "x", 0.0, None);
    movie.backdrop_path = Some("/bg.jpg".to_string());
    assert_eq!(
        movie.backdrop_url().as_deref(),
        Some("https://image.tmdb.org/t/p/original/bg.jpg")
    );
}

// ── Overview truncation ──────────────────────────────────────────────────────

#[test]
fn test_short_overview_truncates_long_text() {
    let mut movie = make_movie(1, "x", 0.0, None);
    movie.overview = "a".repeat(300);
    let short = movie.short_overview(200);
    assert!(short.ends_with("..."));
    assert_eq!(short.chars().count(), 203);
}

#[test]
fn test_short_overview_leaves_short_text_alone() {
    let mut movie = make_movie(1, "x", 0.0, None);
    movie.overview = "Brief.".to_string();
    assert_eq!(movie.short_overview(200), "Brief.");
}

#[test]
fn test_short_overview_multibyte_safe() {
    let mut movie = make_movie(1, "x", 0.0, None);
    movie.overview = "é".repeat(250);
    let short = movie.short_overview(200);
    assert!(short.ends_with("..."));
}

// ── Search short-circuit ─────────────────────────────────────────────────────

/// Whitespace-only queries must return empty without any network call. The
/// base URL points at a dead address, so any accidental request would error.
#[tokio::test]
async fn test_search_short_circuits_on_blank_query() {
    let config = ApiConfig {
        api_key: None,
        base_url: "http://127.0.0.1:9".to_string(),
    };
    let client = TmdbClient::new(&config, "unused".to_string());

    let empty = client.search("").await.expect("blank query must not error");
    assert!(empty.is_empty());

    let spaces = client.search("   ").await.expect("whitespace must not error");
    assert!(spaces.is_empty());
}

#[tokio::test]
async fn test_search_real_query_hits_network() {
    let config = ApiConfig {
        api_key: None,
        base_url: "http://127.0.0.1:9".to_string(),
    };
    let client = TmdbClient::new(&config, "unused".to_string());

    // A non-blank query goes to the (dead) endpoint and fails as a network error.
    let result = client.search("inception").await;
    assert!(result.is_err());
}
