// Data fetching: spawns async tasks that load listings, resolve trailers,
// and probe poster availability, reporting back through the action channel.

use crate::action::Action;
use crate::api::models::Movie;
use crate::app::App;

impl App {
    /// Bump the list-fetch generation. Only results stamped with the latest
    /// id get applied.
    fn next_request_id(&mut self) -> u64 {
        self.request_id += 1;
        self.request_id
    }

    pub(super) fn spawn_fetch_popular(&mut self) {
        let request_id = self.next_request_id();
        self.movie_grid.set_loading(true);
        let client = self.client.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match client.fetch_popular().await {
                Ok(movies) => {
                    tx.send(Action::PopularLoaded { request_id, movies }).ok();
                }
                Err(e) => {
                    tracing::warn!("popular listing failed: {e}");
                    tx.send(Action::ShowError(format!("Could not load movies: {e}")))
                        .ok();
                }
            }
        });
    }

    pub(super) fn spawn_search(&mut self, query: String) {
        let request_id = self.next_request_id();
        self.movie_grid.set_loading(true);
        let client = self.client.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            match client.search(&query).await {
                Ok(movies) => {
                    tx.send(Action::SearchLoaded { request_id, movies }).ok();
                }
                Err(e) => {
                    tracing::warn!(%query, "search failed: {e}");
                    tx.send(Action::ShowError(format!("Search failed: {e}"))).ok();
                }
            }
        });
    }

    /// Resolution failures surface exactly like absence: the user sees
    /// "Trailer not available" either way.
    pub(super) fn spawn_fetch_trailer(&self, movie_id: u64) {
        let client = self.client.clone();
        let tx = self.action_tx.clone();
        tokio::spawn(async move {
            let url = match client.fetch_trailer(movie_id).await {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(movie_id, "trailer lookup failed: {e}");
                    None
                }
            };
            tx.send(Action::TrailerResolved { movie_id, url }).ok();
        });
    }

    /// One probe task per poster. Late results for a replaced listing are
    /// dropped by the grid when they arrive.
    pub(super) fn spawn_poster_probes(&self, movies: &[Movie]) {
        for movie in movies {
            let Some(url) = movie.poster_url() else {
                continue;
            };
            let movie_id = movie.id;
            let client = self.client.clone();
            let tx = self.action_tx.clone();
            tokio::spawn(async move {
                let ok = client.probe_image(&url).await;
                tx.send(Action::PosterProbed { movie_id, ok }).ok();
            });
        }
    }
}
