// Central coordinator: owns all components, the catalog client, and the hero
// rotation timer. Runs the event loop (key → Action → handle_action → draw).

mod fetch;
mod input;
mod trailer;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::action::Action;
use crate::api::tmdb::TmdbClient;
use crate::components::hero::HeroCarousel;
use crate::components::movie_grid::MovieGrid;
use crate::components::search_bar::SearchBar;
use crate::components::Component;
use crate::config::Config;
use crate::tui::{Tui, TuiEvent};
use crate::ui;

/// Top-level coordinator: owns every component and the TMDB client. Runs the
/// main event loop (key → action → component update → draw).
pub struct App {
    running: bool,
    pub(crate) action_tx: mpsc::UnboundedSender<Action>,
    action_rx: mpsc::UnboundedReceiver<Action>,

    // Components
    pub hero: HeroCarousel,
    pub movie_grid: MovieGrid,
    pub(crate) search_bar: SearchBar,

    // State
    pub(crate) client: TmdbClient,
    pub(crate) config: Config,
    pub show_help: bool,
    pub error_message: Option<String>,
    pub notice: Option<String>,
    /// Generation counter for list-replacing fetches. A result action is
    /// applied only when it carries the latest issued id, so a late response
    /// from a superseded request can never overwrite newer state.
    pub(crate) request_id: u64,
    /// True while the grid shows search results rather than the popular
    /// listing. The hero subset still reflects the popular load.
    pub(crate) viewing_search_results: bool,
    /// Live rotation timer, if any. Held only while the hero subset is
    /// non-empty; aborted on replacement, quit, and drop.
    rotation: Option<JoinHandle<()>>,
    /// Last trailer URL handed to the system opener.
    pub last_trailer_url: Option<String>,
}

impl App {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let (action_tx, action_rx) = mpsc::unbounded_channel();

        let hero = HeroCarousel::new();
        let mut movie_grid = MovieGrid::new();
        let mut search_bar = SearchBar::new();
        movie_grid.register_action_handler(action_tx.clone());
        search_bar.register_action_handler(action_tx.clone());

        let api_key = config.resolve_api_key().unwrap_or_default();
        let client = TmdbClient::new(&config.api, api_key);

        Ok(Self {
            running: true,
            action_tx,
            action_rx,
            hero,
            movie_grid,
            search_bar,
            client,
            config,
            show_help: false,
            error_message: None,
            notice: None,
            request_id: 0,
            viewing_search_results: false,
            rotation: None,
            last_trailer_url: None,
        })
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut tui = Tui::new(self.config.general.frame_rate)?;
        tui.enter()?;

        self.action_tx.send(Action::LoadPopular)?;

        while self.running {
            let state = ui::DrawState {
                hero: &self.hero,
                movie_grid: &self.movie_grid,
                search_bar: &self.search_bar,
                error_message: &self.error_message,
                notice: &self.notice,
                show_help: self.show_help,
            };
            tui.draw(|frame| ui::draw(frame, &state))?;

            tokio::select! {
                Some(event) = tui.event_rx.recv() => {
                    match event {
                        TuiEvent::Key(key) => self.handle_key(key)?,
                        TuiEvent::Resize => {} // ratatui redraws at correct size automatically
                        TuiEvent::Tick => { self.action_tx.send(Action::Tick)?; }
                    }
                }
                Some(action) = self.action_rx.recv() => {
                    self.handle_action(action).await?;
                }
            }
        }

        tui.exit()?;
        Ok(())
    }

    pub async fn handle_action(&mut self, action: Action) -> anyhow::Result<()> {
        match action {
            // Lifecycle
            Action::Quit => {
                self.stop_rotation();
                self.running = false;
            }

            // Data loading
            Action::LoadPopular => self.spawn_fetch_popular(),
            Action::PopularLoaded { request_id, movies } => {
                if request_id == self.request_id {
                    self.spawn_poster_probes(&movies);
                    self.hero.set_movies(movies.clone());
                    self.movie_grid.set_items(movies);
                    self.viewing_search_results = false;
                    self.restart_rotation();
                }
            }
            Action::SearchByQuery { query } => self.spawn_search(query),
            Action::SearchLoaded { request_id, movies } => {
                // Hero deliberately untouched: it tracks the popular load only.
                if request_id == self.request_id {
                    self.spawn_poster_probes(&movies);
                    self.movie_grid.set_items(movies);
                    self.viewing_search_results = true;
                }
            }

            // Hero slides
            Action::AdvanceSlide => self.hero.advance(),
            Action::SelectSlide(index) => self.hero.select(index),

            // Trailers
            Action::OpenTrailer(movie_id) => self.spawn_fetch_trailer(movie_id),
            Action::TrailerResolved { movie_id, url } => match url {
                Some(url) => self.open_trailer(&url)?,
                None => {
                    tracing::debug!(movie_id, "no trailer entry");
                    self.action_tx
                        .send(Action::ShowNotice("Trailer not available".to_string()))?;
                }
            },

            // Poster probes
            Action::PosterProbed { movie_id, ok } => {
                self.movie_grid.mark_poster(movie_id, ok);
            }

            // Search
            Action::SearchSubmit => {
                let query = self.search_bar.input().trim().to_string();
                self.search_bar.update(&Action::SearchSubmit)?;
                if !query.is_empty() {
                    self.action_tx.send(Action::SearchByQuery { query })?;
                }
            }

            // Navigation
            Action::Back => {
                if self.viewing_search_results {
                    self.action_tx.send(Action::LoadPopular)?;
                }
                self.search_bar.update(&Action::Back)?;
            }

            // Errors, notices & help
            Action::ShowError(msg) => {
                self.error_message = Some(msg);
                self.movie_grid.set_loading(false);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    tx.send(Action::ClearError).ok();
                });
            }
            Action::ClearError => self.error_message = None,
            Action::ShowNotice(msg) => {
                self.notice = Some(msg);
                let tx = self.action_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    tx.send(Action::ClearNotice).ok();
                });
            }
            Action::ClearNotice => self.notice = None,
            Action::ShowHelp => self.show_help = true,
            Action::HideHelp => self.show_help = false,

            // Forward anything unhandled to components
            ref action => {
                let results = self.movie_grid.update(action)?;
                for a in results {
                    self.action_tx.send(a)?;
                }
                self.search_bar.update(action)?;
            }
        }
        Ok(())
    }

    /// (Re)start the rotation timer for the current hero subset. The previous
    /// timer is always aborted first; an empty subset gets no timer at all.
    pub(crate) fn restart_rotation(&mut self) {
        self.stop_rotation();
        if self.hero.is_empty() {
            return;
        }
        let tx = self.action_tx.clone();
        let period = Duration::from_secs(self.config.ui.hero_interval_secs.max(1));
        self.rotation = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // The first interval tick fires immediately; skip it so slides
            // hold for a full period.
            interval.tick().await;
            loop {
                interval.tick().await;
                if tx.send(Action::AdvanceSlide).is_err() {
                    break;
                }
            }
        }));
    }

    pub(crate) fn stop_rotation(&mut self) {
        if let Some(handle) = self.rotation.take() {
            handle.abort();
        }
    }

    pub fn rotation_active(&self) -> bool {
        self.rotation.is_some()
    }

    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    #[allow(dead_code)] // used by integration tests
    pub async fn flush_actions(&mut self) {
        while let Ok(action) = self.action_rx.try_recv() {
            let _ = self.handle_action(action).await;
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.stop_rotation();
    }
}
