// Scrollable movie listing with per-item poster availability state.

use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};
use tokio::sync::mpsc::UnboundedSender;

use crate::action::Action;
use crate::api::models::Movie;
use crate::components::{Component, BRAILLE_SPINNER};

/// Poster availability for one rendered entry. Transitions are one-way per
/// mount: once a probe lands the state never reverts or retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PosterState {
    #[default]
    Unloaded,
    Loaded,
    Errored,
}

pub struct MovieGrid {
    action_tx: Option<UnboundedSender<Action>>,
    pub movies: Vec<Movie>,
    pub state: ListState,
    pub loading: bool,
    pub frame_count: u64,
    /// Per-item poster state, keyed by movie id. Rebuilt from scratch on
    /// every wholesale list replacement so stale probes can't bleed across
    /// generations.
    poster_states: HashMap<u64, PosterState>,
}

impl MovieGrid {
    pub fn new() -> Self {
        Self {
            action_tx: None,
            movies: vec![],
            state: ListState::default(),
            loading: false,
            frame_count: 0,
            poster_states: HashMap::new(),
        }
    }

    /// Replace the listing wholesale. Poster states start fresh; selection
    /// resets to the top.
    pub fn set_items(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
        self.poster_states.clear();
        self.state
            .select(if self.movies.is_empty() { None } else { Some(0) });
        self.loading = false;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn selected_movie(&self) -> Option<&Movie> {
        self.state.selected().and_then(|i| self.movies.get(i))
    }

    pub fn poster_state(&self, movie_id: u64) -> PosterState {
        self.poster_states
            .get(&movie_id)
            .copied()
            .unwrap_or_default()
    }

    /// Record a probe result. Results for ids no longer listed are dropped,
    /// and a terminal state is never overwritten.
    pub fn mark_poster(&mut self, movie_id: u64, ok: bool) {
        if !self.movies.iter().any(|m| m.id == movie_id) {
            return;
        }
        let entry = self.poster_states.entry(movie_id).or_default();
        if *entry == PosterState::Unloaded {
            *entry = if ok {
                PosterState::Loaded
            } else {
                PosterState::Errored
            };
        }
    }

    /// The image URL to present for a movie, or `None` for the placeholder:
    /// either the record has no poster or its probe failed.
    pub fn poster_source(&self, movie: &Movie) -> Option<String> {
        if self.poster_state(movie.id) == PosterState::Errored {
            return None;
        }
        movie.poster_url()
    }

    pub fn next(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 1).min(self.movies.len() - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn prev(&mut self) {
        if self.movies.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    fn poster_glyph(&self, movie: &Movie) -> Span<'static> {
        match (movie.poster_path.is_some(), self.poster_state(movie.id)) {
            (false, _) | (true, PosterState::Errored) => {
                Span::styled("⊘ no art", Style::default().fg(Color::DarkGray))
            }
            (true, PosterState::Loaded) => Span::styled("▣ art", Style::default().fg(Color::Green)),
            (true, PosterState::Unloaded) => {
                Span::styled("… art", Style::default().fg(Color::DarkGray))
            }
        }
    }
}

impl Component for MovieGrid {
    fn register_action_handler(&mut self, tx: UnboundedSender<Action>) {
        self.action_tx = Some(tx);
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> anyhow::Result<bool> {
        let tx = self.action_tx.as_ref().expect("component not registered");
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Ok(true)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.prev();
                Ok(true)
            }
            KeyCode::Enter => {
                // Consume the event either way so nothing above retriggers.
                if let Some(movie) = self.selected_movie() {
                    tx.send(Action::OpenTrailer(movie.id))?;
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn update(&mut self, action: &Action) -> anyhow::Result<Vec<Action>> {
        if let Action::Tick = action {
            self.frame_count = self.frame_count.wrapping_add(1);
        }
        Ok(vec![])
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        if self.loading {
            let idx = (self.frame_count / 3) as usize % BRAILLE_SPINNER.len();
            let spinner = BRAILLE_SPINNER[idx];
            let paragraph = Paragraph::new(Line::from(vec![
                Span::styled(format!("  {} ", spinner), Style::default().fg(Color::Cyan)),
                Span::styled("Loading movies...", Style::default().fg(Color::DarkGray)),
            ]));
            frame.render_widget(paragraph, area);
            return;
        }

        if self.movies.is_empty() {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "  No results. Press / to search or r to reload.",
                Style::default().fg(Color::DarkGray),
            )));
            frame.render_widget(paragraph, area);
            return;
        }

        let selected = self.state.selected();
        let items: Vec<ListItem> = self
            .movies
            .iter()
            .enumerate()
            .map(|(i, movie)| {
                let is_selected = selected == Some(i);
                let num = format!("{:02} ", i + 1);

                let title_style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };

                let rating = movie
                    .rating_label()
                    .unwrap_or_else(|| "no rating".to_string());
                let title_line = Line::from(vec![
                    Span::styled(num, Style::default().fg(Color::DarkGray)),
                    Span::styled(movie.title.clone(), title_style),
                    Span::raw("  "),
                    Span::styled(movie.stars(), Style::default().fg(Color::Yellow)),
                    Span::raw(" "),
                    Span::styled(rating, Style::default().fg(Color::Gray)),
                ]);

                let sub_line = Line::from(vec![
                    Span::raw("   "),
                    Span::styled(movie.year_label(), Style::default().fg(Color::Gray)),
                    Span::raw("  "),
                    self.poster_glyph(movie),
                ]);

                let mut list_item = ListItem::new(vec![title_line, sub_line]);
                if is_selected {
                    list_item = list_item.style(Style::default().bg(Color::Rgb(30, 30, 40)));
                }
                list_item
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .highlight_symbol("▌");

        frame.render_stateful_widget(list, area, &mut self.state.clone());
    }
}
