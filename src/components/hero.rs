// Rotating highlight panel over the first few popular titles.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::api::models::Movie;

/// How many titles the highlight rotation covers.
pub const HERO_SIZE: usize = 5;

/// Overview text budget in the panel, matching the card-sized presentation.
const OVERVIEW_CHARS: usize = 200;

/// Holds at most [`HERO_SIZE`] movies and a cyclic active index. The subset
/// is set once per popular load and never refreshed by searches: the hero is
/// a trending surface, independent of the grid below it.
#[derive(Default)]
pub struct HeroCarousel {
    movies: Vec<Movie>,
    active: usize,
}

impl HeroCarousel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the subset with the first [`HERO_SIZE`] of `movies` and reset
    /// the active slide.
    pub fn set_movies(&mut self, movies: Vec<Movie>) {
        self.movies = movies.into_iter().take(HERO_SIZE).collect();
        self.active = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_movie(&self) -> Option<&Movie> {
        self.movies.get(self.active)
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Advance one slide, wrapping around.
    pub fn advance(&mut self) {
        if !self.movies.is_empty() {
            self.active = (self.active + 1) % self.movies.len();
        }
    }

    /// Jump straight to a slide. Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) {
        if index < self.movies.len() {
            self.active = index;
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Now Trending ")
            .border_style(Style::default().fg(Color::DarkGray));

        let Some(movie) = self.active_movie() else {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "  Nothing to show yet",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(paragraph, area);
            return;
        };

        let mut meta = vec![
            Span::styled(movie.year_label(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(movie.stars(), Style::default().fg(Color::Yellow)),
        ];
        if let Some(label) = movie.rating_label() {
            meta.push(Span::raw(" "));
            meta.push(Span::styled(label, Style::default().fg(Color::White)));
        } else {
            meta.push(Span::raw(" "));
            meta.push(Span::styled(
                "no rating",
                Style::default().fg(Color::DarkGray),
            ));
        }

        let dots: Vec<Span> = (0..self.movies.len())
            .flat_map(|i| {
                let dot = if i == self.active {
                    Span::styled("●", Style::default().fg(Color::White))
                } else {
                    Span::styled("○", Style::default().fg(Color::DarkGray))
                };
                [dot, Span::raw(" ")]
            })
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                movie.title.clone(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(meta),
            Line::from(""),
            Line::from(Span::styled(
                movie.short_overview(OVERVIEW_CHARS),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(dots),
        ];

        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
        frame.render_widget(paragraph, area);
    }
}
