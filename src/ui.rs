// Layout and rendering: stacks the hero panel, search bar, and movie grid,
// and composites overlays (help, status line).

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::components::hero::HeroCarousel;
use crate::components::movie_grid::MovieGrid;
use crate::components::search_bar::SearchBar;
use crate::components::Component;

pub struct DrawState<'a> {
    pub hero: &'a HeroCarousel,
    pub movie_grid: &'a MovieGrid,
    pub search_bar: &'a SearchBar,
    pub error_message: &'a Option<String>,
    pub notice: &'a Option<String>,
    pub show_help: bool,
}

pub fn draw(frame: &mut Frame, state: &DrawState) {
    let status_height = if state.error_message.is_some() || state.notice.is_some() {
        1
    } else {
        0
    };
    let outer = Layout::vertical([
        Constraint::Length(10),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(status_height),
        Constraint::Length(1),
    ])
    .split(frame.area());

    state.hero.draw(frame, outer[0]);
    state.search_bar.draw(frame, outer[1]);

    let grid_block = Block::default()
        .borders(Borders::ALL)
        .title(" Movies ")
        .border_style(Style::default().fg(Color::DarkGray));
    let grid_area = grid_block.inner(outer[2]);
    frame.render_widget(grid_block, outer[2]);
    state.movie_grid.draw(frame, grid_area);

    if let Some(ref msg) = state.error_message {
        let error_line = Line::from(vec![
            Span::styled(" ⚠ ", Style::default().fg(Color::Red)),
            Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)),
            Span::styled("  Press r to retry.", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(error_line), outer[3]);
    } else if let Some(ref msg) = state.notice {
        let notice_line = Line::from(vec![
            Span::styled(" ▶ ", Style::default().fg(Color::Green)),
            Span::styled(msg.as_str(), Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(notice_line), outer[3]);
    }

    let hint = Line::from(Span::styled(
        " / search  ·  Enter trailer  ·  p play hero  ·  1-5/←/→ slide  ·  ? help  ·  q quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(hint), outer[4]);

    if state.show_help {
        draw_help_overlay(frame);
    }
}

fn draw_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let overlay_width = 52u16;
    let overlay_height = 18u16;
    let x = area.width.saturating_sub(overlay_width) / 2;
    let y = area.height.saturating_sub(overlay_height) / 2;
    let overlay_area = Rect::new(
        x,
        y,
        overlay_width.min(area.width),
        overlay_height.min(area.height),
    );

    frame.render_widget(Clear, overlay_area);

    let keybindings = [
        ("q", "Quit"),
        ("j / Down", "Scroll down"),
        ("k / Up", "Scroll up"),
        ("Enter", "Open trailer for selected movie"),
        ("p", "Open trailer for the hero slide"),
        ("1-5", "Jump to hero slide"),
        ("Left / Right", "Previous / next hero slide"),
        ("/", "Focus search bar"),
        ("Escape", "Unfocus search / back to popular"),
        ("r", "Retry failed request"),
        ("?", "Toggle this help overlay"),
    ];

    let mut lines: Vec<Line> = vec![
        Line::from(Span::styled(
            " Keybindings ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for (key, desc) in &keybindings {
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", key), Style::default().fg(Color::Yellow)),
            Span::raw(*desc),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press any key to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_alignment(Alignment::Center);
    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, overlay_area);
}
