// Key event handling: maps key presses to actions.

use crate::action::Action;
use crate::app::App;
use crate::components::Component;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> anyhow::Result<()> {
        use KeyCode::{Char, Esc, Left, Right};

        // The help overlay consumes all keys
        if self.show_help {
            self.action_tx.send(Action::HideHelp)?;
            return Ok(());
        }

        if key.code == Esc {
            return self.action_tx.send(Action::Back).map_err(Into::into);
        }

        // In search mode, forward to the search bar; if it didn't consume the
        // key (e.g. arrow keys), fall through to normal-mode bindings.
        if self.search_bar.is_focused() && self.search_bar.handle_key_event(key)? {
            return Ok(());
        }

        // Normal-mode keybindings
        match key.code {
            Char('q') => self.action_tx.send(Action::Quit)?,
            Char('?') => self.action_tx.send(Action::ShowHelp)?,
            Char('/') => self.action_tx.send(Action::FocusSearch)?,
            Char('p') => {
                if let Some(movie) = self.hero.active_movie() {
                    self.action_tx.send(Action::OpenTrailer(movie.id))?;
                }
            }
            Left => {
                let len = self.hero.len();
                if len > 0 {
                    let prev = (self.hero.active_index() + len - 1) % len;
                    self.action_tx.send(Action::SelectSlide(prev))?;
                }
            }
            Right => {
                let len = self.hero.len();
                if len > 0 {
                    let next = (self.hero.active_index() + 1) % len;
                    self.action_tx.send(Action::SelectSlide(next))?;
                }
            }
            Char('r') if self.error_message.is_some() => {
                self.action_tx.send(Action::LoadPopular)?;
                self.error_message = None;
            }
            Char(c) if c.is_ascii_digit() => {
                let idx = c.to_digit(10).unwrap_or(0) as usize;
                if (1..=5).contains(&idx) {
                    self.action_tx.send(Action::SelectSlide(idx - 1))?;
                }
            }
            _ => {
                self.movie_grid.handle_key_event(key)?;
            }
        }
        Ok(())
    }
}
