// Trailer launch: hands a resolved YouTube URL to the platform's URL opener.

use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::action::Action;
use crate::app::App;

const OPENER_CANDIDATES: &[&str] = &["xdg-open", "open", "wslview"];

impl App {
    /// Open a resolved trailer URL in a new browser context. The spawned
    /// opener is fire-and-forget; failures degrade to a notice.
    pub(super) fn open_trailer(&mut self, url: &str) -> anyhow::Result<()> {
        self.last_trailer_url = Some(url.to_string());

        let Some(opener) = find_opener() else {
            tracing::warn!("no URL opener found on PATH");
            self.action_tx.send(Action::ShowNotice(
                "No browser opener found (xdg-open/open)".to_string(),
            ))?;
            return Ok(());
        };

        match Command::new(&opener)
            .arg(url)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(_) => {
                tracing::debug!(url, "opened trailer");
                self.action_tx
                    .send(Action::ShowNotice("Opening trailer in browser".to_string()))?;
            }
            Err(e) => {
                tracing::warn!("failed to spawn {}: {e}", opener.display());
                self.action_tx
                    .send(Action::ShowNotice("Trailer not available".to_string()))?;
            }
        }
        Ok(())
    }
}

fn find_opener() -> Option<PathBuf> {
    OPENER_CANDIDATES
        .iter()
        .find_map(|candidate| which::which(candidate).ok())
}
