use color_eyre::eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use photosweep_models::{Overlay, Screen};
use tracing::debug;

use super::App;

impl App {
    /// Routes a key press to whatever currently has focus.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible for the event loop's `?`.
    pub async fn on_key(&mut self, key: KeyEvent) -> Result<()> {
        debug!("Key: {:?} on {:?} / {:?}", key.code, self.screen, self.overlay);

        if !self.access.is_granted() {
            self.handle_access_keys(key);
            return Ok(());
        }

        if let Some(overlay) = self.overlay {
            self.handle_overlay_keys(overlay, key).await;
            return Ok(());
        }

        match self.screen {
            Screen::Main => self.handle_main_keys(key),
            Screen::Trash => self.handle_trash_keys(key),
        }
        Ok(())
    }

    fn handle_access_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('g') => self.request_access(),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    async fn handle_overlay_keys(&mut self, overlay: Overlay, key: KeyEvent) {
        match overlay {
            Overlay::Tutorial => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Esc) {
                    self.dismiss_tutorial().await;
                }
            }
            Overlay::ConfirmPurge => match key.code {
                KeyCode::Char('y' | 'Y') => self.confirm_purge(),
                KeyCode::Char('n' | 'N' | 'q') | KeyCode::Esc => self.cancel_purge(),
                _ => {}
            },
            Overlay::Help | Overlay::Details(_) => match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ' | 'q' | '?') => self.close_overlay(),
                _ => {}
            },
        }
    }

    fn handle_main_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h' | 'x') => self.trash_current(),
            KeyCode::Right | KeyCode::Char('l' | 'k') => self.keep_current(),
            KeyCode::Enter | KeyCode::Char(' ') => self.open_details_of_current(),
            KeyCode::Char('t') => self.open_trash(),
            KeyCode::Char('r') => self.start_load(),
            KeyCode::Char('?') => self.overlay = Some(Overlay::Help),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_trash_keys(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(i) = self.selected_trash_index() {
                    self.trash_list_state.select(Some(i.saturating_sub(1)));
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(i) = self.selected_trash_index() {
                    if i + 1 < self.triage.trash_len() {
                        self.trash_list_state.select(Some(i + 1));
                    }
                }
            }
            KeyCode::Char('u' | 'r') => self.recover_selected(),
            KeyCode::Char('D') => {
                if !self.triage.purge_pending() {
                    self.request_purge();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.open_details_of_selected(),
            KeyCode::Char('?') => self.overlay = Some(Overlay::Help),
            KeyCode::Esc | KeyCode::Char('q' | 'b' | 't') => self.close_trash(),
            _ => {}
        }
    }
}
