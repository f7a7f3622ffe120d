#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::{Duration, Local, TimeZone};
use photosweep_app::{App, Components};
use photosweep_config::{FIRST_LAUNCH, MemoryPreferences, Settings};
use photosweep_core::{AccessGate, DryRunDeleter, MediaCatalog};
use photosweep_models::{AccessStatus, PhotoItem};
use ratatui::{Terminal, backend::TestBackend};
use std::path::PathBuf;
use std::sync::Arc;

struct StaticCatalog(Vec<PhotoItem>);

#[async_trait]
impl MediaCatalog for StaticCatalog {
    async fn query(&self) -> color_eyre::Result<Vec<PhotoItem>> {
        Ok(self.0.clone())
    }
}

struct FixedGate(bool);

impl AccessGate for FixedGate {
    fn check(&self) -> AccessStatus {
        if self.0 {
            AccessStatus::Granted
        } else {
            AccessStatus::Denied("Library folder not found".into())
        }
    }
}

fn photos(names: &[&str]) -> Vec<PhotoItem> {
    let base = Local.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    names
        .iter()
        .enumerate()
        .map(|(i, n)| {
            #[allow(clippy::cast_possible_wrap)]
            let added = base - Duration::hours(i as i64);
            PhotoItem::new(PathBuf::from(format!("/lib/{n}.jpg")), 2048, added)
        })
        .collect()
}

pub fn build(names: &[&str], granted: bool, first_launch: bool) -> App {
    let prefs = MemoryPreferences::default().with_flag(FIRST_LAUNCH, first_launch);
    App::with_components(
        Settings::default(),
        Components {
            catalog: Arc::new(StaticCatalog(photos(names))),
            gate: Box::new(FixedGate(granted)),
            deleter: Arc::new(DryRunDeleter),
            prefs: Box::new(prefs),
        },
    )
}

/// A started app with the tutorial already dismissed.
pub async fn app_with(names: &[&str]) -> App {
    let mut app = build(names, true, false);
    app.start();
    app.settle().await;
    app
}

/// Draws one frame and flattens the buffer into a string.
pub fn render(mut app: App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| crate::draw(f, &mut app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}
