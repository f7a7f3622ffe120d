use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::Path;
use tempfile::TempDir;
use tokio::fs;

use photosweep_app::{App, Components};
use photosweep_config::{FIRST_LAUNCH, MemoryPreferences, Settings};
use photosweep_models::{Overlay, Screen};

async fn setup_library(root: &Path) -> Result<()> {
    fs::create_dir_all(root.join("2024/trip")).await?;
    fs::write(root.join("cat.jpg"), b"JPG_DATA").await?;
    fs::write(root.join("2024/receipt.png"), b"PNG_DATA").await?;
    fs::write(root.join("2024/trip/mountain.jpeg"), b"JPEG_DATA").await?;
    fs::write(root.join("2024/trip/itinerary.pdf"), b"PDF_DATA").await?;
    Ok(())
}

fn app_for(settings: Settings, first_launch: bool) -> Result<App> {
    let prefs = MemoryPreferences::default().with_flag(FIRST_LAUNCH, first_launch);
    let components = Components::from_settings(&settings, Box::new(prefs))?;
    Ok(App::with_components(settings, components))
}

fn settings_for(root: &Path) -> Settings {
    Settings {
        library_folder: Some(root.to_path_buf()),
        ..Default::default()
    }
}

async fn press(app: &mut App, code: KeyCode) -> Result<()> {
    app.on_key(KeyEvent::from(code)).await
}

#[tokio::test]
async fn test_complete_triage_workflow() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    setup_library(root).await?;

    let mut app = app_for(settings_for(root), true)?;
    app.start();
    app.settle().await;

    // First launch shows the tutorial over a loaded queue.
    assert_eq!(app.overlay, Some(Overlay::Tutorial));
    assert_eq!(app.triage.active().len(), 3);
    press(&mut app, KeyCode::Enter).await?;
    assert!(app.overlay.is_none());

    // Trash the first photo, keep the second, trash the third.
    let first = app.triage.current().expect("photo").location.clone();
    press(&mut app, KeyCode::Left).await?;
    press(&mut app, KeyCode::Right).await?;
    let third = app.triage.current().expect("photo").location.clone();
    press(&mut app, KeyCode::Char('x')).await?;
    assert!(app.triage.is_empty());
    assert_eq!(app.triage.trash_len(), 2);

    // Recover the most recently trashed one, then trash it again.
    press(&mut app, KeyCode::Char('t')).await?;
    assert_eq!(app.screen, Screen::Trash);
    press(&mut app, KeyCode::Char('u')).await?;
    assert_eq!(app.triage.trash_len(), 1);
    press(&mut app, KeyCode::Esc).await?;
    assert_eq!(app.screen, Screen::Main);
    press(&mut app, KeyCode::Left).await?;

    // Declining the confirmation leaves files and trash alone.
    press(&mut app, KeyCode::Char('t')).await?;
    press(&mut app, KeyCode::Char('D')).await?;
    assert_eq!(app.overlay, Some(Overlay::ConfirmPurge));
    press(&mut app, KeyCode::Char('n')).await?;
    assert_eq!(app.triage.trash_len(), 2);
    assert!(first.exists() && third.exists());

    // Confirming deletes them for real.
    press(&mut app, KeyCode::Char('D')).await?;
    press(&mut app, KeyCode::Char('y')).await?;
    app.settle().await;

    assert_eq!(app.triage.trash_len(), 0);
    assert!(!first.exists());
    assert!(!third.exists());
    assert!(app.last_purge.as_ref().expect("purge result").outcome.is_granted());
    Ok(())
}

#[tokio::test]
async fn test_rescan_after_purge_shows_only_remaining_photos() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    setup_library(root).await?;

    let mut app = app_for(settings_for(root), false)?;
    app.start();
    app.settle().await;

    press(&mut app, KeyCode::Left).await?;
    press(&mut app, KeyCode::Char('t')).await?;
    press(&mut app, KeyCode::Char('D')).await?;
    press(&mut app, KeyCode::Char('y')).await?;
    app.settle().await;

    press(&mut app, KeyCode::Esc).await?;
    press(&mut app, KeyCode::Char('r')).await?;
    app.settle().await;

    assert_eq!(app.triage.active().len(), 2);
    assert_eq!(app.last_load.as_ref().expect("load result").photos_found, 2);
    Ok(())
}

#[tokio::test]
async fn test_dry_run_leaves_files_on_disk() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    setup_library(root).await?;

    let settings = Settings {
        dry_run: true,
        ..settings_for(root)
    };
    let mut app = app_for(settings, false)?;
    app.start();
    app.settle().await;

    let target = app.triage.current().expect("photo").location.clone();
    press(&mut app, KeyCode::Left).await?;
    press(&mut app, KeyCode::Char('t')).await?;
    press(&mut app, KeyCode::Char('D')).await?;
    press(&mut app, KeyCode::Char('y')).await?;
    app.settle().await;

    assert_eq!(app.triage.trash_len(), 0);
    assert!(target.exists());
    Ok(())
}

#[tokio::test]
async fn test_missing_library_waits_for_access() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("Pictures");

    let mut app = app_for(settings_for(&root), false)?;
    app.start();
    assert!(!app.access.is_granted());
    assert!(!app.is_loading());

    // Retrying before the folder exists changes nothing.
    press(&mut app, KeyCode::Enter).await?;
    assert!(!app.access.is_granted());

    fs::create_dir_all(&root).await?;
    fs::write(root.join("first.jpg"), b"JPG_DATA").await?;
    press(&mut app, KeyCode::Enter).await?;
    assert!(app.access.is_granted());
    app.settle().await;
    assert_eq!(app.triage.active().len(), 1);
    Ok(())
}
