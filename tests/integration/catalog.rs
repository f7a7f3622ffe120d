use color_eyre::Result;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

use photosweep_config::Settings;
use photosweep_core::{CatalogLoader, FolderCatalog, MediaCatalog, TriageState};

async fn create_test_file(path: &Path, size: usize) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).await?;
    }
    fs::write(path, vec![0u8; size]).await?;
    Ok(())
}

/// A small library with photos, non-photos and hidden entries.
async fn setup_library(root: &Path) -> Result<()> {
    create_test_file(&root.join("beach.jpg"), 1024).await?;
    create_test_file(&root.join("screenshot.PNG"), 2048).await?;
    create_test_file(&root.join("2023/summer/sunset.heic"), 4096).await?;
    create_test_file(&root.join("2023/raw/dsc_0001.nef"), 8192).await?;
    create_test_file(&root.join("notes.txt"), 10).await?;
    create_test_file(&root.join("2023/clip.mp4"), 100).await?;
    create_test_file(&root.join(".thumbnails/beach.jpg"), 64).await?;
    create_test_file(&root.join(".hidden.jpg"), 64).await?;
    Ok(())
}

fn names(photos: &[photosweep_models::PhotoItem]) -> HashSet<String> {
    photos.iter().map(|p| p.name.to_string()).collect()
}

#[tokio::test]
async fn test_catalog_finds_photos_recursively() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_library(temp_dir.path()).await?;

    let photos = FolderCatalog::new(temp_dir.path().to_path_buf()).query().await?;

    assert_eq!(
        names(&photos),
        HashSet::from([
            "beach.jpg".to_string(),
            "screenshot.PNG".to_string(),
            "sunset.heic".to_string(),
            "dsc_0001.nef".to_string(),
        ])
    );
    assert!(
        photos.windows(2).all(|w| w[0].added >= w[1].added),
        "Photos should be ordered newest first"
    );
    Ok(())
}

#[tokio::test]
async fn test_catalog_respects_settings() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_library(temp_dir.path()).await?;

    let settings = Settings {
        library_folder: Some(temp_dir.path().to_path_buf()),
        recurse_subfolders: false,
        skip_hidden_files: false,
        ..Default::default()
    };
    let photos = FolderCatalog::from_settings(&settings)?.query().await?;

    assert_eq!(
        names(&photos),
        HashSet::from([
            "beach.jpg".to_string(),
            "screenshot.PNG".to_string(),
            ".hidden.jpg".to_string(),
        ])
    );
    Ok(())
}

#[tokio::test]
async fn test_sizes_and_ids_are_stable() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_library(temp_dir.path()).await?;
    let catalog = FolderCatalog::new(temp_dir.path().to_path_buf());

    let first = catalog.query().await?;
    let second = catalog.query().await?;

    let beach = first.iter().find(|p| &*p.name == "beach.jpg").expect("beach.jpg");
    assert_eq!(beach.size, 1024);
    let ids = |v: &[photosweep_models::PhotoItem]| v.iter().map(|p| p.id).collect::<Vec<_>>();
    assert_eq!(ids(&first), ids(&second));
    Ok(())
}

#[tokio::test]
async fn test_rescan_keeps_trashed_photos_out_of_review() -> Result<()> {
    let temp_dir = TempDir::new()?;
    setup_library(temp_dir.path()).await?;
    let catalog: Arc<dyn MediaCatalog> = Arc::new(FolderCatalog::new(temp_dir.path().to_path_buf()));
    let mut loader = CatalogLoader::new(catalog);
    let mut triage = TriageState::new();

    loader.start();
    let loaded = loader.wait().await.expect("first load");
    assert_eq!(triage.replace_active(loaded.photos), 4);

    let first = triage.current().expect("a photo to review").id;
    triage.trash(first)?;

    loader.start();
    let loaded = loader.wait().await.expect("second load");
    assert_eq!(loaded.result.photos_found, 4);
    assert_eq!(triage.replace_active(loaded.photos), 3);
    assert!(triage.is_trashed(first));
    assert!(!triage.is_active(first));
    Ok(())
}

#[tokio::test]
async fn test_missing_library_loads_as_empty_with_error() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let catalog: Arc<dyn MediaCatalog> = Arc::new(FolderCatalog::new(temp_dir.path().join("gone")));
    let mut loader = CatalogLoader::new(catalog);

    loader.start();
    let loaded = loader.wait().await.expect("a result even on failure");

    assert!(loaded.photos.is_empty());
    assert!(loaded.result.error.is_some());
    Ok(())
}
