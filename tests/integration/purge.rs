use color_eyre::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;

use photosweep_core::{DryRunDeleter, FolderCatalog, FsDeleter, MediaCatalog, PhotoDeleter, TriageState};
use photosweep_models::PurgeOutcome;

async fn create_photos(root: &Path, names: &[&str]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::with_capacity(names.len());
    for name in names {
        let path = root.join(name);
        fs::write(&path, b"JPG_DATA").await?;
        paths.push(path);
    }
    Ok(paths)
}

/// Loads the folder into a fresh triage state.
async fn triage_for(root: &Path) -> Result<TriageState> {
    let photos = FolderCatalog::new(root.to_path_buf()).query().await?;
    let mut triage = TriageState::new();
    triage.replace_active(photos.into_iter().map(Arc::new).collect());
    Ok(triage)
}

fn trash_all(triage: &mut TriageState) -> Result<()> {
    while let Some(id) = triage.current().map(|p| p.id) {
        triage.trash(id)?;
    }
    Ok(())
}

#[tokio::test]
async fn test_granted_purge_removes_files_and_trash() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = create_photos(temp_dir.path(), &["a.jpg", "b.jpg", "c.jpg"]).await?;
    let mut triage = triage_for(temp_dir.path()).await?;
    trash_all(&mut triage)?;

    let request = triage.request_purge()?;
    assert_eq!(request.len(), 3);
    assert_eq!(request.total_size, 3 * 8);

    let outcome = FsDeleter.delete(&request.locations).await?;
    assert_eq!(outcome, PurgeOutcome::Granted);
    assert_eq!(triage.complete_purge(request.id, &outcome)?, 3);

    assert_eq!(triage.trash_len(), 0);
    assert!(!triage.purge_pending());
    for path in paths {
        assert!(!path.exists(), "{} should be deleted", path.display());
    }
    Ok(())
}

#[tokio::test]
async fn test_denied_purge_keeps_files_and_trash() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = create_photos(temp_dir.path(), &["a.jpg", "b.jpg"]).await?;
    let mut triage = triage_for(temp_dir.path()).await?;
    trash_all(&mut triage)?;
    let before: Vec<_> = triage.trashed().iter().map(|p| p.id).collect();

    let request = triage.request_purge()?;
    assert_eq!(triage.complete_purge(request.id, &PurgeOutcome::Denied)?, 0);

    let after: Vec<_> = triage.trashed().iter().map(|p| p.id).collect();
    assert_eq!(before, after);
    assert!(paths.iter().all(|p| p.exists()));

    // A fresh request is allowed once the previous one resolved.
    assert!(triage.request_purge().is_ok());
    Ok(())
}

#[tokio::test]
async fn test_files_vanished_before_purge_count_as_deleted() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let paths = create_photos(temp_dir.path(), &["a.jpg", "b.jpg"]).await?;
    let mut triage = triage_for(temp_dir.path()).await?;
    trash_all(&mut triage)?;

    fs::remove_file(&paths[0]).await?;
    let request = triage.request_purge()?;
    let outcome = FsDeleter.delete(&request.locations).await?;

    assert_eq!(outcome, PurgeOutcome::Granted);
    triage.complete_purge(request.id, &outcome)?;
    assert_eq!(triage.trash_len(), 0);
    Ok(())
}

#[tokio::test]
async fn test_partial_purge_keeps_only_failures() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_photos(temp_dir.path(), &["a.jpg", "b.jpg", "c.jpg"]).await?;
    let mut triage = triage_for(temp_dir.path()).await?;
    trash_all(&mut triage)?;

    let request = triage.request_purge()?;
    let failed = vec![request.locations[1].clone()];
    let outcome = PurgeOutcome::Partial { failed: failed.clone() };

    assert_eq!(triage.complete_purge(request.id, &outcome)?, 2);
    let left: Vec<_> = triage.trashed().iter().map(|p| p.location.clone()).collect();
    assert_eq!(left, failed);
    Ok(())
}

#[tokio::test]
async fn test_photos_trashed_during_purge_survive_it() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_photos(temp_dir.path(), &["a.jpg", "b.jpg"]).await?;
    let mut triage = triage_for(temp_dir.path()).await?;

    let first = triage.current().expect("photo").id;
    triage.trash(first)?;
    let request = triage.request_purge()?;

    let late = triage.current().expect("photo").id;
    triage.trash(late)?;

    let outcome = DryRunDeleter.delete(&request.locations).await?;
    triage.complete_purge(request.id, &outcome)?;

    assert!(!triage.is_trashed(first));
    assert!(triage.is_trashed(late));
    Ok(())
}
