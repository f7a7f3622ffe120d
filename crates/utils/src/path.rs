use std::path::{Path, PathBuf};

use color_eyre::Result;

pub const APP_NAME: &str = "photosweep";

/// Path of `filename` inside the per-user PhotoSweep config directory.
///
/// # Errors
///
/// Returns an error if the platform has no config directory.
pub fn app_config_path(filename: &str) -> Result<PathBuf> {
    let config_dir =
        dirs::config_dir().ok_or_else(|| color_eyre::eyre::eyre!("Could not find config directory"))?;
    Ok(config_dir.join(APP_NAME).join(filename))
}

/// Creates the parent directory of `path` if it is missing.
///
/// # Errors
///
/// Returns an error if the path has no parent or the directory cannot be created.
pub async fn ensure_parent_dir(path: &Path) -> Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| color_eyre::eyre::eyre!("Invalid path: {}", path.display()))?;
    tokio::fs::create_dir_all(parent).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[tokio::test]
    async fn test_ensure_parent_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("a/b/c/prefs.toml");
        ensure_parent_dir(&target).await.unwrap();
        assert!(target.parent().unwrap().is_dir());
        assert!(!target.exists());
    }

    #[tokio::test]
    async fn test_ensure_parent_dir_rejects_root() {
        assert!(ensure_parent_dir(Path::new("/")).await.is_err());
    }
}
