use async_trait::async_trait;
use color_eyre::eyre::Result;
use photosweep_models::PurgeOutcome;
use std::path::PathBuf;
use tracing::{info, warn};

/// Permanently removes confirmed photos.
#[async_trait]
pub trait PhotoDeleter: Send + Sync {
    async fn delete(&self, locations: &[PathBuf]) -> Result<PurgeOutcome>;
}

/// Removes files from disk. There is no undo.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDeleter;

#[async_trait]
impl PhotoDeleter for FsDeleter {
    async fn delete(&self, locations: &[PathBuf]) -> Result<PurgeOutcome> {
        let mut failed = Vec::new();
        let mut last_error = None;

        for path in locations {
            match tokio::fs::remove_file(path).await {
                Ok(()) => info!("Deleted photo: {:?}", path),
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    // Already gone counts as deleted.
                    warn!("Photo already missing: {:?}", path);
                }
                Err(e) => {
                    warn!("Failed to delete photo {:?}: {}", path, e);
                    last_error = Some(e.to_string());
                    failed.push(path.clone());
                }
            }
        }

        Ok(if failed.is_empty() {
            PurgeOutcome::Granted
        } else if failed.len() == locations.len() {
            PurgeOutcome::Failed(last_error.unwrap_or_default())
        } else {
            PurgeOutcome::Partial { failed }
        })
    }
}

/// Reports success without touching the disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunDeleter;

#[async_trait]
impl PhotoDeleter for DryRunDeleter {
    async fn delete(&self, locations: &[PathBuf]) -> Result<PurgeOutcome> {
        for path in locations {
            info!("Dry run: would delete {:?}", path);
        }
        Ok(PurgeOutcome::Granted)
    }
}
