use photosweep_models::AccessStatus;
use std::path::PathBuf;
use tracing::{info, warn};

/// Read access to the photo library.
pub trait AccessGate: Send + Sync {
    fn check(&self) -> AccessStatus;

    /// Asks for access again. Never loops; the caller decides when to retry.
    fn request(&self) -> AccessStatus {
        self.check()
    }
}

/// Access to a library folder: it must exist, be a directory, and be listable.
#[derive(Debug, Clone)]
pub struct FolderAccess {
    folder: Option<PathBuf>,
}

impl FolderAccess {
    #[must_use]
    pub const fn new(folder: Option<PathBuf>) -> Self {
        Self { folder }
    }
}

impl AccessGate for FolderAccess {
    fn check(&self) -> AccessStatus {
        let Some(folder) = &self.folder else {
            return AccessStatus::Denied("No library folder configured".into());
        };
        if !folder.is_dir() {
            return AccessStatus::Denied(format!("{} is not a folder", folder.display()));
        }
        match std::fs::read_dir(folder) {
            Ok(_) => AccessStatus::Granted,
            Err(e) => AccessStatus::Denied(format!("Cannot read {}: {e}", folder.display())),
        }
    }

    fn request(&self) -> AccessStatus {
        let status = self.check();
        match &status {
            AccessStatus::Granted => info!("Library access granted: {:?}", self.folder),
            AccessStatus::Denied(reason) => warn!("Library access denied: {}", reason),
        }
        status
    }
}
