use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use uuid::Uuid;

/// A pending request to permanently delete everything currently in the trash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurgeRequest {
    pub id: Uuid,
    pub locations: Vec<PathBuf>,
    pub total_size: u64,
    pub created: DateTime<Local>,
}

impl PurgeRequest {
    #[must_use]
    pub fn new(locations: Vec<PathBuf>, total_size: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            locations,
            total_size,
            created: Local::now(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// How a purge request ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurgeOutcome {
    /// Every requested photo is gone.
    Granted,
    /// The user declined at the confirmation prompt.
    Denied,
    /// Some photos were deleted; `failed` lists the ones still on disk.
    Partial { failed: Vec<PathBuf> },
    /// Nothing was deleted.
    Failed(String),
}

impl PurgeOutcome {
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

impl fmt::Display for PurgeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
            Self::Partial { failed } => write!(f, "partial ({} failed)", failed.len()),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
