use chrono::{DateTime, Local};
use std::time::Duration;
use uuid::Uuid;

use crate::{PhotoId, PurgeOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Main,
    Trash,
}

/// Modal drawn on top of the current screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Tutorial,
    Help,
    Details(PhotoId),
    ConfirmPurge,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessStatus {
    Granted,
    Denied(String),
}

impl AccessStatus {
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Summary of a finished catalog load.
#[derive(Debug, Clone)]
pub struct LoadResult {
    pub generation: u64,
    pub photos_found: usize,
    pub duration: Duration,
    pub timestamp: DateTime<Local>,
    pub error: Option<String>,
}

/// Summary of a finished purge.
#[derive(Debug, Clone)]
pub struct PurgeResult {
    pub request_id: Uuid,
    pub requested: usize,
    pub outcome: PurgeOutcome,
    pub timestamp: DateTime<Local>,
}
