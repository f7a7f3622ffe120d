use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Stable identifier of a photo, derived from its location.
///
/// The same path always yields the same id, across loads and across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PhotoId(u64);

impl PhotoId {
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        let digest = Sha256::digest(path.to_string_lossy().as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self(u64::from_be_bytes(bytes))
    }

    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// A single photo in the library. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoItem {
    pub id: PhotoId,
    pub location: PathBuf,
    pub name: Arc<str>,
    pub size: u64,
    pub added: DateTime<Local>,
}

impl PhotoItem {
    #[must_use]
    pub fn new(location: PathBuf, size: u64, added: DateTime<Local>) -> Self {
        let name: Arc<str> = location
            .file_name()
            .map_or_else(|| location.to_string_lossy(), |n| n.to_string_lossy())
            .into();
        Self {
            id: PhotoId::from_path(&location),
            location,
            name,
            size,
            added,
        }
    }
}

// Identity is the id alone; metadata may differ between two loads of the same file.
impl PartialEq for PhotoItem {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PhotoItem {}

impl Hash for PhotoItem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
