mod access;
mod catalog;
mod deleter;
mod details;
mod loader;
mod triage;

pub use access::{AccessGate, FolderAccess};
pub use catalog::{FolderCatalog, MediaCatalog};
pub use deleter::{DryRunDeleter, FsDeleter, PhotoDeleter};
pub use details::{PhotoDetails, probe_details};
pub use loader::{CatalogLoader, LoadedCatalog};
pub use triage::{TriageError, TriageState};
