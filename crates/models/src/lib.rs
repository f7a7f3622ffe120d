mod photo;
mod purge;
mod state;

pub use photo::{PhotoId, PhotoItem};
pub use purge::{PurgeOutcome, PurgeRequest};
pub use state::{AccessStatus, LoadResult, Overlay, PurgeResult, Screen};
