use ahash::AHashSet;
use photosweep_models::{PhotoId, PhotoItem, PurgeOutcome, PurgeRequest};
use smallvec::SmallVec;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// How many photos of the active queue are on screen at once.
pub const VISIBLE_CARDS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriageError {
    #[error("photo {0} is not awaiting review")]
    NotActive(PhotoId),
    #[error("photo {0} is not in the trash")]
    NotTrashed(PhotoId),
    #[error("the trash is empty")]
    EmptyTrash,
    #[error("a purge is already in progress")]
    PurgePending,
    #[error("no purge with id {0} is in progress")]
    UnknownPurge(Uuid),
}

#[derive(Debug)]
struct PendingPurge {
    request_id: Uuid,
    ids: AHashSet<PhotoId>,
}

/// The two triage lists and the only operations allowed to change them.
///
/// `active` is the review queue in catalog order (newest first). `trash` holds
/// photos marked for deletion, most recently trashed first. A photo is never in
/// both lists at once.
#[derive(Debug, Default)]
pub struct TriageState {
    active: Vec<Arc<PhotoItem>>,
    trash: Vec<Arc<PhotoItem>>,
    pending: Option<PendingPurge>,
}

impl TriageState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn active(&self) -> &[Arc<PhotoItem>] {
        &self.active
    }

    #[must_use]
    pub fn trashed(&self) -> &[Arc<PhotoItem>] {
        &self.trash
    }

    /// The photo currently up for a decision.
    #[must_use]
    pub fn current(&self) -> Option<&Arc<PhotoItem>> {
        self.active.first()
    }

    /// Front of the queue as drawn on screen, front-most first.
    #[must_use]
    pub fn visible(&self) -> SmallVec<[Arc<PhotoItem>; VISIBLE_CARDS]> {
        self.active.iter().take(VISIBLE_CARDS).cloned().collect()
    }

    /// True when nothing is left to review, whatever the trash holds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    #[must_use]
    pub fn trash_len(&self) -> usize {
        self.trash.len()
    }

    #[must_use]
    pub fn trash_size(&self) -> u64 {
        self.trash.iter().map(|p| p.size).sum()
    }

    #[must_use]
    pub fn purge_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn is_active(&self, id: PhotoId) -> bool {
        self.active.iter().any(|p| p.id == id)
    }

    #[must_use]
    pub fn is_trashed(&self, id: PhotoId) -> bool {
        self.trash.iter().any(|p| p.id == id)
    }

    #[must_use]
    pub fn find(&self, id: PhotoId) -> Option<&Arc<PhotoItem>> {
        self.active.iter().chain(self.trash.iter()).find(|p| p.id == id)
    }

    /// Replaces the review queue with a fresh catalog load.
    ///
    /// Photos already in the trash are left out so they are not offered twice.
    /// Returns the new queue length.
    pub fn replace_active(&mut self, photos: Vec<Arc<PhotoItem>>) -> usize {
        let trashed: AHashSet<PhotoId> = self.trash.iter().map(|p| p.id).collect();
        let loaded = photos.len();
        self.active = photos.into_iter().filter(|p| !trashed.contains(&p.id)).collect();

        let skipped = loaded - self.active.len();
        if skipped > 0 {
            debug!("Skipped {} loaded photos already in the trash", skipped);
        }
        info!("Review queue replaced: {} photos", self.active.len());
        self.active.len()
    }

    /// Marks an active photo for deletion.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::NotActive`] if the photo is not in the queue.
    pub fn trash(&mut self, id: PhotoId) -> Result<(), TriageError> {
        let photo = Self::take(&mut self.active, id).ok_or(TriageError::NotActive(id))?;
        debug!("Trashed {:?}", photo.location);
        self.trash.insert(0, photo);
        Ok(())
    }

    /// Drops an active photo from the queue without marking it.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::NotActive`] if the photo is not in the queue.
    pub fn keep(&mut self, id: PhotoId) -> Result<(), TriageError> {
        let photo = Self::take(&mut self.active, id).ok_or(TriageError::NotActive(id))?;
        debug!("Kept {:?}", photo.location);
        Ok(())
    }

    /// Moves a trashed photo back to the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::NotTrashed`] if the photo is not in the trash, or
    /// [`TriageError::PurgePending`] if it is part of a purge in progress.
    pub fn recover(&mut self, id: PhotoId) -> Result<(), TriageError> {
        if self.pending.as_ref().is_some_and(|p| p.ids.contains(&id)) {
            return Err(TriageError::PurgePending);
        }
        let photo = Self::take(&mut self.trash, id).ok_or(TriageError::NotTrashed(id))?;
        debug!("Recovered {:?}", photo.location);
        self.active.insert(0, photo);
        Ok(())
    }

    /// Snapshots the trash into a purge request and marks it in progress.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::EmptyTrash`] if there is nothing to purge, or
    /// [`TriageError::PurgePending`] while another purge is unresolved.
    pub fn request_purge(&mut self) -> Result<PurgeRequest, TriageError> {
        if self.pending.is_some() {
            return Err(TriageError::PurgePending);
        }
        if self.trash.is_empty() {
            return Err(TriageError::EmptyTrash);
        }

        let locations: Vec<PathBuf> = self.trash.iter().map(|p| p.location.clone()).collect();
        let request = PurgeRequest::new(locations, self.trash_size());
        self.pending = Some(PendingPurge {
            request_id: request.id,
            ids: self.trash.iter().map(|p| p.id).collect(),
        });

        info!("Purge {} requested for {} photos", request.id, request.len());
        Ok(request)
    }

    /// Applies the outcome of a purge and clears the in-progress mark.
    ///
    /// `Granted` removes every requested photo from the trash, `Partial` keeps
    /// only the ones that failed, `Denied` and `Failed` change nothing.
    /// Returns how many photos left the trash.
    ///
    /// # Errors
    ///
    /// Returns [`TriageError::UnknownPurge`] if `request_id` is not the purge in progress.
    pub fn complete_purge(&mut self, request_id: Uuid, outcome: &PurgeOutcome) -> Result<usize, TriageError> {
        let pending = match self.pending.take() {
            Some(p) if p.request_id == request_id => p,
            other => {
                self.pending = other;
                return Err(TriageError::UnknownPurge(request_id));
            }
        };

        let before = self.trash.len();
        match outcome {
            PurgeOutcome::Granted => {
                self.trash.retain(|p| !pending.ids.contains(&p.id));
            }
            PurgeOutcome::Partial { failed } => {
                self.trash
                    .retain(|p| !pending.ids.contains(&p.id) || failed.contains(&p.location));
                warn!("Purge {} left {} photos behind", request_id, failed.len());
            }
            PurgeOutcome::Denied | PurgeOutcome::Failed(_) => {}
        }

        let removed = before - self.trash.len();
        info!("Purge {} finished ({}): {} photos removed", request_id, outcome, removed);
        Ok(removed)
    }

    fn take(list: &mut Vec<Arc<PhotoItem>>, id: PhotoId) -> Option<Arc<PhotoItem>> {
        let index = list.iter().position(|p| p.id == id)?;
        Some(list.remove(index))
    }
}
