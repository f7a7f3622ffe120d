use chrono::Local;
use color_eyre::eyre::Result;
use photosweep_config::FIRST_LAUNCH;
use photosweep_core::{LoadedCatalog, TriageError, probe_details};
use photosweep_models::{Overlay, PurgeOutcome, PurgeResult, Screen};
use photosweep_utils::format_bytes;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::{error, info, warn};

use super::{App, InflightPurge};

impl App {
    /// Starts a background catalog load. Results are applied on tick.
    pub fn start_load(&mut self) {
        let generation = self.loader.start();
        self.success_message = Some("Scanning library...".to_string());
        info!("Requested catalog load {}", generation);
    }

    pub(crate) fn apply_load(&mut self, loaded: LoadedCatalog) {
        let count = self.triage.replace_active(loaded.photos);

        // A failed query looks like an empty library, plus a status line.
        if let Some(err) = &loaded.result.error {
            self.error_message = Some(format!("Could not read library: {err}"));
            self.success_message = None;
        } else {
            self.error_message = None;
            self.success_message = Some(if count == 0 {
                "Nothing to review".to_string()
            } else {
                format!("{count} photos to review")
            });
        }

        self.last_load = Some(loaded.result);
    }

    /// Re-checks library access; a grant starts the first load.
    pub fn request_access(&mut self) {
        self.access = self.gate.request();
        if self.access.is_granted() {
            self.start_load();
        }
    }

    pub fn trash_current(&mut self) {
        let Some(id) = self.triage.current().map(|p| p.id) else {
            return;
        };
        if let Err(e) = self.triage.trash(id) {
            warn!("Trash rejected: {}", e);
        }
        self.clear_messages();
    }

    pub fn keep_current(&mut self) {
        let Some(id) = self.triage.current().map(|p| p.id) else {
            return;
        };
        if let Err(e) = self.triage.keep(id) {
            warn!("Keep rejected: {}", e);
        }
        self.clear_messages();
    }

    pub fn recover_selected(&mut self) {
        let Some(id) = self
            .selected_trash_index()
            .and_then(|i| self.triage.trashed().get(i))
            .map(|p| p.id)
        else {
            return;
        };

        match self.triage.recover(id) {
            Ok(()) => {
                self.success_message = Some("Photo moved back to review".to_string());
                self.clamp_trash_selection();
            }
            Err(TriageError::PurgePending) => {
                self.error_message = Some("This photo is being deleted".to_string());
            }
            Err(e) => warn!("Recover rejected: {}", e),
        }
    }

    /// Snapshots the trash and asks the user to confirm permanent deletion.
    pub fn request_purge(&mut self) {
        match self.triage.request_purge() {
            Ok(request) => {
                info!(
                    "Asking to confirm deletion of {} photos ({})",
                    request.len(),
                    format_bytes(request.total_size)
                );
                self.clear_messages();
                self.awaiting_confirmation = Some(request);
                self.overlay = Some(Overlay::ConfirmPurge);
            }
            Err(TriageError::EmptyTrash) => {
                self.error_message = Some("Trash is empty".to_string());
            }
            Err(TriageError::PurgePending) => {
                self.error_message = Some("A deletion is already in progress".to_string());
            }
            Err(e) => warn!("Purge request rejected: {}", e),
        }
    }

    /// The user said yes: hand the snapshot to the deleter in the background.
    pub fn confirm_purge(&mut self) {
        self.overlay = None;
        let Some(request) = self.awaiting_confirmation.take() else {
            return;
        };

        let deleter = Arc::clone(&self.deleter);
        let locations = request.locations.clone();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            let result = deleter.delete(&locations).await;
            // The app may have quit meanwhile.
            let _ = tx.send(result);
        });

        self.error_message = None;
        self.success_message = Some(format!("Deleting {} photos...", request.len()));
        self.purge = Some(InflightPurge { request, rx });
    }

    /// The user said no: the trash stays exactly as it was.
    pub fn cancel_purge(&mut self) {
        self.overlay = None;
        if let Some(request) = self.awaiting_confirmation.take() {
            self.resolve_purge(request.id, request.len(), PurgeOutcome::Denied);
            self.success_message = Some("Deletion cancelled, trash unchanged".to_string());
        }
    }

    pub(crate) fn finish_purge(&mut self, result: Result<PurgeOutcome>) {
        let Some(inflight) = self.purge.take() else {
            return;
        };
        let outcome = result.unwrap_or_else(|e| {
            error!("Delete request {} failed: {:#}", inflight.request.id, e);
            PurgeOutcome::Failed(e.to_string())
        });
        self.resolve_purge(inflight.request.id, inflight.request.len(), outcome);
    }

    fn resolve_purge(&mut self, request_id: uuid::Uuid, requested: usize, outcome: PurgeOutcome) {
        match self.triage.complete_purge(request_id, &outcome) {
            Ok(removed) => match &outcome {
                PurgeOutcome::Granted => {
                    self.success_message = Some(format!("Deleted {removed} photos"));
                    self.error_message = None;
                }
                PurgeOutcome::Partial { failed } => {
                    self.success_message = None;
                    self.error_message = Some(format!(
                        "Deleted {removed} photos, {} could not be deleted",
                        failed.len()
                    ));
                }
                // The reason stays in the log; the user can simply retry.
                PurgeOutcome::Failed(_) => {
                    self.error_message = None;
                    self.success_message = Some("Nothing deleted, trash unchanged".to_string());
                }
                PurgeOutcome::Denied => {}
            },
            Err(e) => error!("Purge result dropped: {}", e),
        }

        self.clamp_trash_selection();
        self.last_purge = Some(PurgeResult {
            request_id,
            requested,
            outcome,
            timestamp: Local::now(),
        });
    }

    pub fn open_trash(&mut self) {
        self.screen = Screen::Trash;
        self.clear_messages();
        self.clamp_trash_selection();
    }

    pub fn close_trash(&mut self) {
        self.screen = Screen::Main;
    }

    pub fn open_details_of_current(&mut self) {
        if let Some(photo) = self.triage.current().cloned() {
            self.details = Some(probe_details(&photo));
            self.overlay = Some(Overlay::Details(photo.id));
        }
    }

    pub fn open_details_of_selected(&mut self) {
        let photo = self
            .selected_trash_index()
            .and_then(|i| self.triage.trashed().get(i))
            .cloned();
        if let Some(photo) = photo {
            self.details = Some(probe_details(&photo));
            self.overlay = Some(Overlay::Details(photo.id));
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
        self.details = None;
    }

    /// Hides the tutorial for good. A failed write only costs a repeat next run.
    pub async fn dismiss_tutorial(&mut self) {
        self.overlay = None;
        if let Err(e) = self.prefs.set_flag(FIRST_LAUNCH, false).await {
            error!("Could not save tutorial preference: {:#}", e);
        }
    }

    pub(crate) fn clamp_trash_selection(&mut self) {
        let len = self.triage.trash_len();
        let selected = match self.trash_list_state.selected() {
            _ if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => Some(0),
        };
        self.trash_list_state.select(selected);
    }

    fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }
}
