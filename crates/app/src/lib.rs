use color_eyre::eyre::Result;
use photosweep_config::{FIRST_LAUNCH, PreferenceStore, Preferences, Settings};
use photosweep_core::{
    AccessGate, CatalogLoader, DryRunDeleter, FolderAccess, FolderCatalog, FsDeleter, MediaCatalog, PhotoDeleter,
    PhotoDetails, TriageState,
};
use photosweep_models::{AccessStatus, LoadResult, Overlay, PhotoId, PurgeOutcome, PurgeRequest, PurgeResult, Screen};
use ratatui::widgets::ListState;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::oneshot;
use tracing::info;

mod actions;
mod handlers;

/// The collaborators the app talks to. Swapped for fakes in tests.
pub struct Components {
    pub catalog: Arc<dyn MediaCatalog>,
    pub gate: Box<dyn AccessGate>,
    pub deleter: Arc<dyn PhotoDeleter>,
    pub prefs: Box<dyn PreferenceStore>,
}

impl Components {
    /// Real implementations for the configured library folder.
    ///
    /// # Errors
    ///
    /// Returns an error if no library folder is configured.
    pub fn from_settings(settings: &Settings, prefs: Box<dyn PreferenceStore>) -> Result<Self> {
        let deleter: Arc<dyn PhotoDeleter> = if settings.dry_run {
            Arc::new(DryRunDeleter)
        } else {
            Arc::new(FsDeleter)
        };
        Ok(Self {
            catalog: Arc::new(FolderCatalog::from_settings(settings)?),
            gate: Box::new(FolderAccess::new(settings.library_folder.clone())),
            deleter,
            prefs,
        })
    }
}

struct InflightPurge {
    request: PurgeRequest,
    rx: oneshot::Receiver<Result<PurgeOutcome>>,
}

pub struct App {
    pub screen: Screen,
    pub overlay: Option<Overlay>,
    pub access: AccessStatus,
    pub settings: Settings,
    pub triage: TriageState,
    pub trash_list_state: ListState,
    pub details: Option<PhotoDetails>,
    /// Purge waiting for the user's y/n.
    pub awaiting_confirmation: Option<PurgeRequest>,
    pub last_load: Option<LoadResult>,
    pub last_purge: Option<PurgeResult>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub should_quit: bool,
    loader: CatalogLoader,
    purge: Option<InflightPurge>,
    gate: Box<dyn AccessGate>,
    deleter: Arc<dyn PhotoDeleter>,
    prefs: Box<dyn PreferenceStore>,
}

impl App {
    /// Creates the app from the user's config and preference files.
    /// `library` overrides the configured library folder.
    ///
    /// # Errors
    /// Returns an error if:
    /// - Settings cannot be loaded from the configuration file
    /// - No library folder is configured and none could be guessed
    pub async fn new(library: Option<PathBuf>) -> Result<Self> {
        let mut settings = Settings::load().await?;
        if let Some(folder) = library {
            settings = settings.with_library_folder(folder);
        }
        let prefs = Preferences::load().await?;
        let components = Components::from_settings(&settings, Box::new(prefs))?;
        Ok(Self::with_components(settings, components))
    }

    #[must_use]
    pub fn with_components(settings: Settings, components: Components) -> Self {
        let overlay = components
            .prefs
            .get_flag(FIRST_LAUNCH, true)
            .then_some(Overlay::Tutorial);

        Self {
            screen: Screen::Main,
            overlay,
            access: AccessStatus::Denied("Not checked yet".into()),
            settings,
            triage: TriageState::new(),
            trash_list_state: ListState::default(),
            details: None,
            awaiting_confirmation: None,
            last_load: None,
            last_purge: None,
            error_message: None,
            success_message: None,
            should_quit: false,
            loader: CatalogLoader::new(components.catalog),
            purge: None,
            gate: components.gate,
            deleter: components.deleter,
            prefs: components.prefs,
        }
    }

    /// Checks library access and, when granted, kicks off the first load.
    pub fn start(&mut self) {
        self.access = self.gate.check();
        if self.access.is_granted() {
            self.start_load();
        } else {
            info!("Waiting for library access: {:?}", self.access);
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    #[must_use]
    pub fn is_purging(&self) -> bool {
        self.purge.is_some()
    }

    #[must_use]
    pub fn selected_trash_index(&self) -> Option<usize> {
        self.trash_list_state.selected()
    }

    #[must_use]
    pub fn detail_target(&self) -> Option<PhotoId> {
        match self.overlay {
            Some(Overlay::Details(id)) => Some(id),
            _ => None,
        }
    }

    /// Applies finished background work.
    ///
    /// # Errors
    ///
    /// Currently infallible; kept fallible for the event loop's `?`.
    pub fn on_tick(&mut self) -> Result<()> {
        if let Some(loaded) = self.loader.poll() {
            self.apply_load(loaded);
        }

        if let Some(inflight) = self.purge.as_mut() {
            match inflight.rx.try_recv() {
                Ok(result) => self.finish_purge(result),
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    self.finish_purge(Err(color_eyre::eyre::eyre!("delete task ended without a result")));
                }
            }
        }
        Ok(())
    }

    /// Waits for any running load or purge and applies the results.
    pub async fn settle(&mut self) {
        if let Some(loaded) = self.loader.wait().await {
            self.apply_load(loaded);
        }
        if let Some(inflight) = self.purge.as_mut() {
            let result = (&mut inflight.rx)
                .await
                .unwrap_or_else(|_| Err(color_eyre::eyre::eyre!("delete task ended without a result")));
            self.finish_purge(result);
        }
    }
}
