use color_eyre::eyre::Result;
use photosweep_utils::app_config_path;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_library_folder")]
    pub library_folder: Option<PathBuf>,
    #[serde(default = "default_recurse_subfolders")]
    pub recurse_subfolders: bool,
    #[serde(default = "default_skip_hidden_files")]
    pub skip_hidden_files: bool,
    #[serde(default)]
    pub follow_links: bool,
    /// Log what a purge would delete instead of deleting it.
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,
}

fn default_library_folder() -> Option<PathBuf> {
    dirs::picture_dir()
}
fn default_recurse_subfolders() -> bool {
    true
}
fn default_skip_hidden_files() -> bool {
    true
}
fn default_worker_threads() -> usize {
    num_cpus::get()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            library_folder: default_library_folder(),
            recurse_subfolders: default_recurse_subfolders(),
            skip_hidden_files: default_skip_hidden_files(),
            follow_links: false,
            dry_run: false,
            worker_threads: default_worker_threads(),
        }
    }
}

impl Settings {
    /// Loads settings from the user config directory, falling back to defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined, or the
    /// config file exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        Self::load_from(&app_config_path("config.toml")?).await
    }

    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = tokio::fs::read_to_string(path).await?;
        let mut settings: Self = toml::from_str(&content)?;
        if settings.worker_threads == 0 {
            warn!("worker_threads = 0 in {:?}, using 1", path);
            settings.worker_threads = 1;
        }
        Ok(settings)
    }

    /// Overrides the library folder, e.g. from a command line argument.
    #[must_use]
    pub fn with_library_folder(mut self, folder: PathBuf) -> Self {
        self.library_folder = Some(folder);
        self
    }
}
