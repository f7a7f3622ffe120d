use ahash::AHashMap;
use async_trait::async_trait;
use color_eyre::eyre::Result;
use photosweep_utils::{app_config_path, ensure_parent_dir};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Flag that stays `true` until the first-run tutorial has been dismissed.
pub const FIRST_LAUNCH: &str = "first_launch";

/// Named boolean flags that survive restarts.
#[async_trait]
pub trait PreferenceStore: Send + Sync {
    fn get_flag(&self, name: &str, default: bool) -> bool;

    /// # Errors
    ///
    /// Returns an error if the flag cannot be persisted.
    async fn set_flag(&mut self, name: &str, value: bool) -> Result<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PrefsFile {
    #[serde(default)]
    flags: AHashMap<String, bool>,
}

/// Flags stored in `prefs.toml` next to the config file.
#[derive(Debug)]
pub struct Preferences {
    path: PathBuf,
    file: PrefsFile,
}

impl Preferences {
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined.
    pub async fn load() -> Result<Self> {
        Ok(Self::load_from(app_config_path("prefs.toml")?).await)
    }

    /// Reads `path`; a missing or unreadable file yields empty preferences.
    pub async fn load_from(path: PathBuf) -> Self {
        let file = match tokio::fs::read_to_string(&path).await {
            Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
                warn!("Ignoring malformed preferences {:?}: {}", path, e);
                PrefsFile::default()
            }),
            Err(e) => {
                debug!("No preferences at {:?}: {}", path, e);
                PrefsFile::default()
            }
        };
        Self { path, file }
    }
}

#[async_trait]
impl PreferenceStore for Preferences {
    fn get_flag(&self, name: &str, default: bool) -> bool {
        self.file.flags.get(name).copied().unwrap_or(default)
    }

    async fn set_flag(&mut self, name: &str, value: bool) -> Result<()> {
        self.file.flags.insert(name.to_string(), value);

        ensure_parent_dir(&self.path).await?;
        tokio::fs::write(&self.path, toml::to_string_pretty(&self.file)?).await?;

        info!("Preference {} = {} saved to {:?}", name, value, self.path);
        Ok(())
    }
}

/// In-memory store for tests and for runs without a config directory.
#[derive(Debug, Default, Clone)]
pub struct MemoryPreferences {
    flags: AHashMap<String, bool>,
}

impl MemoryPreferences {
    #[must_use]
    pub fn with_flag(mut self, name: &str, value: bool) -> Self {
        self.flags.insert(name.to_string(), value);
        self
    }
}

#[async_trait]
impl PreferenceStore for MemoryPreferences {
    fn get_flag(&self, name: &str, default: bool) -> bool {
        self.flags.get(name).copied().unwrap_or(default)
    }

    async fn set_flag(&mut self, name: &str, value: bool) -> Result<()> {
        self.flags.insert(name.to_string(), value);
        Ok(())
    }
}
