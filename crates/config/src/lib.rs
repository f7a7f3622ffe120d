mod preferences;
mod settings;

pub use preferences::{FIRST_LAUNCH, MemoryPreferences, PreferenceStore, Preferences};
pub use settings::Settings;
