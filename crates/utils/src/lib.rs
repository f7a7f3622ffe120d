mod bytes;
pub mod datetime;
pub mod media_types;
mod path;

pub use bytes::format_bytes;
pub use path::{APP_NAME, app_config_path, ensure_parent_dir};
