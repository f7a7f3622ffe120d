use regex::Regex;
use std::path::Path;

#[allow(clippy::expect_used)]
pub static PHOTO_EXTENSIONS: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|gif|bmp|webp|tiff?|heic|heif|avif|raw|cr2|cr3|nef|arw|dng|orf|rw2|pef|sr2|raf)$")
        .expect("Failed to compile PHOTO_EXTENSIONS regex")
});

/// Extensions `image` can read dimensions from without a RAW decoder.
const DECODABLE: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp", "tif", "tiff", "avif"];

#[must_use]
pub fn is_photo_path(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| PHOTO_EXTENSIONS.is_match(n))
}

#[must_use]
pub fn is_decodable(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| DECODABLE.contains(&e.to_lowercase().as_str()))
}
