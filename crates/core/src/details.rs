use photosweep_models::PhotoItem;
use photosweep_utils::media_types::is_decodable;
use tracing::debug;

/// What the details overlay shows about one photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoDetails {
    pub dimensions: Option<(u32, u32)>,
    pub exists: bool,
}

/// Reads the image header for dimensions; pixels are never decoded.
#[must_use]
pub fn probe_details(photo: &PhotoItem) -> PhotoDetails {
    let exists = photo.location.is_file();
    let dimensions = if exists && is_decodable(&photo.location) {
        image::image_dimensions(&photo.location)
            .map_err(|e| debug!("No dimensions for {:?}: {}", photo.location, e))
            .ok()
    } else {
        None
    };
    PhotoDetails { dimensions, exists }
}
