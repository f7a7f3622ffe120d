use async_trait::async_trait;
use chrono::Local;
use color_eyre::eyre::{Result, eyre};
use photosweep_config::Settings;
use photosweep_models::PhotoItem;
use photosweep_utils::datetime::added_time;
use photosweep_utils::media_types::is_photo_path;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Source of truth enumerating the photos available for review.
#[async_trait]
pub trait MediaCatalog: Send + Sync {
    /// All photos, most recently added first.
    async fn query(&self) -> Result<Vec<PhotoItem>>;
}

/// A photo library rooted at a folder on disk.
#[derive(Debug, Clone)]
pub struct FolderCatalog {
    root: PathBuf,
    recursive: bool,
    skip_hidden: bool,
    follow_links: bool,
    worker_threads: usize,
}

impl FolderCatalog {
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            recursive: true,
            skip_hidden: true,
            follow_links: false,
            worker_threads: 1,
        }
    }

    /// # Errors
    ///
    /// Returns an error if no library folder is configured.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let root = settings
            .library_folder
            .clone()
            .ok_or_else(|| eyre!("Library folder not configured"))?;
        Ok(Self {
            root,
            recursive: settings.recurse_subfolders,
            skip_hidden: settings.skip_hidden_files,
            follow_links: settings.follow_links,
            worker_threads: settings.worker_threads.max(1),
        })
    }

    #[must_use]
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    #[must_use]
    pub fn skip_hidden(mut self, skip: bool) -> Self {
        self.skip_hidden = skip;
        self
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn scan(&self) -> Result<Vec<PhotoItem>> {
        let started = Instant::now();
        if !self.root.is_dir() {
            return Err(eyre!("Library folder does not exist: {}", self.root.display()));
        }

        let skip_hidden = self.skip_hidden;
        let paths: Vec<PathBuf> = WalkDir::new(&self.root)
            .follow_links(self.follow_links)
            .max_depth(if self.recursive { usize::MAX } else { 1 })
            .into_iter()
            .filter_entry(|e| !(skip_hidden && e.depth() > 0 && is_hidden(e)))
            .filter_map(|entry| match entry {
                Ok(e) => Some(e),
                Err(err) => {
                    warn!("Catalog: skipping unreadable entry: {}", err);
                    None
                }
            })
            .filter(|e| e.file_type().is_file() && is_photo_path(e.path()))
            .map(DirEntry::into_path)
            .collect();

        debug!("Catalog: {} candidate files under {:?}", paths.len(), self.root);

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.worker_threads)
            .build()?;
        let mut photos: Vec<PhotoItem> = pool.install(|| paths.into_par_iter().filter_map(describe).collect());

        sort_newest_first(&mut photos);

        info!(
            "Catalog: {} photos in {:?} ({:.2?})",
            photos.len(),
            self.root,
            started.elapsed()
        );
        Ok(photos)
    }
}

#[async_trait]
impl MediaCatalog for FolderCatalog {
    async fn query(&self) -> Result<Vec<PhotoItem>> {
        let catalog = self.clone();
        tokio::task::spawn_blocking(move || catalog.scan()).await?
    }
}

/// Descending add time; equal times fall back to path order so loads are repeatable.
pub(crate) fn sort_newest_first(photos: &mut [PhotoItem]) {
    photos.sort_by(|a, b| b.added.cmp(&a.added).then_with(|| a.location.cmp(&b.location)));
}

fn describe(path: PathBuf) -> Option<PhotoItem> {
    match std::fs::metadata(&path) {
        Ok(metadata) => {
            let added = added_time(&metadata).unwrap_or_else(Local::now);
            Some(PhotoItem::new(path, metadata.len(), added))
        }
        Err(e) => {
            warn!("Catalog: cannot stat {:?}: {}", path, e);
            None
        }
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_str().is_some_and(|s| s.starts_with('.'))
}
