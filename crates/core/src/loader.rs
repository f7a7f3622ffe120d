use chrono::Local;
use photosweep_models::{LoadResult, PhotoItem};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;
use tracing::{debug, error, info};

use crate::MediaCatalog;

/// A finished load, ready to replace the review queue in one step.
#[derive(Debug)]
pub struct LoadedCatalog {
    pub photos: Vec<Arc<PhotoItem>>,
    pub result: LoadResult,
}

impl LoadedCatalog {
    fn failed(generation: u64, started: Instant, message: String) -> Self {
        Self {
            photos: Vec::new(),
            result: LoadResult {
                generation,
                photos_found: 0,
                duration: started.elapsed(),
                timestamp: Local::now(),
                error: Some(message),
            },
        }
    }
}

/// Runs catalog queries in the background, one generation at a time.
///
/// Starting a load supersedes any load still running; the older result is
/// dropped when it arrives.
pub struct CatalogLoader {
    catalog: Arc<dyn MediaCatalog>,
    generation: u64,
    inflight: Option<(u64, Instant, oneshot::Receiver<LoadedCatalog>)>,
}

impl CatalogLoader {
    #[must_use]
    pub fn new(catalog: Arc<dyn MediaCatalog>) -> Self {
        Self {
            catalog,
            generation: 0,
            inflight: None,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inflight.is_some()
    }

    /// Spawns a query on the tokio runtime and returns its generation.
    pub fn start(&mut self) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let started = Instant::now();
        let catalog = Arc::clone(&self.catalog);
        let (tx, rx) = oneshot::channel();

        if let Some((old, _, _)) = self.inflight.replace((generation, started, rx)) {
            debug!("Load {} superseded by load {}", old, generation);
        }

        tokio::spawn(async move {
            let loaded = match catalog.query().await {
                Ok(photos) => {
                    let photos_found = photos.len();
                    LoadedCatalog {
                        photos: photos.into_iter().map(Arc::new).collect(),
                        result: LoadResult {
                            generation,
                            photos_found,
                            duration: started.elapsed(),
                            timestamp: Local::now(),
                            error: None,
                        },
                    }
                }
                Err(e) => {
                    error!("Load {} failed: {:#}", generation, e);
                    LoadedCatalog::failed(generation, started, e.to_string())
                }
            };
            if tx.send(loaded).is_err() {
                debug!("Load {} finished after being superseded, result dropped", generation);
            }
        });

        info!("Load {} started", generation);
        generation
    }

    /// Takes the current load's result if it has finished.
    pub fn poll(&mut self) -> Option<LoadedCatalog> {
        let (generation, started, rx) = self.inflight.as_mut()?;
        let loaded = match rx.try_recv() {
            Ok(loaded) => loaded,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => {
                LoadedCatalog::failed(*generation, *started, "catalog task ended without a result".into())
            }
        };
        self.inflight = None;
        Some(loaded)
    }

    /// Waits for the current load to finish.
    pub async fn wait(&mut self) -> Option<LoadedCatalog> {
        let (generation, started, rx) = self.inflight.take()?;
        Some(rx.await.unwrap_or_else(|_| {
            LoadedCatalog::failed(generation, started, "catalog task ended without a result".into())
        }))
    }
}
