// SPDX-License-Identifier: MPL-2.0
//! Image fetching, decoding, and caching.
//!
//! Portfolio sources are either `http(s)` URLs or local file paths. Loading
//! happens in background tasks; decoded images land in an LRU cache keyed by
//! the source string, so thumbnail strips and repeated lightbox opens never
//! refetch.

use crate::error::{Error, Result};
use iced::widget::image;
use lru::LruCache;
use std::collections::HashSet;
use std::num::NonZeroUsize;
use std::sync::Arc;

/// Maximum number of decoded images kept in memory.
///
/// Full-size lightbox renditions are large (a 2400 px wide photo is ~20 MB
/// of RGBA), so the cache is bounded by entry count rather than trying to
/// hold the whole portfolio at full resolution.
const CACHE_CAPACITY: usize = 48;

const USER_AGENT: &str = concat!("IcedFolio/", env!("CARGO_PKG_VERSION"));

/// A decoded image ready for display.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl LoadedImage {
    /// Creates a `LoadedImage` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }
}

/// Returns true when the source should be fetched over HTTP.
fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

async fn fetch_remote(source: &str) -> Result<Vec<u8>> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(USER_AGENT)
        .build()?;

    let response = client.get(source).send().await?;
    if !response.status().is_success() {
        return Err(Error::Http(format!(
            "{source}: HTTP status {}",
            response.status()
        )));
    }

    Ok(response.bytes().await?.to_vec())
}

/// Fetches and decodes one portfolio source.
///
/// Decoding runs on a blocking thread because large JPEGs take tens of
/// milliseconds and this future is polled on the UI-facing runtime.
pub async fn load(source: String) -> Result<LoadedImage> {
    let bytes = if is_remote(&source) {
        fetch_remote(&source).await?
    } else {
        std::fs::read(&source).map_err(|e| Error::Io(format!("{source}: {e}")))?
    };

    let decoded = tokio::task::spawn_blocking(move || -> Result<LoadedImage> {
        let dynamic = image_rs::load_from_memory(&bytes)?;
        let rgba = dynamic.to_rgba8();
        let (width, height) = rgba.dimensions();
        Ok(LoadedImage::from_rgba(width, height, rgba.into_raw()))
    })
    .await
    .map_err(|e| Error::Image(e.to_string()))??;

    Ok(decoded)
}

/// LRU cache of decoded images, plus bookkeeping for sources that are
/// currently in flight so the same fetch is never started twice.
pub struct MediaCache {
    entries: LruCache<String, Arc<LoadedImage>>,
    pending: HashSet<String>,
}

impl MediaCache {
    #[must_use]
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY)
            .expect("CACHE_CAPACITY must be non-zero");
        Self {
            entries: LruCache::new(capacity),
            pending: HashSet::new(),
        }
    }

    /// Looks up a decoded image, refreshing its LRU position.
    pub fn get(&mut self, source: &str) -> Option<Arc<LoadedImage>> {
        self.entries.get(source).cloned()
    }

    /// Like [`get`](Self::get), but without promoting the entry. Used by
    /// `view` code, which must not mutate recency while rendering.
    #[must_use]
    pub fn peek(&self, source: &str) -> Option<&Arc<LoadedImage>> {
        self.entries.peek(source)
    }

    /// Returns true when a fetch should be started for this source, and
    /// marks it pending. Returns false when cached or already in flight.
    pub fn begin_fetch(&mut self, source: &str) -> bool {
        if self.entries.contains(source) || self.pending.contains(source) {
            return false;
        }
        self.pending.insert(source.to_string());
        true
    }

    /// Stores a completed fetch. Failed fetches only clear the pending mark;
    /// the source keeps its placeholder and may be retried later.
    pub fn complete_fetch(&mut self, source: &str, result: Result<LoadedImage>) {
        self.pending.remove(source);
        if let Ok(loaded) = result {
            self.entries.put(source.to_string(), Arc::new(loaded));
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MediaCache {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for MediaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCache")
            .field("entries", &self.entries.len())
            .field("pending", &self.pending.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(width: u32, height: u32) -> LoadedImage {
        LoadedImage::from_rgba(width, height, vec![0; (width * height * 4) as usize])
    }

    #[test]
    fn remote_detection() {
        assert!(is_remote("https://example.com/a.jpg"));
        assert!(is_remote("http://example.com/a.jpg"));
        assert!(!is_remote("photos/a.jpg"));
        assert!(!is_remote("/abs/path/a.jpg"));
    }

    #[test]
    fn begin_fetch_marks_pending_once() {
        let mut cache = MediaCache::new();
        assert!(cache.begin_fetch("a.jpg"));
        assert!(!cache.begin_fetch("a.jpg")); // already in flight
    }

    #[test]
    fn complete_fetch_stores_success() {
        let mut cache = MediaCache::new();
        assert!(cache.begin_fetch("a.jpg"));
        cache.complete_fetch("a.jpg", Ok(loaded(2, 2)));

        assert!(cache.get("a.jpg").is_some());
        assert!(!cache.begin_fetch("a.jpg")); // cached now
    }

    #[test]
    fn failed_fetch_can_be_retried() {
        let mut cache = MediaCache::new();
        assert!(cache.begin_fetch("a.jpg"));
        cache.complete_fetch("a.jpg", Err(Error::Http("boom".to_string())));

        assert!(cache.get("a.jpg").is_none());
        assert!(cache.begin_fetch("a.jpg")); // pending mark cleared
    }

    #[tokio::test]
    async fn load_decodes_local_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("pixel.png");
        let pixel = image_rs::RgbaImage::from_pixel(3, 2, image_rs::Rgba([10, 20, 30, 255]));
        pixel.save(&path).expect("failed to write test image");

        let loaded = load(path.to_string_lossy().to_string())
            .await
            .expect("load failed");
        assert_eq!((loaded.width, loaded.height), (3, 2));
    }

    #[tokio::test]
    async fn load_missing_local_file_is_io_error() {
        let err = load("/nonexistent/pixel.png".to_string()).await;
        assert!(matches!(err, Err(Error::Io(_))));
    }
}
