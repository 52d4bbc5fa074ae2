//! Upload selections and the lifetime of their preview URLs.
//!
//! Every picked file gets a preview URL. A [`PreviewUrl`] revokes its URL
//! when dropped, so removing a file, replacing the selection, submitting it
//! or closing the dialog each release exactly the URLs they discard.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use glimit_core::forms::UploadFile;

/// Creates and revokes preview URLs for picked files.
pub trait ObjectUrls: Send + Sync {
    fn create(&self, file: &UploadFile) -> String;

    fn revoke(&self, url: &str);
}

/// One preview URL, revoked on drop.
pub struct PreviewUrl {
    url: String,
    urls: Arc<dyn ObjectUrls>,
}

impl PreviewUrl {
    pub fn new(urls: Arc<dyn ObjectUrls>, file: &UploadFile) -> Self {
        Self {
            url: urls.create(file),
            urls,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        self.urls.revoke(&self.url);
    }
}

impl std::fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PreviewUrl").field(&self.url).finish()
    }
}

/// Files picked in a dialog and their previews, kept index-aligned.
pub struct UploadSelection {
    urls: Arc<dyn ObjectUrls>,
    files: Vec<UploadFile>,
    previews: Vec<PreviewUrl>,
}

impl UploadSelection {
    pub fn new(urls: Arc<dyn ObjectUrls>) -> Self {
        Self {
            urls,
            files: Vec::new(),
            previews: Vec::new(),
        }
    }

    /// Replace the selection. Previews of the old files are revoked.
    pub fn select(&mut self, files: Vec<UploadFile>) {
        self.clear();
        self.add(files);
    }

    /// Append files to the selection.
    pub fn add(&mut self, files: Vec<UploadFile>) {
        for file in files {
            self.previews.push(PreviewUrl::new(Arc::clone(&self.urls), &file));
            self.files.push(file);
        }
    }

    /// Remove file `index` and revoke its preview. Out-of-range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<UploadFile> {
        if index >= self.files.len() {
            return None;
        }
        self.previews.remove(index);
        Some(self.files.remove(index))
    }

    /// Hand the files to a submission and revoke every preview.
    pub fn take_files(&mut self) -> Vec<UploadFile> {
        self.previews.clear();
        std::mem::take(&mut self.files)
    }

    /// Drop every file and revoke every preview.
    pub fn clear(&mut self) {
        self.previews.clear();
        self.files.clear();
    }

    pub fn files(&self) -> &[UploadFile] {
        &self.files
    }

    pub fn previews(&self) -> Vec<&str> {
        self.previews.iter().map(PreviewUrl::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl std::fmt::Debug for UploadSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadSelection")
            .field("files", &self.files.len())
            .field("previews", &self.previews)
            .finish()
    }
}

/// In-process [`ObjectUrls`] handing out `blob:{origin}/{uuid}` URLs.
///
/// Keeps the set of live URLs so leaks and double revokes are observable.
pub struct BlobUrlRegistry {
    origin: String,
    live: Mutex<HashSet<String>>,
}

impl BlobUrlRegistry {
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            live: Mutex::new(HashSet::new()),
        }
    }

    pub fn live_count(&self) -> usize {
        self.live.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(url)
    }
}

impl ObjectUrls for BlobUrlRegistry {
    fn create(&self, _file: &UploadFile) -> String {
        let url = format!("blob:{}/{}", self.origin, uuid::Uuid::new_v4());
        self.live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(url.clone());
        url
    }

    fn revoke(&self, url: &str) {
        let removed = self
            .live
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(url);
        if !removed {
            tracing::warn!(%url, "Revoked an object URL that was not live");
        }
    }
}
