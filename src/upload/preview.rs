//! Preview handle management
//!
//! A preview is a transient, revocable reference (an object URL in the
//! browser) that lets the page display a file before anything is persisted.
//! Every acquired handle must be released exactly once:
//!
//! - `PreviewHandle` is neither `Clone` nor `Copy`, and `release` takes it by
//!   value, so a second release of the same handle does not compile.
//! - A handle dropped without release is reported through `tracing`.
//!
//! Backends are pluggable: [`MemoryPreviews`] keeps everything in process and
//! records each call, the UI crate revokes real object URLs.

use std::collections::{BTreeSet, HashSet};

use super::error::PreviewError;
use super::types::{FileId, UploadedFile};

/// Platform side of preview creation
pub trait PreviewBackend {
    /// What the platform needs to build a preview (a browser `File`, bytes, ...)
    type Source;

    /// Create a displayable reference for `file`
    fn create(&mut self, file: &UploadedFile, source: &Self::Source) -> Result<String, PreviewError>;

    /// Invalidate a reference returned by `create`
    fn revoke(&mut self, url: &str);
}

/// A live preview bound to one uploaded file
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a preview handle must be released through PreviewManager::release"]
pub struct PreviewHandle {
    file: FileId,
    url: String,
    armed: bool,
}

impl PreviewHandle {
    /// File this preview displays
    pub fn file(&self) -> FileId {
        self.file
    }

    /// Displayable reference (`src` of an `<img>`)
    pub fn url(&self) -> &str {
        &self.url
    }

    fn disarm(mut self) -> String {
        self.armed = false;
        std::mem::take(&mut self.url)
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!(file = %self.file, url = %self.url, "preview handle dropped without release");
        }
    }
}

/// Acquire/release counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewStats {
    pub acquired: u64,
    pub released: u64,
}

impl PreviewStats {
    /// Handles currently held
    pub fn live(&self) -> u64 {
        self.acquired.saturating_sub(self.released)
    }
}

/// Owner of the preview backend; the only place handles are created or revoked
#[derive(Debug)]
pub struct PreviewManager<B> {
    backend: B,
    stats: PreviewStats,
}

impl<B: PreviewBackend> PreviewManager<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            stats: PreviewStats::default(),
        }
    }

    /// Allocate a preview for `file`
    pub fn acquire(&mut self, file: &UploadedFile, source: &B::Source) -> Result<PreviewHandle, PreviewError> {
        let url = self.backend.create(file, source)?;
        self.stats.acquired += 1;
        tracing::debug!(file = %file.id, name = %file.name, %url, "preview acquired");

        Ok(PreviewHandle {
            file: file.id,
            url,
            armed: true,
        })
    }

    /// Invalidate a preview. Consumes the handle.
    pub fn release(&mut self, handle: PreviewHandle) {
        let file = handle.file;
        let url = handle.disarm();
        self.backend.revoke(&url);
        self.stats.released += 1;
        tracing::debug!(%file, %url, "preview released");
    }

    pub fn stats(&self) -> PreviewStats {
        self.stats
    }

    /// Handles currently held
    pub fn live(&self) -> u64 {
        self.stats.live()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }
}

/// Call recorded by [`MemoryPreviews`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    Created { file: FileId, url: String },
    Revoked { url: String },
}

/// In-process backend that records every create and revoke
#[derive(Debug, Default)]
pub struct MemoryPreviews {
    next: u64,
    live: BTreeSet<String>,
    events: Vec<PreviewEvent>,
    failing: HashSet<String>,
}

impl MemoryPreviews {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `create` fail for files with this name
    pub fn fail_for(mut self, name: impl Into<String>) -> Self {
        self.failing.insert(name.into());
        self
    }

    pub fn events(&self) -> &[PreviewEvent] {
        &self.events
    }

    pub fn created(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PreviewEvent::Created { .. }))
            .count()
    }

    pub fn revoked(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, PreviewEvent::Revoked { .. }))
            .count()
    }

    /// URLs created and not yet revoked
    pub fn live_urls(&self) -> impl Iterator<Item = &str> {
        self.live.iter().map(String::as_str)
    }

    pub fn is_live(&self, url: &str) -> bool {
        self.live.contains(url)
    }
}

impl PreviewBackend for MemoryPreviews {
    type Source = ();

    fn create(&mut self, file: &UploadedFile, _source: &()) -> Result<String, PreviewError> {
        if self.failing.contains(&file.name) {
            return Err(PreviewError::Create {
                name: file.name.clone(),
                reason: "backend refused".to_string(),
            });
        }

        self.next += 1;
        let url = format!("blob:memory/{}", self.next);
        self.live.insert(url.clone());
        self.events.push(PreviewEvent::Created {
            file: file.id,
            url: url.clone(),
        });
        Ok(url)
    }

    fn revoke(&mut self, url: &str) {
        if !self.live.remove(url) {
            tracing::warn!(%url, "revoke of unknown preview");
        }
        self.events.push(PreviewEvent::Revoked {
            url: url.to_string(),
        });
    }
}
