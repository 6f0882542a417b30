//! Core upload types
//!
//! - `UploadedFile`: metadata of a file selected in the current form session
//! - `Candidate`: a file offered to a slot together with its backend source
//! - `Slot`: the three upload targets of a project draft

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// One megabyte, as the size limits count it
pub const MEGABYTE: u64 = 1024 * 1024;

/// Session-unique identifier of an uploaded file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FileId(u64);

impl FileId {
    /// Allocate the next identifier
    pub fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "file-{}", self.0)
    }
}

/// A file the user selected, by browse or drop
///
/// Only metadata lives here; the bytes stay with the platform source
/// (a browser `File`, for instance) carried by [`Candidate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: FileId,
    pub name: String,
    /// Size in bytes
    pub size: u64,
    /// MIME type as reported by the platform (may be empty)
    pub mime: String,
}

impl UploadedFile {
    /// Create file metadata with a fresh identifier
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            id: FileId::next(),
            name: name.into(),
            size,
            mime: mime.into(),
        }
    }

    /// Whether the MIME type is an `image/*` type
    pub fn is_image(&self) -> bool {
        self.mime
            .split_once('/')
            .map(|(kind, sub)| kind.eq_ignore_ascii_case("image") && !sub.is_empty())
            .unwrap_or(false)
    }

    /// Human-readable size ("2.4 MB")
    pub fn size_label(&self) -> String {
        format_size(self.size)
    }
}

/// Format a byte count the way upload hints do ("512 B", "12.5 KB", "2.4 MB")
pub fn format_size(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    let b = bytes as f64;
    if b < KB {
        format!("{} B", bytes)
    } else if b < KB * KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{:.1} MB", b / (KB * KB))
    }
}

/// A file offered to an upload slot, before validation
#[derive(Debug, Clone)]
pub struct Candidate<S> {
    pub file: UploadedFile,
    /// Platform handle used to build the preview
    pub source: S,
}

impl<S> Candidate<S> {
    pub fn new(file: UploadedFile, source: S) -> Self {
        Self { file, source }
    }
}

impl Candidate<()> {
    /// Candidate without a platform source (tests, demos)
    pub fn detached(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self::new(UploadedFile::new(name, size, mime), ())
    }
}

/// How many files a slot holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// New file replaces the current one
    Single,
    /// Files accumulate across interactions
    Multiple,
}

/// Upload target of a project draft
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    /// Cover image, one at a time
    Cover,
    /// Gallery images
    Gallery,
    /// Supporting documents of any type
    Attachments,
}

impl Slot {
    pub fn all() -> &'static [Slot] {
        &[Slot::Cover, Slot::Gallery, Slot::Attachments]
    }

    pub fn cardinality(&self) -> Cardinality {
        match self {
            Slot::Cover => Cardinality::Single,
            Slot::Gallery | Slot::Attachments => Cardinality::Multiple,
        }
    }

    /// Whether only `image/*` files are accepted
    pub fn images_only(&self) -> bool {
        matches!(self, Slot::Cover | Slot::Gallery)
    }

    /// Label shown above the drop zone
    pub fn label(&self) -> &'static str {
        match self {
            Slot::Cover => "Image de couverture",
            Slot::Gallery => "Galerie d'images",
            Slot::Attachments => "Pièces jointes (optionnel)",
        }
    }

    /// `accept` hint for the file input. The browser does not enforce it on drop.
    pub fn accept_hint(&self) -> &'static str {
        match self {
            Slot::Cover | Slot::Gallery => "image/*",
            Slot::Attachments => ".pdf,.doc,.docx,.xls,.xlsx",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Cover => write!(f, "cover"),
            Slot::Gallery => write!(f, "gallery"),
            Slot::Attachments => write!(f, "attachments"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_ids_are_unique() {
        let a = UploadedFile::new("a.png", 1, "image/png");
        let b = UploadedFile::new("a.png", 1, "image/png");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_is_image() {
        assert!(UploadedFile::new("a.png", 1, "image/png").is_image());
        assert!(UploadedFile::new("a.JPG", 1, "IMAGE/JPEG").is_image());
        assert!(!UploadedFile::new("a.pdf", 1, "application/pdf").is_image());
        assert!(!UploadedFile::new("a", 1, "").is_image());
        assert!(!UploadedFile::new("a", 1, "image/").is_image());
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(5 * MEGABYTE), "5.0 MB");
    }

    #[test]
    fn test_slot_cardinality() {
        assert_eq!(Slot::Cover.cardinality(), Cardinality::Single);
        assert_eq!(Slot::Gallery.cardinality(), Cardinality::Multiple);
        assert!(!Slot::Attachments.images_only());
    }
}
