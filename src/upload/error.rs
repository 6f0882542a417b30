//! Upload error types
//!
//! Rejections are user-facing: their `Display` text ends up in a toast next
//! to the file name, so it is written in the interface language.

use thiserror::Error;

use super::types::{format_size, UploadedFile};

/// Why a candidate file was not added to a slot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Image slot received a non-image file
    #[error("ce fichier n'est pas une image ({})", display_mime(.mime))]
    NotAnImage { mime: String },

    /// File exceeds the slot's size limit
    #[error("fichier trop volumineux ({}, max. {})", size_label(.size), size_label(.limit))]
    TooLarge { size: u64, limit: u64 },

    /// A single-file slot was offered more than one valid file at once
    #[error("un seul fichier est accepté ici")]
    SingleFileOnly,

    /// The preview backend could not build a displayable reference
    #[error("aperçu indisponible: {0}")]
    Preview(#[from] PreviewError),
}

fn size_label(bytes: &u64) -> String {
    format_size(*bytes)
}

fn display_mime(mime: &str) -> &str {
    if mime.is_empty() {
        "type inconnu"
    } else {
        mime
    }
}

/// Errors raised by a preview backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("could not create preview for {name}: {reason}")]
    Create { name: String, reason: String },
}

/// A rejected candidate and the reason
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} : {reason}", .file.name)]
pub struct Rejected {
    pub file: UploadedFile,
    pub reason: Rejection,
}

impl Rejected {
    pub fn new(file: UploadedFile, reason: Rejection) -> Self {
        Self { file, reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::types::MEGABYTE;

    #[test]
    fn test_rejection_display() {
        let err = Rejection::TooLarge {
            size: 6 * MEGABYTE,
            limit: 5 * MEGABYTE,
        };
        assert_eq!(err.to_string(), "fichier trop volumineux (6.0 MB, max. 5.0 MB)");

        let err = Rejection::NotAnImage { mime: String::new() };
        assert_eq!(err.to_string(), "ce fichier n'est pas une image (type inconnu)");
    }

    #[test]
    fn test_rejected_names_the_file() {
        let file = UploadedFile::new("rapport.pdf", 10, "application/pdf");
        let rejected = Rejected::new(
            file,
            Rejection::NotAnImage {
                mime: "application/pdf".to_string(),
            },
        );
        assert_eq!(
            rejected.to_string(),
            "rapport.pdf : ce fichier n'est pas une image (application/pdf)"
        );
    }

    #[test]
    fn test_preview_error_conversion() {
        let err = PreviewError::Create {
            name: "a.png".to_string(),
            reason: "quota".to_string(),
        };
        let rejection: Rejection = err.into();
        assert!(matches!(rejection, Rejection::Preview(_)));
    }
}
