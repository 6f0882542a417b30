//! Slot validation rules
//!
//! Pure checks of a candidate's type and size against the limits of the
//! slot it was offered to. Nothing here touches slot contents or previews.

use crate::config::UploadConfig;

use super::error::{Rejected, Rejection};
use super::types::{Candidate, Slot, UploadedFile, MEGABYTE};

/// Size limits per slot kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotLimits {
    /// Applies to cover and gallery images
    pub image_max_bytes: u64,
    /// Applies to attachments
    pub attachment_max_bytes: u64,
}

impl Default for SlotLimits {
    fn default() -> Self {
        Self {
            image_max_bytes: 5 * MEGABYTE,
            attachment_max_bytes: 10 * MEGABYTE,
        }
    }
}

impl From<&UploadConfig> for SlotLimits {
    fn from(config: &UploadConfig) -> Self {
        Self {
            image_max_bytes: config.image_max_bytes,
            attachment_max_bytes: config.attachment_max_bytes,
        }
    }
}

impl SlotLimits {
    /// Largest accepted size for a slot, inclusive
    pub fn max_bytes(&self, slot: Slot) -> u64 {
        if slot.images_only() {
            self.image_max_bytes
        } else {
            self.attachment_max_bytes
        }
    }
}

/// Check one file against a slot. The type check runs before the size check.
pub fn validate(file: &UploadedFile, slot: Slot, limits: &SlotLimits) -> Result<(), Rejection> {
    if slot.images_only() && !file.is_image() {
        return Err(Rejection::NotAnImage {
            mime: file.mime.clone(),
        });
    }

    let limit = limits.max_bytes(slot);
    if file.size > limit {
        return Err(Rejection::TooLarge {
            size: file.size,
            limit,
        });
    }

    Ok(())
}

/// Split a batch into accepted candidates and rejections, preserving order.
///
/// Each file is judged on its own; a bad file never blocks a good one.
pub fn partition<S>(
    candidates: Vec<Candidate<S>>,
    slot: Slot,
    limits: &SlotLimits,
) -> (Vec<Candidate<S>>, Vec<Rejected>) {
    let mut accepted = Vec::with_capacity(candidates.len());
    let mut rejected = Vec::new();

    for candidate in candidates {
        match validate(&candidate.file, slot, limits) {
            Ok(()) => accepted.push(candidate),
            Err(reason) => rejected.push(Rejected::new(candidate.file, reason)),
        }
    }

    (accepted, rejected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(size: u64, mime: &str) -> UploadedFile {
        UploadedFile::new("f", size, mime)
    }

    #[test]
    fn test_image_slot_accepts_images_within_limit() {
        let limits = SlotLimits::default();
        for size in [0, 1, MEGABYTE, 5 * MEGABYTE] {
            for mime in ["image/png", "image/jpeg", "image/webp"] {
                assert!(validate(&file(size, mime), Slot::Cover, &limits).is_ok());
                assert!(validate(&file(size, mime), Slot::Gallery, &limits).is_ok());
            }
        }
    }

    #[test]
    fn test_image_slot_rejects_non_images() {
        let limits = SlotLimits::default();
        let err = validate(&file(10, "application/pdf"), Slot::Gallery, &limits).unwrap_err();
        assert_eq!(
            err,
            Rejection::NotAnImage {
                mime: "application/pdf".to_string()
            }
        );
    }

    #[test]
    fn test_type_is_checked_before_size() {
        let limits = SlotLimits::default();
        let err = validate(&file(50 * MEGABYTE, "text/plain"), Slot::Cover, &limits).unwrap_err();
        assert!(matches!(err, Rejection::NotAnImage { .. }));
    }

    #[test]
    fn test_image_slot_rejects_oversized() {
        let limits = SlotLimits::default();
        let err = validate(&file(5 * MEGABYTE + 1, "image/png"), Slot::Cover, &limits).unwrap_err();
        assert_eq!(
            err,
            Rejection::TooLarge {
                size: 5 * MEGABYTE + 1,
                limit: 5 * MEGABYTE
            }
        );
    }

    #[test]
    fn test_attachments_accept_any_type_up_to_ten_megabytes() {
        let limits = SlotLimits::default();
        assert!(validate(&file(10 * MEGABYTE, ""), Slot::Attachments, &limits).is_ok());
        assert!(validate(&file(7 * MEGABYTE, "image/png"), Slot::Attachments, &limits).is_ok());
        assert!(matches!(
            validate(&file(10 * MEGABYTE + 1, "application/pdf"), Slot::Attachments, &limits),
            Err(Rejection::TooLarge { .. })
        ));
    }

    #[test]
    fn test_partition_keeps_valid_files_in_order() {
        let limits = SlotLimits::default();
        let batch = vec![
            Candidate::detached("a.png", 10, "image/png"),
            Candidate::detached("big.png", 6 * MEGABYTE, "image/png"),
            Candidate::detached("b.png", 20, "image/png"),
            Candidate::detached("notes.txt", 5, "text/plain"),
        ];

        let (accepted, rejected) = partition(batch, Slot::Gallery, &limits);

        let names: Vec<_> = accepted.iter().map(|c| c.file.name.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
        let rejected_names: Vec<_> = rejected.iter().map(|r| r.file.name.as_str()).collect();
        assert_eq!(rejected_names, vec!["big.png", "notes.txt"]);
    }

    #[test]
    fn test_limits_from_config() {
        let config = UploadConfig {
            image_max_bytes: 1,
            attachment_max_bytes: 2,
        };
        let limits = SlotLimits::from(&config);
        assert_eq!(limits.max_bytes(Slot::Gallery), 1);
        assert_eq!(limits.max_bytes(Slot::Attachments), 2);
    }
}
