//! Upload surface
//!
//! One drop zone / file picker bound to a slot. The surface owns the
//! entries of its slot and each entry owns its preview handle, so the only
//! way a file leaves the slot is through a method that releases its handle.
//!
//! ```text
//!            drag_enter             drop (valid)
//!   Idle ──────────────▶ DragHover ─────────────▶ Populated
//!    ▲  ◀──────────────              browse (valid)   │
//!    │     drag_leave      Idle ─────────────────▶    │
//!    └──────────────── remove last / clear ───────────┘
//! ```

use serde::Serialize;

use super::error::{Rejected, Rejection};
use super::preview::{PreviewBackend, PreviewHandle, PreviewManager};
use super::types::{Candidate, Cardinality, FileId, Slot, UploadedFile};
use super::validation::{self, SlotLimits};

/// Visual state of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurfaceState {
    Idle,
    DragHover,
    Populated,
}

/// Input path a batch arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Browse,
    Drop,
}

/// An accepted file and its live preview
#[derive(Debug)]
pub struct Entry {
    file: UploadedFile,
    preview: PreviewHandle,
}

impl Entry {
    pub fn file(&self) -> &UploadedFile {
        &self.file
    }

    pub fn preview_url(&self) -> &str {
        self.preview.url()
    }
}

/// Outcome of one ingest
#[derive(Debug, Default)]
pub struct IngestReport {
    pub accepted: Vec<FileId>,
    pub rejected: Vec<Rejected>,
}

impl IngestReport {
    /// No file was refused
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Drop zone bound to one slot
#[derive(Debug)]
pub struct UploadSurface {
    slot: Slot,
    limits: SlotLimits,
    hovering: bool,
    entries: Vec<Entry>,
}

impl UploadSurface {
    pub fn new(slot: Slot, limits: SlotLimits) -> Self {
        Self {
            slot,
            limits,
            hovering: false,
            entries: Vec::new(),
        }
    }

    pub fn slot(&self) -> Slot {
        self.slot
    }

    pub fn state(&self) -> SurfaceState {
        if self.hovering {
            SurfaceState::DragHover
        } else if self.entries.is_empty() {
            SurfaceState::Idle
        } else {
            SurfaceState::Populated
        }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn files(&self) -> impl Iterator<Item = &UploadedFile> {
        self.entries.iter().map(|e| &e.file)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, id: FileId) -> bool {
        self.entries.iter().any(|e| e.file.id == id)
    }

    /// Pointer dragged files over the zone
    pub fn drag_enter(&mut self) {
        self.hovering = true;
    }

    /// Pointer left the zone without dropping
    pub fn drag_leave(&mut self) {
        self.hovering = false;
    }

    /// Files dropped on the zone
    pub fn drop_files<B: PreviewBackend>(
        &mut self,
        previews: &mut PreviewManager<B>,
        candidates: Vec<Candidate<B::Source>>,
    ) -> IngestReport {
        self.ingest(previews, candidates, Origin::Drop)
    }

    /// Files picked through the file dialog
    pub fn browse<B: PreviewBackend>(
        &mut self,
        previews: &mut PreviewManager<B>,
        candidates: Vec<Candidate<B::Source>>,
    ) -> IngestReport {
        self.ingest(previews, candidates, Origin::Browse)
    }

    /// Validate a batch and add the accepted files.
    ///
    /// Multi-file slots append in order. The cover slot releases the current
    /// cover once, before the first acquire, and keeps the first valid file
    /// whose preview could be created. Rejections are reported in input order.
    pub fn ingest<B: PreviewBackend>(
        &mut self,
        previews: &mut PreviewManager<B>,
        candidates: Vec<Candidate<B::Source>>,
        origin: Origin,
    ) -> IngestReport {
        self.hovering = false;

        let offered = candidates.len();
        let single = self.slot.cardinality() == Cardinality::Single;
        let mut cleared = false;
        let mut accepted = Vec::with_capacity(offered);
        let mut rejected = Vec::new();

        for candidate in candidates {
            if let Err(reason) = validation::validate(&candidate.file, self.slot, &self.limits) {
                rejected.push(Rejected::new(candidate.file, reason));
                continue;
            }

            if single {
                if !accepted.is_empty() {
                    rejected.push(Rejected::new(candidate.file, Rejection::SingleFileOnly));
                    continue;
                }
                if !cleared {
                    self.release_all(previews);
                    cleared = true;
                }
            }

            match previews.acquire(&candidate.file, &candidate.source) {
                Ok(preview) => {
                    tracing::info!(slot = %self.slot, name = %candidate.file.name, size = candidate.file.size, "file accepted");
                    accepted.push(candidate.file.id);
                    self.entries.push(Entry {
                        file: candidate.file,
                        preview,
                    });
                }
                Err(e) => {
                    rejected.push(Rejected::new(candidate.file, Rejection::from(e)));
                }
            }
        }

        for r in &rejected {
            tracing::info!(slot = %self.slot, name = %r.file.name, reason = %r.reason, "file rejected");
        }
        tracing::debug!(slot = %self.slot, ?origin, offered, accepted = accepted.len(), "ingest complete");

        IngestReport { accepted, rejected }
    }

    /// Remove one file and release its preview
    pub fn remove<B: PreviewBackend>(&mut self, previews: &mut PreviewManager<B>, id: FileId) -> Option<UploadedFile> {
        let index = self.entries.iter().position(|e| e.file.id == id)?;
        let entry = self.entries.remove(index);
        previews.release(entry.preview);
        tracing::info!(slot = %self.slot, name = %entry.file.name, "file removed");
        Some(entry.file)
    }

    /// Remove every file, releasing each preview. Returns how many were released.
    pub fn clear<B: PreviewBackend>(&mut self, previews: &mut PreviewManager<B>) -> usize {
        self.hovering = false;
        self.release_all(previews)
    }

    fn release_all<B: PreviewBackend>(&mut self, previews: &mut PreviewManager<B>) -> usize {
        let count = self.entries.len();
        for entry in self.entries.drain(..) {
            previews.release(entry.preview);
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upload::preview::{MemoryPreviews, PreviewEvent};
    use crate::upload::types::MEGABYTE;

    fn setup(slot: Slot) -> (UploadSurface, PreviewManager<MemoryPreviews>) {
        (
            UploadSurface::new(slot, SlotLimits::default()),
            PreviewManager::new(MemoryPreviews::new()),
        )
    }

    fn image(name: &str) -> Candidate<()> {
        Candidate::detached(name, 100 * 1024, "image/png")
    }

    fn names(surface: &UploadSurface) -> Vec<&str> {
        surface.files().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn test_drag_transitions() {
        let (mut surface, mut previews) = setup(Slot::Gallery);
        assert_eq!(surface.state(), SurfaceState::Idle);

        surface.drag_enter();
        assert_eq!(surface.state(), SurfaceState::DragHover);
        surface.drag_leave();
        assert_eq!(surface.state(), SurfaceState::Idle);

        surface.drag_enter();
        let report = surface.drop_files(&mut previews, vec![image("a.png")]);
        assert!(report.is_clean());
        assert_eq!(surface.state(), SurfaceState::Populated);

        surface.drag_enter();
        surface.drag_leave();
        assert_eq!(surface.state(), SurfaceState::Populated);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_invalid_drop_returns_to_idle() {
        let (mut surface, mut previews) = setup(Slot::Cover);
        surface.drag_enter();
        let report = surface.drop_files(&mut previews, vec![Candidate::detached("a.pdf", 10, "application/pdf")]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(surface.state(), SurfaceState::Idle);
        assert_eq!(previews.stats().acquired, 0);
    }

    #[test]
    fn test_valid_image_produces_exactly_one_preview() {
        let (mut surface, mut previews) = setup(Slot::Gallery);
        let report = surface.browse(&mut previews, vec![image("a.png")]);

        assert_eq!(report.accepted.len(), 1);
        assert_eq!(surface.len(), 1);
        assert_eq!(previews.backend().created(), 1);
        assert!(previews.backend().is_live(surface.entries()[0].preview_url()));
        surface.clear(&mut previews);
    }

    #[test]
    fn test_oversized_file_leaves_list_unchanged() {
        let (mut surface, mut previews) = setup(Slot::Gallery);
        surface.browse(&mut previews, vec![image("a.png")]);

        let report = surface.drop_files(
            &mut previews,
            vec![Candidate::detached("huge.png", 5 * MEGABYTE + 1, "image/png")],
        );

        assert_eq!(report.rejected.len(), 1);
        assert_eq!(names(&surface), vec!["a.png"]);
        assert_eq!(previews.stats().acquired, 1);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_mixed_batch_accepts_valid_files() {
        let (mut surface, mut previews) = setup(Slot::Attachments);
        let report = surface.drop_files(
            &mut previews,
            vec![
                Candidate::detached("plan.pdf", MEGABYTE, "application/pdf"),
                Candidate::detached("video.mp4", 40 * MEGABYTE, "video/mp4"),
                Candidate::detached("budget.xlsx", 2 * MEGABYTE, ""),
            ],
        );

        assert_eq!(report.accepted.len(), 2);
        assert_eq!(report.rejected[0].file.name, "video.mp4");
        assert_eq!(names(&surface), vec!["plan.pdf", "budget.xlsx"]);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_multi_slot_appends_across_interactions() {
        let (mut surface, mut previews) = setup(Slot::Gallery);
        surface.browse(&mut previews, vec![image("a.png")]);
        surface.drop_files(&mut previews, vec![image("b.png"), image("c.png")]);
        assert_eq!(names(&surface), vec!["a.png", "b.png", "c.png"]);
        assert_eq!(surface.clear(&mut previews), 3);
        assert_eq!(previews.live(), 0);
    }

    #[test]
    fn test_remove_middle_gallery_image() {
        let (mut surface, mut previews) = setup(Slot::Gallery);
        let report = surface.browse(&mut previews, vec![image("1.png"), image("2.png"), image("3.png")]);

        let removed = surface.remove(&mut previews, report.accepted[1]).unwrap();

        assert_eq!(removed.name, "2.png");
        assert_eq!(names(&surface), vec!["1.png", "3.png"]);
        assert_eq!(previews.stats().released, 1);
        assert_eq!(previews.backend().revoked(), 1);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let (mut surface, mut previews) = setup(Slot::Gallery);
        surface.browse(&mut previews, vec![image("1.png")]);
        let stranger = UploadedFile::new("x", 1, "image/png");

        assert!(surface.remove(&mut previews, stranger.id).is_none());
        assert_eq!(previews.stats().released, 0);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_removing_last_entry_returns_to_idle() {
        let (mut surface, mut previews) = setup(Slot::Attachments);
        let report = surface.browse(&mut previews, vec![Candidate::detached("a.pdf", 10, "application/pdf")]);
        assert_eq!(surface.state(), SurfaceState::Populated);

        surface.remove(&mut previews, report.accepted[0]);
        assert_eq!(surface.state(), SurfaceState::Idle);
    }

    #[test]
    fn test_cover_replacement_releases_before_acquire() {
        let (mut surface, mut previews) = setup(Slot::Cover);
        surface.browse(&mut previews, vec![image("old.png")]);
        let old_url = surface.entries()[0].preview_url().to_string();

        surface.browse(&mut previews, vec![image("new.png")]);

        assert_eq!(names(&surface), vec!["new.png"]);
        let events = previews.backend().events();
        assert_eq!(events.len(), 3);
        assert_eq!(events[1], PreviewEvent::Revoked { url: old_url });
        assert!(matches!(events[2], PreviewEvent::Created { .. }));
        assert_eq!(previews.live(), 1);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_cover_keeps_first_valid_of_batch() {
        let (mut surface, mut previews) = setup(Slot::Cover);
        let report = surface.drop_files(
            &mut previews,
            vec![
                Candidate::detached("doc.pdf", 10, "application/pdf"),
                image("first.png"),
                image("second.png"),
            ],
        );

        assert_eq!(names(&surface), vec!["first.png"]);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.rejected[1].reason, Rejection::SingleFileOnly);
        assert_eq!(previews.stats().acquired, 1);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_invalid_cover_keeps_current_cover() {
        let (mut surface, mut previews) = setup(Slot::Cover);
        surface.browse(&mut previews, vec![image("keep.png")]);
        surface.browse(&mut previews, vec![Candidate::detached("big.png", 6 * MEGABYTE, "image/png")]);

        assert_eq!(names(&surface), vec!["keep.png"]);
        assert_eq!(previews.stats().released, 0);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_backend_failure_rejects_without_leak() {
        let mut previews = PreviewManager::new(MemoryPreviews::new().fail_for("bad.png"));
        let mut surface = UploadSurface::new(Slot::Gallery, SlotLimits::default());

        let report = surface.browse(&mut previews, vec![image("bad.png"), image("good.png")]);

        assert_eq!(names(&surface), vec!["good.png"]);
        assert!(matches!(report.rejected[0].reason, Rejection::Preview(_)));
        assert_eq!(previews.live(), 1);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_cover_falls_back_when_first_preview_fails() {
        let mut previews = PreviewManager::new(MemoryPreviews::new().fail_for("bad.png"));
        let mut surface = UploadSurface::new(Slot::Cover, SlotLimits::default());
        surface.browse(&mut previews, vec![image("old.png")]);

        let report = surface.browse(
            &mut previews,
            vec![image("bad.png"), image("good.png"), image("extra.png")],
        );

        assert_eq!(names(&surface), vec!["good.png"]);
        assert_eq!(previews.stats().released, 1);
        assert_eq!(previews.live(), 1);
        let rejected: Vec<_> = report.rejected.iter().map(|r| r.file.name.as_str()).collect();
        assert_eq!(rejected, vec!["bad.png", "extra.png"]);
        assert!(matches!(report.rejected[0].reason, Rejection::Preview(_)));
        assert_eq!(report.rejected[1].reason, Rejection::SingleFileOnly);
        surface.clear(&mut previews);
    }

    #[test]
    fn test_rejections_follow_input_order() {
        let (mut surface, mut previews) = setup(Slot::Cover);
        let report = surface.drop_files(
            &mut previews,
            vec![
                image("first.png"),
                image("second.png"),
                Candidate::detached("doc.pdf", 10, "application/pdf"),
            ],
        );

        let rejected: Vec<_> = report.rejected.iter().map(|r| r.file.name.as_str()).collect();
        assert_eq!(rejected, vec!["second.png", "doc.pdf"]);
        surface.clear(&mut previews);
    }
}
