//! Project-creation form orchestrator
//!
//! [`ProjectForm`] owns the draft, the three upload surfaces and the preview
//! manager. It is the only holder of live preview handles: every path that
//! ends a file's life (remove, cover replacement, reset, submit, drop of the
//! form itself) goes through a surface method that releases the handle.
//!
//! Submission is local. The draft and file lists are handed to a
//! [`SubmissionSink`], the boundary a real backend integration would
//! replace; [`LogSink`] just logs them.

use serde::Serialize;
use thiserror::Error;

use crate::config::Config;
use crate::draft::{Category, DraftReport, DraftRules, Field, FieldError, ProjectDraft};
use crate::notify::{Notification, Notifier};
use crate::upload::{
    Candidate, FileId, IngestReport, Origin, PreviewBackend, PreviewManager, PreviewStats, Slot, SlotLimits,
    UploadSurface, UploadedFile,
};

/// Read-only view of everything being submitted
#[derive(Debug, Serialize)]
pub struct Submission<'a> {
    pub draft: &'a ProjectDraft,
    pub cover: Option<&'a UploadedFile>,
    pub gallery: Vec<&'a UploadedFile>,
    pub attachments: Vec<&'a UploadedFile>,
}

impl Submission<'_> {
    pub fn file_count(&self) -> usize {
        usize::from(self.cover.is_some()) + self.gallery.len() + self.attachments.len()
    }
}

/// Receiver of a validated submission
pub trait SubmissionSink {
    fn submit(&mut self, submission: &Submission<'_>) -> Result<(), SinkError>;
}

impl<F> SubmissionSink for F
where
    F: FnMut(&Submission<'_>) -> Result<(), SinkError>,
{
    fn submit(&mut self, submission: &Submission<'_>) -> Result<(), SinkError> {
        self(submission)
    }
}

/// Sink that logs the submission as JSON
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn submit(&mut self, submission: &Submission<'_>) -> Result<(), SinkError> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!(files = submission.file_count(), %payload, "project submitted");
        Ok(())
    }
}

/// Failure reported by a sink
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("submission refused: {0}")]
    Refused(String),

    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Why a submit attempt did not complete
#[derive(Error, Debug)]
pub enum SubmitError {
    /// One or more fields failed validation; nothing was changed
    #[error("{} invalid field(s)", .0.error_count())]
    Invalid(DraftReport),

    /// The sink refused the submission; nothing was cleared
    #[error(transparent)]
    Sink(#[from] SinkError),
}

/// Result of a successful submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Preview handles released while clearing the form
    pub released: usize,
}

/// Project-creation form state
#[derive(Debug)]
pub struct ProjectForm<B: PreviewBackend> {
    draft: ProjectDraft,
    cover: UploadSurface,
    gallery: UploadSurface,
    attachments: UploadSurface,
    previews: PreviewManager<B>,
    rules: DraftRules,
    /// Set after the first submit attempt; fields re-validate on change from then on
    report: Option<DraftReport>,
    notifier: Notifier,
}

impl<B: PreviewBackend> ProjectForm<B> {
    pub fn new(backend: B, config: &Config) -> Self {
        let limits = SlotLimits::from(&config.uploads);
        Self {
            draft: ProjectDraft::new(),
            cover: UploadSurface::new(Slot::Cover, limits),
            gallery: UploadSurface::new(Slot::Gallery, limits),
            attachments: UploadSurface::new(Slot::Attachments, limits),
            previews: PreviewManager::new(backend),
            rules: DraftRules::from(&config.draft),
            report: None,
            notifier: Notifier::new(),
        }
    }

    pub fn with_defaults(backend: B) -> Self {
        Self::new(backend, &Config::default())
    }

    // ---- fields ----

    pub fn draft(&self) -> &ProjectDraft {
        &self.draft
    }

    /// Update a field from user input
    pub fn set_field(&mut self, field: Field, value: &str) {
        self.draft.set(field, value);
        self.revalidate(field);
    }

    pub fn set_category(&mut self, category: Option<Category>) {
        self.draft.category = category;
        self.revalidate(Field::Category);
    }

    /// Inline message for a field, once a submit has been attempted
    pub fn field_error(&self, field: Field) -> Option<&FieldError> {
        self.report.as_ref()?.error_for(field)
    }

    /// Validate the draft without submitting
    pub fn validate(&self) -> DraftReport {
        self.draft.validate(&self.rules)
    }

    fn revalidate(&mut self, field: Field) {
        if let Some(report) = self.report.as_mut() {
            report.update(self.draft.check(field, &self.rules));
        }
    }

    // ---- files ----

    pub fn surface(&self, slot: Slot) -> &UploadSurface {
        match slot {
            Slot::Cover => &self.cover,
            Slot::Gallery => &self.gallery,
            Slot::Attachments => &self.attachments,
        }
    }

    fn split(&mut self, slot: Slot) -> (&mut UploadSurface, &mut PreviewManager<B>) {
        let surface = match slot {
            Slot::Cover => &mut self.cover,
            Slot::Gallery => &mut self.gallery,
            Slot::Attachments => &mut self.attachments,
        };
        (surface, &mut self.previews)
    }

    pub fn drag_enter(&mut self, slot: Slot) {
        self.split(slot).0.drag_enter();
    }

    pub fn drag_leave(&mut self, slot: Slot) {
        self.split(slot).0.drag_leave();
    }

    /// Files dropped on a slot's zone
    pub fn drop_files(&mut self, slot: Slot, candidates: Vec<Candidate<B::Source>>) -> IngestReport {
        self.ingest(slot, candidates, Origin::Drop)
    }

    /// Files picked through a slot's file dialog
    pub fn browse(&mut self, slot: Slot, candidates: Vec<Candidate<B::Source>>) -> IngestReport {
        self.ingest(slot, candidates, Origin::Browse)
    }

    fn ingest(&mut self, slot: Slot, candidates: Vec<Candidate<B::Source>>, origin: Origin) -> IngestReport {
        let (surface, previews) = self.split(slot);
        let report = surface.ingest(previews, candidates, origin);
        for rejected in &report.rejected {
            self.notifier.error("Fichier refusé", rejected.to_string());
        }
        report
    }

    /// Remove one file from a slot, releasing its preview
    pub fn remove(&mut self, slot: Slot, id: FileId) -> Option<UploadedFile> {
        let (surface, previews) = self.split(slot);
        surface.remove(previews, id)
    }

    fn release_all(&mut self) -> usize {
        self.cover.clear(&mut self.previews)
            + self.gallery.clear(&mut self.previews)
            + self.attachments.clear(&mut self.previews)
    }

    pub fn preview_stats(&self) -> PreviewStats {
        self.previews.stats()
    }

    pub fn previews(&self) -> &PreviewManager<B> {
        &self.previews
    }

    // ---- lifecycle ----

    /// Current draft and files as a submission
    pub fn submission(&self) -> Submission<'_> {
        Submission {
            draft: &self.draft,
            cover: self.cover.files().next(),
            gallery: self.gallery.files().collect(),
            attachments: self.attachments.files().collect(),
        }
    }

    /// Clear the draft and every slot. Returns the number of previews released.
    pub fn reset(&mut self) -> usize {
        let released = self.release_all();
        self.draft = ProjectDraft::new();
        self.report = None;
        tracing::debug!(released, "form reset");
        released
    }

    /// Validate and hand the draft to `sink`.
    ///
    /// Invalid fields block the submission without touching files. On
    /// success every preview is released and the form returns to empty.
    pub fn submit<S: SubmissionSink + ?Sized>(&mut self, sink: &mut S) -> Result<SubmitOutcome, SubmitError> {
        let report = self.validate();
        if !report.is_valid() {
            tracing::info!(errors = report.error_count(), "submission blocked by invalid fields");
            self.report = Some(report.clone());
            return Err(SubmitError::Invalid(report));
        }
        self.report = Some(report);

        let delivered = sink.submit(&self.submission());
        if let Err(e) = delivered {
            tracing::warn!(error = %e, "submission sink failed");
            self.notifier.error("Échec de la soumission", e.to_string());
            return Err(e.into());
        }

        self.notifier.success(
            "Projet soumis avec succès",
            "Votre projet est en cours d'examen. Vous serez notifié une fois approuvé.",
        );
        let released = self.reset();
        tracing::info!(released, "submission accepted");
        Ok(SubmitOutcome { released })
    }

    // ---- notifications ----

    /// Take the toasts queued since the last call
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifier.drain()
    }
}

impl<B: PreviewBackend> Drop for ProjectForm<B> {
    fn drop(&mut self) {
        let released = self.release_all();
        if released > 0 {
            tracing::debug!(released, "form dropped with files, previews released");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Level;
    use crate::upload::{MemoryPreviews, PreviewError, SurfaceState, MEGABYTE};
    use std::cell::Cell;
    use std::rc::Rc;

    fn form() -> ProjectForm<MemoryPreviews> {
        ProjectForm::with_defaults(MemoryPreviews::new())
    }

    fn fill_valid(form: &mut ProjectForm<MemoryPreviews>) {
        form.set_field(Field::Title, "Accès à l'eau potable");
        form.set_field(Field::Description, "Installer cinq points d'eau dans le quartier Nord.");
        form.set_field(Field::Location, "Lomé, Togo");
        form.set_category(Some(Category::Infrastructure));
        form.set_field(Field::GoalAmount, "3000000");
        form.set_field(Field::Duration, "45");
    }

    fn image(name: &str) -> Candidate<()> {
        Candidate::detached(name, 200 * 1024, "image/jpeg")
    }

    fn doc(name: &str) -> Candidate<()> {
        Candidate::detached(name, 2 * MEGABYTE, "application/pdf")
    }

    fn names(form: &ProjectForm<MemoryPreviews>, slot: Slot) -> Vec<String> {
        form.surface(slot).files().map(|f| f.name.clone()).collect()
    }

    #[test]
    fn test_empty_title_blocks_and_keeps_files() {
        let mut form = form();
        fill_valid(&mut form);
        form.set_field(Field::Title, "");
        form.browse(Slot::Cover, vec![image("cover.jpg")]);
        form.browse(Slot::Attachments, vec![doc("plan.pdf")]);

        let mut calls = 0;
        let mut sink = |_: &Submission<'_>| -> Result<(), SinkError> {
            calls += 1;
            Ok(())
        };
        let err = form.submit(&mut sink).unwrap_err();

        assert_eq!(calls, 0);
        match err {
            SubmitError::Invalid(report) => {
                assert_eq!(report.error_count(), 1);
                assert!(report.error_for(Field::Title).is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(names(&form, Slot::Cover), vec!["cover.jpg"]);
        assert_eq!(names(&form, Slot::Attachments), vec!["plan.pdf"]);
        assert_eq!(form.preview_stats().released, 0);
        assert_eq!(
            form.field_error(Field::Title).map(ToString::to_string).as_deref(),
            Some("Le titre doit contenir au moins 5 caractères")
        );
    }

    #[test]
    fn test_valid_submit_clears_everything() {
        let mut form = form();
        fill_valid(&mut form);
        form.browse(Slot::Cover, vec![image("cover.jpg")]);
        form.drop_files(Slot::Attachments, vec![doc("plan.pdf"), doc("budget.pdf")]);

        let mut seen = None;
        let mut sink = |s: &Submission<'_>| -> Result<(), SinkError> {
            seen = Some((s.file_count(), s.draft.title.clone()));
            Ok(())
        };
        let outcome = form.submit(&mut sink).unwrap();

        assert_eq!(seen, Some((3, "Accès à l'eau potable".to_string())));
        assert_eq!(outcome.released, 3);
        assert_eq!(form.previews().backend().revoked(), 3);
        assert_eq!(form.preview_stats().live(), 0);
        assert!(form.draft().is_blank());
        for slot in Slot::all() {
            assert!(form.surface(*slot).is_empty());
            assert_eq!(form.surface(*slot).state(), SurfaceState::Idle);
        }
        assert!(form.field_error(Field::Title).is_none());

        let toasts = form.take_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, Level::Success);
        assert_eq!(toasts[0].title, "Projet soumis avec succès");
    }

    #[test]
    fn test_log_sink_accepts_valid_draft() {
        let mut form = form();
        fill_valid(&mut form);
        form.browse(Slot::Gallery, vec![image("a.jpg")]);
        assert_eq!(form.submit(&mut LogSink).unwrap().released, 1);
    }

    #[test]
    fn test_sink_failure_keeps_state() {
        let mut form = form();
        fill_valid(&mut form);
        form.browse(Slot::Gallery, vec![image("a.jpg")]);

        let mut sink = |_: &Submission<'_>| -> Result<(), SinkError> { Err(SinkError::Refused("offline".to_string())) };
        let err = form.submit(&mut sink).unwrap_err();

        assert!(matches!(err, SubmitError::Sink(SinkError::Refused(_))));
        assert_eq!(form.surface(Slot::Gallery).len(), 1);
        assert!(!form.draft().is_blank());
        let toasts = form.take_notifications();
        assert_eq!(toasts[0].level, Level::Error);
    }

    #[test]
    fn test_remove_all_balances_counters() {
        let mut form = form();
        let gallery = form.browse(Slot::Gallery, vec![image("1.jpg"), image("2.jpg")]);
        let cover = form.browse(Slot::Cover, vec![image("c.jpg")]);

        for id in gallery.accepted {
            assert!(form.remove(Slot::Gallery, id).is_some());
        }
        form.remove(Slot::Cover, cover.accepted[0]);

        let stats = form.preview_stats();
        assert_eq!(stats.acquired, 3);
        assert_eq!(stats.released, 3);
        assert_eq!(form.previews().backend().live_urls().count(), 0);
    }

    #[test]
    fn test_remove_second_of_three_gallery_images() {
        let mut form = form();
        let report = form.browse(Slot::Gallery, vec![image("1.jpg"), image("2.jpg"), image("3.jpg")]);

        form.remove(Slot::Gallery, report.accepted[1]);

        assert_eq!(names(&form, Slot::Gallery), vec!["1.jpg", "3.jpg"]);
        assert_eq!(form.preview_stats().released, 1);
    }

    #[test]
    fn test_remove_with_wrong_slot_is_noop() {
        let mut form = form();
        let report = form.browse(Slot::Gallery, vec![image("1.jpg")]);
        assert!(form.remove(Slot::Attachments, report.accepted[0]).is_none());
        assert_eq!(form.surface(Slot::Gallery).len(), 1);
    }

    #[test]
    fn test_rejections_become_error_toasts() {
        let mut form = form();
        let report = form.drop_files(
            Slot::Gallery,
            vec![image("ok.jpg"), Candidate::detached("huge.jpg", 6 * MEGABYTE, "image/jpeg")],
        );

        assert_eq!(report.accepted.len(), 1);
        let toasts = form.take_notifications();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].level, Level::Error);
        assert_eq!(
            toasts[0].description.as_deref(),
            Some("huge.jpg : fichier trop volumineux (6.0 MB, max. 5.0 MB)")
        );
    }

    #[test]
    fn test_fields_revalidate_after_failed_submit() {
        let mut form = form();
        form.set_field(Field::Title, "abc");
        assert!(form.field_error(Field::Title).is_none());

        assert!(form.submit(&mut LogSink).is_err());
        assert!(form.field_error(Field::Title).is_some());

        form.set_field(Field::Title, "Centre de santé");
        assert!(form.field_error(Field::Title).is_none());
        assert!(form.field_error(Field::Location).is_some());
    }

    #[test]
    fn test_reset_releases_and_clears() {
        let mut form = form();
        fill_valid(&mut form);
        form.browse(Slot::Cover, vec![image("c.jpg")]);
        form.browse(Slot::Gallery, vec![image("g.jpg")]);

        assert_eq!(form.reset(), 2);
        assert!(form.draft().is_blank());
        assert_eq!(form.preview_stats().live(), 0);
    }

    #[test]
    fn test_config_limits_apply() {
        let mut config = Config::default();
        config.uploads.image_max_bytes = 1024;
        let mut form = ProjectForm::new(MemoryPreviews::new(), &config);

        let report = form.browse(Slot::Gallery, vec![Candidate::detached("a.png", 2048, "image/png")]);
        assert_eq!(report.rejected.len(), 1);
    }

    /// Backend whose counters outlive the form
    #[derive(Default)]
    struct SharedCounts {
        created: Rc<Cell<usize>>,
        revoked: Rc<Cell<usize>>,
    }

    impl PreviewBackend for SharedCounts {
        type Source = ();

        fn create(&mut self, file: &UploadedFile, _: &()) -> Result<String, PreviewError> {
            self.created.set(self.created.get() + 1);
            Ok(format!("blob:shared/{}", file.id))
        }

        fn revoke(&mut self, _url: &str) {
            self.revoked.set(self.revoked.get() + 1);
        }
    }

    #[test]
    fn test_dropping_form_releases_previews() {
        let backend = SharedCounts::default();
        let created = Rc::clone(&backend.created);
        let revoked = Rc::clone(&backend.revoked);

        {
            let mut form = ProjectForm::with_defaults(backend);
            form.browse(Slot::Gallery, vec![image("1.jpg"), image("2.jpg")]);
            form.browse(Slot::Attachments, vec![doc("a.pdf")]);
        }

        assert_eq!(created.get(), 3);
        assert_eq!(revoked.get(), 3);
    }
}
