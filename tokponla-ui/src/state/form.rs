//! Project Form State
//!
//! The form itself is not reactive; it lives in a `StoredValue` owned by the
//! page, paired with a trigger that every mutation fires. Disposing the page
//! drops the form, which revokes every object URL it still holds.

use leptos::*;
use tokponla::{
    Candidate, Field, FieldError, FileId, IngestReport, ProjectForm, Slot, SubmitError, SubmitOutcome,
    SurfaceState, UploadedFile,
};

use crate::browser::{BrowserPreviews, ConsoleSink};
use crate::state::global::GlobalState;

/// File as rendered by an upload zone
#[derive(Clone, Debug, PartialEq)]
pub struct ShownFile {
    pub file: UploadedFile,
    pub preview_url: String,
}

#[derive(Clone, Copy)]
pub struct FormState {
    form: StoredValue<ProjectForm<BrowserPreviews>>,
    changed: Trigger,
    global: GlobalState,
}

impl FormState {
    pub fn new(global: GlobalState) -> Self {
        let form = global
            .config
            .with_value(|config| ProjectForm::new(BrowserPreviews, config));
        Self {
            form: store_value(form),
            changed: create_trigger(),
            global,
        }
    }

    /// Read the form, subscribing the caller to changes
    fn read<R>(&self, f: impl FnOnce(&ProjectForm<BrowserPreviews>) -> R) -> Option<R> {
        self.changed.track();
        self.form.try_with_value(f)
    }

    /// Mutate the form, publish any queued toasts and notify readers
    fn write<R>(&self, f: impl FnOnce(&mut ProjectForm<BrowserPreviews>) -> R) -> Option<R> {
        let result = self.form.try_update_value(|form| {
            let result = f(form);
            (result, form.take_notifications())
        });
        let (result, toasts) = result?;
        self.global.publish(toasts);
        self.changed.notify();
        Some(result)
    }

    // ---- fields ----

    pub fn text(&self, field: Field) -> String {
        self.read(|form| {
            let draft = form.draft();
            match field {
                Field::Title => draft.title.clone(),
                Field::Description => draft.description.clone(),
                Field::Location => draft.location.clone(),
                Field::Category => draft.category.map(|c| c.slug().to_string()).unwrap_or_default(),
                Field::GoalAmount => draft.goal_amount.clone(),
                Field::Duration => draft.duration.clone(),
            }
        })
        .unwrap_or_default()
    }

    pub fn set_text(&self, field: Field, value: &str) {
        self.write(|form| form.set_field(field, value));
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.read(|form| form.field_error(field).map(FieldError::to_string))
            .flatten()
    }

    // ---- uploads ----

    pub fn surface_state(&self, slot: Slot) -> SurfaceState {
        self.read(|form| form.surface(slot).state())
            .unwrap_or(SurfaceState::Idle)
    }

    pub fn files(&self, slot: Slot) -> Vec<ShownFile> {
        self.read(|form| {
            form.surface(slot)
                .entries()
                .iter()
                .map(|e| ShownFile {
                    file: e.file().clone(),
                    preview_url: e.preview_url().to_string(),
                })
                .collect()
        })
        .unwrap_or_default()
    }

    pub fn drag_enter(&self, slot: Slot) {
        // dragover fires continuously; only write on the transition
        let hovering = self
            .form
            .try_with_value(|form| form.surface(slot).state() == SurfaceState::DragHover)
            .unwrap_or(true);
        if !hovering {
            self.write(|form| form.drag_enter(slot));
        }
    }

    pub fn drag_leave(&self, slot: Slot) {
        self.write(|form| form.drag_leave(slot));
    }

    pub fn drop_files(&self, slot: Slot, candidates: Vec<Candidate<web_sys::File>>) -> Option<IngestReport> {
        self.write(|form| form.drop_files(slot, candidates))
    }

    pub fn browse(&self, slot: Slot, candidates: Vec<Candidate<web_sys::File>>) -> Option<IngestReport> {
        self.write(|form| form.browse(slot, candidates))
    }

    pub fn remove(&self, slot: Slot, id: FileId) {
        self.write(|form| form.remove(slot, id));
    }

    // ---- submit ----

    pub fn submit(&self) -> Option<Result<SubmitOutcome, SubmitError>> {
        self.write(|form| form.submit(&mut ConsoleSink))
    }
}
