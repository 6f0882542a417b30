//! # TokponlaEngagé
//!
//! Client-side core of a civic crowdfunding platform: the project-creation
//! form with its file uploads, the project catalog and the scripted
//! assistant. Everything here is platform-neutral; the `tokponla-ui` crate
//! renders it in the browser and supplies object URLs as the preview backend.
//!
//! ## Modules
//!
//! - [`upload`]: file validation, preview handle ownership, upload surfaces
//! - [`draft`]: project draft fields and their validation rules
//! - [`form`]: the form orchestrator and submission sinks
//! - [`notify`]: toast queue
//! - [`catalog`]: mock projects and display helpers
//! - [`chat`]: assistant transcript
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust
//! use tokponla::{Candidate, Field, LogSink, MemoryPreviews, ProjectForm, Slot};
//!
//! let mut form = ProjectForm::with_defaults(MemoryPreviews::new());
//! form.set_field(Field::Title, "Centre de santé communautaire");
//! form.set_field(Field::Description, "Rénovation et équipement d'un petit centre de santé.");
//! form.set_field(Field::Location, "Parakou, Bénin");
//! form.set_field(Field::Category, "health");
//! form.set_field(Field::GoalAmount, "7000000");
//! form.set_field(Field::Duration, "60");
//!
//! form.browse(Slot::Cover, vec![Candidate::detached("facade.jpg", 300_000, "image/jpeg")]);
//!
//! let outcome = form.submit(&mut LogSink).unwrap();
//! assert_eq!(outcome.released, 1);
//! assert_eq!(form.preview_stats().live(), 0);
//! ```

pub mod catalog;
pub mod chat;
pub mod config;
pub mod draft;
pub mod form;
pub mod notify;
pub mod upload;

pub use upload::{
    format_size, Candidate, Cardinality, FileId, IngestReport, MemoryPreviews, PreviewBackend, PreviewError, PreviewHandle,
    PreviewManager, PreviewStats, Rejected, Rejection, Slot, SlotLimits, SurfaceState, UploadSurface, UploadedFile, MEGABYTE,
};

pub use draft::{Category, DraftReport, DraftRules, Field, FieldError, ProjectDraft, ValidationResult};

pub use form::{LogSink, ProjectForm, SinkError, Submission, SubmissionSink, SubmitError, SubmitOutcome};

pub use notify::{Level, Notification, Notifier};

pub use catalog::{ProjectDetail, ProjectPage, ProjectSummary};

pub use chat::{ChatMessage, Sender, Transcript};

pub use config::{AssistantConfig, Config, ConfigError, DraftConfig, LoggingConfig, NotificationConfig, UploadConfig};
