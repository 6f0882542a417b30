//! File upload subsystem
//!
//! - **types**: `UploadedFile`, `Candidate`, `Slot`
//! - **validation**: per-slot type and size rules
//! - **preview**: preview handle ownership and backends
//! - **surface**: drop zone state machine owning a slot's files
//! - **error**: rejection and backend errors
//!
//! # Flow
//!
//! ```text
//!   browse / drop
//!        │
//!        ▼
//!   validation::validate  ──▶ rejected ──▶ toast "<name> : <reason>"
//!        │
//!        ▼ accepted
//!   PreviewManager::acquire ──▶ Entry { file, preview } in the slot
//!        │
//!        ▼ remove / replace / reset / submit
//!   PreviewManager::release (exactly once)
//! ```

pub mod error;
pub mod preview;
pub mod surface;
pub mod types;
pub mod validation;

pub use error::{PreviewError, Rejected, Rejection};
pub use preview::{MemoryPreviews, PreviewBackend, PreviewEvent, PreviewHandle, PreviewManager, PreviewStats};
pub use surface::{Entry, IngestReport, Origin, SurfaceState, UploadSurface};
pub use types::{format_size, Candidate, Cardinality, FileId, Slot, UploadedFile, MEGABYTE};
pub use validation::{partition, validate, SlotLimits};
