//! State Management
//!
//! Global toast/config state and the reactive wrapper around the
//! project-creation form.

pub mod form;
pub mod global;
