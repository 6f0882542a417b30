//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod chatbot;
pub mod nav;
pub mod project_card;
pub mod toast;
pub mod upload_zone;

pub use chatbot::Chatbot;
pub use nav::Nav;
pub use project_card::ProjectCard;
pub use toast::Toast;
pub use upload_zone::UploadZone;
