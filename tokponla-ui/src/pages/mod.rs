//! Page Components
//!
//! Top-level page components for routing.

pub mod about;
pub mod create_project;
pub mod home;
pub mod project_detail;
pub mod projects;

pub use about::About;
pub use create_project::CreateProject;
pub use home::Home;
pub use project_detail::ProjectDetail;
pub use projects::Projects;
