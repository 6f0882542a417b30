//! TokponlaEngagé
//!
//! Civic crowdfunding client built with Leptos (WASM).
//!
//! # Features
//!
//! - Project listing with search and detail pages
//! - Project-creation form with drag-and-drop uploads and live previews
//! - Scripted assistant widget
//!
//! # Architecture
//!
//! A client-side rendered (CSR) Leptos application. All rules and state
//! machines live in the `tokponla` crate; this crate renders them and turns
//! DOM events into calls on it. Previews are browser object URLs.

use leptos::*;

mod app;
mod browser;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
