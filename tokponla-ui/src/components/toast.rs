//! Toast Notification Component
//!
//! Renders the global toast stack. Entries remove themselves on a timer;
//! clicking one dismisses it early.

use leptos::*;
use tokponla::Level;

use crate::state::global::{use_global_state, ToastEntry};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    view! {
        <div class="fixed bottom-24 left-4 z-50 space-y-2 max-w-sm">
            <For
                each=move || state.toasts.get()
                key=|entry| entry.key
                children=move |entry: ToastEntry| {
                    let key = entry.key;
                    let (icon, bg_class) = style(entry.notification.level);
                    view! {
                        <div
                            class=format!(
                                "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                                 cursor-pointer animate-slide-in",
                                bg_class
                            )
                            on:click=move |_| state.dismiss(key)
                        >
                            <span class="text-lg">{icon}</span>
                            <div>
                                <p class="text-sm font-semibold">{entry.notification.title}</p>
                                {entry.notification.description.map(|d| view! {
                                    <p class="text-sm opacity-90">{d}</p>
                                })}
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn style(level: Level) -> (&'static str, &'static str) {
    match level {
        Level::Success => ("✓", "bg-green-600"),
        Level::Error => ("✕", "bg-red-600"),
        Level::Info => ("ℹ", "bg-blue-900"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_toasts_are_red() {
        assert_eq!(style(Level::Error).1, "bg-red-600");
        assert_ne!(style(Level::Success), style(Level::Info));
    }
}
