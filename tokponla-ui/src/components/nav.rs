//! Navigation Component
//!
//! Header navigation bar with logo and links.

use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-blue-950 text-white sticky top-0 z-40">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="text-xl font-bold">
                        "Tokponla"<span class="text-yellow-500">"Engagé"</span>
                    </A>

                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Accueil" />
                        <NavLink href="/projects" label="Projets" />
                        <NavLink href="/about" label="À propos" />
                        <A
                            href="/create-project"
                            class="ml-2 px-4 py-2 rounded-lg bg-yellow-600 hover:bg-yellow-700 font-medium"
                        >
                            "Proposer un projet"
                        </A>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-blue-900 transition-colors"
            active_class="text-white"
        >
            {label}
        </A>
    }
}
