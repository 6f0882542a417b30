//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Chatbot, Nav, Toast};
use crate::pages::{About, CreateProject, Home, ProjectDetail, Projects};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen flex flex-col">
                <Nav />

                <main class="flex-grow container mx-auto px-4 py-8">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/projects" view=Projects />
                        <Route path="/projects/:id" view=ProjectDetail />
                        <Route path="/create-project" view=CreateProject />
                        <Route path="/about" view=About />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />

                <Chatbot />
                <Toast />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-blue-950 text-white py-8">
            <div class="container mx-auto px-4 grid md:grid-cols-3 gap-6 text-sm">
                <div>
                    <h3 class="font-bold text-lg mb-2">"TokponlaEngagé"</h3>
                    <p class="text-gray-300">
                        "La plateforme qui connecte les citoyens aux projets qui transforment leurs communautés."
                    </p>
                </div>
                <div class="flex flex-col space-y-1">
                    <A href="/projects">"Projets"</A>
                    <A href="/create-project">"Proposer un projet"</A>
                    <A href="/about">"À propos"</A>
                </div>
                <div class="text-gray-400 md:text-right">
                    {format!("© {} TokponlaEngagé. Tous droits réservés.", js_sys::Date::new_0().get_full_year())}
                </div>
            </div>
        </footer>
    }
}

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <h1 class="text-4xl font-bold mb-2">"404"</h1>
            <p class="text-gray-500 mb-6">"Oups ! Page introuvable."</p>
            <A
                href="/"
                class="px-6 py-3 bg-yellow-600 hover:bg-yellow-700 text-white rounded-lg font-medium"
            >
                "Retour à l'accueil"
            </A>
        </div>
    }
}
