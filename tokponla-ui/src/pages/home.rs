//! Landing Page

use leptos::*;
use leptos_router::*;
use tokponla::catalog;

use crate::components::ProjectCard;

const FEATURES: [(&str, &str); 6] = [
    (
        "IA de détection des besoins",
        "Notre IA analyse les actualités locales et les réseaux sociaux pour identifier les problèmes communautaires prioritaires.",
    ),
    (
        "Notation intelligente des projets",
        "L'IA évalue chaque projet selon son urgence, son impact potentiel et sa pertinence géographique.",
    ),
    (
        "Assistant IA conversationnel",
        "Un chatbot qui guide les utilisateurs, explique les projets et répond aux questions dans plusieurs langues.",
    ),
    (
        "Visualisation géographique",
        "Découvrez les projets sur une carte interactive pour identifier ceux qui sont proches de vous.",
    ),
    (
        "Financement participatif sécurisé",
        "Contribuez facilement via Mobile Money avec suivi transparent des fonds collectés.",
    ),
    (
        "Mode faible connectivité",
        "Accédez à la plateforme même dans les zones à connectivité limitée grâce à notre mode hors ligne.",
    ),
];

#[component]
pub fn Home() -> impl IntoView {
    let fallback = create_rw_signal(catalog::ImageFallback::new());
    let featured = catalog::projects().iter().take(3);

    view! {
        <section class="py-12 grid md:grid-cols-2 gap-8 items-center">
            <div class="space-y-6">
                <h1 class="text-4xl md:text-5xl font-bold tracking-tight">
                    "Transformez votre communauté avec "
                    <span class="text-yellow-600">"TokponlaEngagé"</span>
                </h1>
                <p class="text-lg">
                    "Une plateforme intelligente qui connecte les citoyens, les ONG et les administrateurs \
                     pour créer un impact positif dans les communautés urbaines africaines."
                </p>
                <div class="flex gap-4">
                    <A href="/projects" class="px-6 py-3 bg-yellow-600 hover:bg-yellow-700 text-white rounded-lg">
                        "Découvrir les projets"
                    </A>
                    <A href="/create-project" class="px-6 py-3 border border-yellow-600 rounded-lg">
                        "Proposer un projet"
                    </A>
                </div>
            </div>
            <ul class="grid grid-cols-2 gap-4 text-sm font-medium">
                <li class="p-4 rounded-lg bg-gray-50">"Projets avec impact"</li>
                <li class="p-4 rounded-lg bg-gray-50">"Collaboration communautaire"</li>
                <li class="p-4 rounded-lg bg-gray-50">"Axé sur les besoins locaux"</li>
                <li class="p-4 rounded-lg bg-gray-50">"Projets recommandés par l'IA"</li>
            </ul>
        </section>

        <section class="py-12">
            <div class="text-center mb-8">
                <h2 class="text-3xl font-bold">"Une plateforme complète propulsée par l'IA"</h2>
                <p class="mt-4 text-gray-500 max-w-2xl mx-auto">
                    "TokponlaEngagé utilise l'intelligence artificielle pour connecter les communautés, \
                     identifier les besoins et maximiser l'impact des projets urbains."
                </p>
            </div>
            <div class="grid md:grid-cols-3 gap-6">
                {FEATURES.iter().map(|(title, description)| view! {
                    <div class="p-6 rounded-lg border">
                        <h3 class="font-semibold text-lg mb-2">{*title}</h3>
                        <p class="text-gray-500">{*description}</p>
                    </div>
                }).collect_view()}
            </div>
        </section>

        <section class="py-12">
            <h2 class="text-2xl font-bold mb-6">"Projets à la une"</h2>
            <div class="grid md:grid-cols-3 gap-6">
                {featured.map(|project| view! { <ProjectCard project=project fallback=fallback /> }).collect_view()}
            </div>
        </section>
    }
}
