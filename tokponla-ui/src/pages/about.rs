//! About Page

use leptos::*;

const STEPS: [&str; 5] = [
    "Les citoyens et ONG identifient et proposent des projets locaux via notre plateforme.",
    "Notre IA analyse et score ces projets selon leur impact potentiel et leur urgence.",
    "Les contributeurs peuvent soutenir financièrement les projets qui leur tiennent à cœur.",
    "Les porteurs de projets reçoivent les fonds et mettent en œuvre les améliorations.",
    "Tout le monde peut suivre l'impact et l'avancement des projets en temps réel.",
];

const TEAM: [(&str, &str); 3] = [
    ("Paul KOMBETO", "Fondateur & PDG"),
    ("Roumanatou Assouma", "Directrice des Operations"),
    ("Fredy HOUNDAYI", "Directeur Technique"),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto">
            <h1 class="text-4xl font-bold mb-8 text-center">"À propos de TokponlaEngagé"</h1>

            <section class="p-6 mb-8 rounded-lg border">
                <h2 class="text-2xl font-semibold mb-4">"Notre mission"</h2>
                <p class="text-lg">
                    "TokponlaEngagé est une plateforme innovante de coaction urbaine qui connecte les citoyens, \
                     les ONG et les autorités locales pour identifier, financer et réaliser des projets \
                     d'amélioration urbaine."
                </p>
            </section>

            <section class="p-6 mb-8 rounded-lg border">
                <h2 class="text-2xl font-semibold mb-4">"Comment ça fonctionne"</h2>
                <ol class="space-y-4 text-lg list-decimal list-inside">
                    {STEPS.iter().map(|step| view! { <li>{*step}</li> }).collect_view()}
                </ol>
            </section>

            <section class="p-6 rounded-lg border">
                <h2 class="text-2xl font-semibold mb-4">"Notre équipe"</h2>
                <div class="grid md:grid-cols-3 gap-6 text-center">
                    {TEAM.iter().map(|(name, role)| view! {
                        <div>
                            <h3 class="font-semibold">{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    }).collect_view()}
                </div>
            </section>
        </div>
    }
}
