//! Projects Listing Page

use leptos::*;
use tokponla::catalog::{self, ImageFallback};

use crate::components::ProjectCard;

#[component]
pub fn Projects() -> impl IntoView {
    let (query, set_query) = create_signal(String::new());
    let fallback = create_rw_signal(ImageFallback::new());
    let results = create_memo(move |_| query.with(|q| catalog::search(q)));

    view! {
        <div class="mb-8">
            <h1 class="text-3xl font-bold mb-2">"Projets communautaires"</h1>
            <p class="text-gray-500">"Découvrez et soutenez les initiatives qui transforment nos quartiers"</p>
        </div>

        <input
            type="search"
            class="w-full md:w-1/2 border rounded-lg px-4 py-2 mb-6"
            placeholder="Rechercher un projet, un lieu, une catégorie..."
            prop:value=query
            on:input=move |ev| set_query.set(event_target_value(&ev))
        />

        {move || {
            let projects = results.get();
            if projects.is_empty() {
                view! {
                    <p class="text-center text-gray-500 py-12">"Aucun projet ne correspond à votre recherche."</p>
                }.into_view()
            } else {
                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                        {projects.into_iter().map(|project| view! {
                            <ProjectCard project=project fallback=fallback />
                        }).collect_view()}
                    </div>
                }.into_view()
            }
        }}
    }
}
