//! Project Card Component
//!
//! Listing tile with image, funding progress and key figures.

use leptos::*;
use leptos_router::*;
use tokponla::catalog::{format_amount, ImageFallback};
use tokponla::ProjectSummary;

#[component]
pub fn ProjectCard(
    project: &'static ProjectSummary,
    fallback: RwSignal<ImageFallback>,
) -> impl IntoView {
    let image = move || fallback.with(|f| f.resolve(project.image, project.category));
    let progress = project.progress();

    view! {
        <div class="bg-white rounded-lg border overflow-hidden shadow-sm hover:shadow-md transition-shadow">
            <div class="relative h-48">
                <img
                    src=image
                    alt=project.title
                    class="w-full h-full object-cover"
                    on:error=move |_| {
                        fallback.update(|f| {
                            f.mark_failed(project.image);
                        });
                    }
                />
                <span class="absolute top-2 left-2 bg-white/90 text-xs px-2 py-1 rounded">
                    {project.category.label()}
                </span>
                <span class="absolute top-2 right-2 bg-blue-950 text-white text-xs px-2 py-1 rounded">
                    {format!("IA {}", project.ai_score)}
                </span>
            </div>

            <div class="p-4">
                <h3 class="font-semibold text-lg mb-1">{project.title}</h3>
                <p class="text-sm text-gray-500 mb-2">{project.location}</p>
                <p class="text-sm mb-4">{project.description}</p>

                <div class="w-full bg-gray-200 rounded-full h-2 mb-2">
                    <div class="bg-yellow-600 h-2 rounded-full" style=format!("width: {}%", progress) />
                </div>
                <div class="flex justify-between text-sm mb-4">
                    <span class="font-medium">{format_amount(project.raised_amount)}</span>
                    <span class="text-gray-500">{format!("{}%", progress)}</span>
                </div>

                <div class="flex justify-between text-xs text-gray-500 mb-4">
                    <span>{format!("{} contributeurs", project.supporters)}</span>
                    <span>{format!("{} jours restants", project.days_left)}</span>
                </div>

                <A
                    href=format!("/projects/{}", project.id)
                    class="block text-center w-full py-2 bg-yellow-600 hover:bg-yellow-700 text-white rounded"
                >
                    "Voir le projet"
                </A>
            </div>
        </div>
    }
}
