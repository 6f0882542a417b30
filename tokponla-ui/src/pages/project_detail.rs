//! Project Detail Page
//!
//! Gallery with image fallback, funding sidebar, and tabs for the
//! description, updates, comments and documents.

use leptos::*;
use leptos_router::*;
use tokponla::catalog::{display_date, format_amount, ProjectPage};
use tokponla::Notifier;

use crate::app::NotFound;
use crate::state::global::{use_global_state, GlobalState};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Description,
    Updates,
    Comments,
    Documents,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Description, Tab::Updates, Tab::Comments, Tab::Documents];

    fn label(self) -> &'static str {
        match self {
            Tab::Description => "Description",
            Tab::Updates => "Actualités",
            Tab::Comments => "Commentaires",
            Tab::Documents => "Documents",
        }
    }
}

#[component]
pub fn ProjectDetail() -> impl IntoView {
    let params = use_params_map();
    let id = create_memo(move |_| params.with(|p| p.get("id").and_then(|id| id.parse::<u32>().ok())));

    move || match id.get().and_then(ProjectPage::open) {
        Some(page) => view! { <ProjectView page=page /> }.into_view(),
        None => view! { <NotFound /> }.into_view(),
    }
}

/// Run a page interaction and show the toasts it produced
fn interact(page: RwSignal<ProjectPage>, global: GlobalState, f: impl FnOnce(&mut ProjectPage, &mut Notifier)) {
    let mut notifier = Notifier::new();
    page.update(|p| f(p, &mut notifier));
    global.publish_from(&mut notifier);
}

/// Re-render only when the fallback moved, so a broken placeholder cannot loop
fn image_failed(page: RwSignal<ProjectPage>, url: &str) {
    if page.try_update_untracked(|p| p.image_failed(url)) == Some(true) {
        page.update(|_| {});
    }
}

#[component]
fn ProjectView(page: ProjectPage) -> impl IntoView {
    let global = use_global_state();
    let detail = page.detail().clone();
    let summary = detail.summary;
    let page = create_rw_signal(page);
    let (tab, set_tab) = create_signal(Tab::Description);

    let on_main_error = move |_| {
        let failed = page.with_untracked(|p| p.selected_image());
        image_failed(page, failed);
    };

    view! {
        <div class="mb-6">
            <span class="text-xs px-2 py-1 rounded bg-gray-100">{summary.category.label()}</span>
            <h1 class="text-3xl font-bold mt-2">{summary.title}</h1>
            <p class="text-gray-500">{summary.location}</p>
        </div>

        <div class="grid md:grid-cols-3 gap-8">
            <div class="md:col-span-2 space-y-6">
                // Gallery
                <img
                    src=move || page.with(|p| p.selected_image())
                    alt=summary.title
                    class="w-full h-80 object-cover rounded-lg"
                    on:error=on_main_error
                />
                <div class="flex gap-2">
                    {detail.images().into_iter().map(|url| {
                        let class = move || {
                            let ring = if page.with(|p| p.selected_image() == url) { "ring-2 ring-yellow-600" } else { "" };
                            format!("h-16 w-24 object-cover rounded cursor-pointer {}", ring)
                        };
                        view! {
                            <img
                                src=move || page.with(|p| p.thumbnail(url))
                                alt=""
                                class=class
                                on:click=move |_| page.update(|p| p.select_image(url))
                                on:error=move |_| image_failed(page, url)
                            />
                        }
                    }).collect_view()}
                </div>

                // Tabs
                <div class="flex border-b">
                    {Tab::ALL.iter().map(|&t| {
                        let class = move || {
                            if tab.get() == t {
                                "px-4 py-2 border-b-2 border-yellow-600 font-medium"
                            } else {
                                "px-4 py-2 text-gray-500"
                            }
                        };
                        view! {
                            <button class=class on:click=move |_| set_tab.set(t)>
                                {t.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                {move || match tab.get() {
                    Tab::Description => view! { <DescriptionTab page=page /> }.into_view(),
                    Tab::Updates => view! { <UpdatesTab page=page /> }.into_view(),
                    Tab::Comments => view! { <CommentsTab page=page /> }.into_view(),
                    Tab::Documents => view! { <DocumentsTab page=page /> }.into_view(),
                }}
            </div>

            // Funding sidebar
            <aside class="space-y-4">
                <div class="p-6 rounded-lg border">
                    <p class="text-2xl font-bold">{format_amount(summary.raised_amount)}</p>
                    <p class="text-sm text-gray-500 mb-2">
                        {format!("collectés sur {}", format_amount(summary.goal_amount))}
                    </p>
                    <div class="w-full bg-gray-200 rounded-full h-2 mb-4">
                        <div class="bg-yellow-600 h-2 rounded-full" style=format!("width: {}%", summary.progress()) />
                    </div>
                    <div class="grid grid-cols-3 text-center text-sm mb-4">
                        <div><p class="font-bold">{format!("{}%", summary.progress())}</p><p class="text-xs">"Financé"</p></div>
                        <div><p class="font-bold">{summary.supporters}</p><p class="text-xs">"Contributeurs"</p></div>
                        <div><p class="font-bold">{summary.days_left}</p><p class="text-xs">"Jours restants"</p></div>
                    </div>
                    <button
                        class="w-full py-2 mb-2 bg-yellow-600 hover:bg-yellow-700 text-white rounded"
                        on:click=move |_| interact(page, global, |p, n| p.contribute(n))
                    >
                        "Contribuer à ce projet"
                    </button>
                    <div class="flex gap-2">
                        <button
                            class="flex-1 py-2 border rounded"
                            on:click=move |_| interact(page, global, |p, n| p.toggle_like(n))
                        >
                            {move || if page.with(|p| p.is_liked()) { "♥ Favori" } else { "♡ Favori" }}
                        </button>
                        <button
                            class="flex-1 py-2 border rounded"
                            on:click=move |_| interact(page, global, |p, n| p.share(n))
                        >
                            "Partager"
                        </button>
                    </div>
                </div>

                {detail.start_date.zip(detail.end_date).map(|(start, end)| view! {
                    <div class="p-4 rounded-lg border text-sm">
                        <p>{format!("Début : {}", display_date(start))}</p>
                        <p>{format!("Fin : {}", display_date(end))}</p>
                    </div>
                })}

                {detail.organization.map(|org| view! {
                    <div class="p-6 rounded-lg border">
                        <h3 class="font-semibold mb-1">
                            {org.name}
                            {org.verified.then(|| view! { <span class="ml-1 text-green-600">"✓"</span> })}
                        </h3>
                        <p class="text-xs text-gray-500 mb-2">{format!("{} projets", org.projects)}</p>
                        <p class="text-sm">{org.description}</p>
                    </div>
                })}

                {(!detail.impact.is_empty()).then(|| view! {
                    <div class="p-6 rounded-lg border">
                        <h3 class="font-semibold mb-2">"Impact attendu"</h3>
                        <ul class="list-disc list-inside text-sm space-y-1">
                            {detail.impact.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                        </ul>
                    </div>
                })}
            </aside>
        </div>
    }
}

#[component]
fn DescriptionTab(page: RwSignal<ProjectPage>) -> impl IntoView {
    let paragraphs: Vec<&'static str> = page.with_untracked(|p| p.detail().paragraphs().collect());
    view! {
        <div class="space-y-4">
            {paragraphs.into_iter().map(|text| view! { <p>{text}</p> }).collect_view()}
        </div>
    }
}

#[component]
fn UpdatesTab(page: RwSignal<ProjectPage>) -> impl IntoView {
    let updates = page.with_untracked(|p| p.detail().updates);
    if updates.is_empty() {
        return view! { <p class="text-gray-500">"Aucune actualité pour le moment."</p> }.into_view();
    }
    updates
        .iter()
        .map(|update| view! {
            <div class="border-l-4 border-yellow-600 pl-4 mb-4">
                <p class="text-xs text-gray-500">{display_date(update.date)}</p>
                <h3 class="font-semibold">{update.title}</h3>
                <p class="text-sm">{update.content}</p>
            </div>
        })
        .collect_view()
}

#[component]
fn CommentsTab(page: RwSignal<ProjectPage>) -> impl IntoView {
    let global = use_global_state();
    let comments = page.with_untracked(|p| p.detail().comments);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        interact(page, global, |p, n| {
            p.submit_comment(n);
        });
    };

    view! {
        <form on:submit=on_submit class="mb-6 space-y-2">
            <textarea
                class="w-full border rounded p-2"
                placeholder="Partagez vos questions ou encouragements..."
                prop:value=move || page.with(|p| p.comment().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    page.update(|p| p.set_comment(&text));
                }
            />
            <button type="submit" class="px-4 py-2 bg-yellow-600 text-white rounded">"Publier"</button>
        </form>

        {comments.iter().map(|comment| view! {
            <div class="flex gap-3 mb-4">
                <div class="h-10 w-10 rounded-full bg-gray-200 flex items-center justify-center font-semibold">
                    {comment.initial()}
                </div>
                <div>
                    <p class="font-medium">
                        {comment.user}
                        <span class="ml-2 text-xs text-gray-500">{display_date(comment.date)}</span>
                    </p>
                    <p class="text-sm">{comment.content}</p>
                </div>
            </div>
        }).collect_view()}
    }
}

#[component]
fn DocumentsTab(page: RwSignal<ProjectPage>) -> impl IntoView {
    let documents = page.with_untracked(|p| p.detail().documents);
    if documents.is_empty() {
        return view! { <p class="text-gray-500">"Aucun document partagé."</p> }.into_view();
    }
    view! {
        <ul class="space-y-2">
            {documents.iter().map(|doc| view! {
                <li class="flex justify-between p-3 rounded bg-gray-50 text-sm">
                    <span>{doc.name}</span>
                    <span class="text-gray-500">{format!("{} · {}", doc.kind.to_uppercase(), doc.size)}</span>
                </li>
            }).collect_view()}
        </ul>
    }
    .into_view()
}
