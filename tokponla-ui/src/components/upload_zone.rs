//! Upload Zone Component
//!
//! Click-to-browse and drag-and-drop target for one upload slot, with the
//! previews of the files it holds.

use leptos::*;
use wasm_bindgen::JsCast;
use tokponla::{format_size, Cardinality, Slot, SlotLimits, SurfaceState};

use crate::browser::candidates;
use crate::state::form::{FormState, ShownFile};
use crate::state::global::use_global_state;

#[component]
pub fn UploadZone(slot: Slot, form: FormState) -> impl IntoView {
    let global = use_global_state();
    let max = global
        .config
        .with_value(|c| SlotLimits::from(&c.uploads).max_bytes(slot));
    let (prompt, formats) = prompt(slot);
    let hint = format!("{} (max. {})", formats, format_size(max));

    let multiple = slot.cardinality() == Cardinality::Multiple;
    let input_ref = create_node_ref::<html::Input>();

    let open_dialog = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        if let Some(input) = input_ref.get() {
            if let Some(files) = input.files() {
                form.browse(slot, candidates(&files));
            }
            // let the same file be picked again after a removal
            input.set_value("");
        }
    };

    let on_dragover = move |ev: ev::DragEvent| {
        ev.prevent_default();
        form.drag_enter(slot);
    };

    let on_dragleave = move |ev: ev::DragEvent| {
        ev.prevent_default();
        if moved_within(&ev) {
            return;
        }
        form.drag_leave(slot);
    };

    let on_drop = move |ev: ev::DragEvent| {
        ev.prevent_default();
        let files = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .map(|files| candidates(&files))
            .unwrap_or_default();
        form.drop_files(slot, files);
    };

    view! {
        <div class="mb-4">
            <label class="block text-sm font-medium mb-1">{slot.label()}</label>
            <div
                class=move || zone_class(form.surface_state(slot))
                on:click=open_dialog
                on:dragover=on_dragover
                on:dragleave=on_dragleave
                on:drop=on_drop
            >
                {move || {
                    let cover = if slot == Slot::Cover { form.files(slot).into_iter().next() } else { None };
                    match cover {
                        Some(shown) => view! { <CoverPreview shown=shown form=form /> }.into_view(),
                        None => view! {
                            <div class="flex flex-col items-center justify-center">
                                <p class="text-gray-500">{prompt}</p>
                                <p class="text-xs text-gray-500 mt-1">{hint.clone()}</p>
                            </div>
                        }.into_view(),
                    }
                }}
                <input
                    type="file"
                    class="hidden"
                    accept=slot.accept_hint()
                    multiple=multiple
                    node_ref=input_ref
                    on:change=on_change
                />
            </div>

            {match slot {
                Slot::Cover => view! {}.into_view(),
                Slot::Gallery => view! { <GalleryGrid form=form /> }.into_view(),
                Slot::Attachments => view! { <AttachmentList form=form /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn CoverPreview(shown: ShownFile, form: FormState) -> impl IntoView {
    let id = shown.file.id;
    view! {
        <div class="relative">
            <img src=shown.preview_url alt="Aperçu" class="max-h-[200px] mx-auto rounded-md" />
            <RemoveButton on_remove=move || form.remove(Slot::Cover, id) position="absolute top-2 right-2" />
        </div>
    }
}

#[component]
fn GalleryGrid(form: FormState) -> impl IntoView {
    view! {
        <div class="grid grid-cols-3 gap-2 mt-2">
            {move || form.files(Slot::Gallery).into_iter().map(|shown| {
                let id = shown.file.id;
                view! {
                    <div class="relative">
                        <img src=shown.preview_url alt=shown.file.name class="h-24 w-full object-cover rounded" />
                        <RemoveButton on_remove=move || form.remove(Slot::Gallery, id) position="absolute top-1 right-1" />
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn AttachmentList(form: FormState) -> impl IntoView {
    view! {
        {move || {
            let files = form.files(Slot::Attachments);
            if files.is_empty() {
                return view! {}.into_view();
            }
            view! {
                <div class="mt-4">
                    <p class="text-sm font-medium mb-2">"Documents téléchargés:"</p>
                    <ul class="space-y-1">
                        {files.into_iter().map(|shown| {
                            let id = shown.file.id;
                            view! {
                                <li class="text-sm flex justify-between items-center p-2 bg-gray-100 rounded">
                                    <span>{shown.file.name.clone()}</span>
                                    <span class="text-gray-500 ml-auto mr-2">{shown.file.size_label()}</span>
                                    <RemoveButton on_remove=move || form.remove(Slot::Attachments, id) position="" />
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </div>
            }.into_view()
        }}
    }
}

#[component]
fn RemoveButton<F>(on_remove: F, position: &'static str) -> impl IntoView
where
    F: Fn() + 'static,
{
    view! {
        <button
            type="button"
            class=format!("px-2 py-1 text-xs bg-gray-200 hover:bg-gray-300 rounded {}", position)
            on:click=move |ev| {
                // the zone behind would open the file dialog
                ev.stop_propagation();
                on_remove();
            }
        >
            "Supprimer"
        </button>
    }
}

/// Leaving the zone for one of its own children is not a leave
fn moved_within(ev: &ev::DragEvent) -> bool {
    let zone = ev.current_target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    let entered = ev.related_target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
    match (zone, entered) {
        (Some(zone), Some(entered)) => zone.contains(Some(&entered)),
        _ => false,
    }
}

fn prompt(slot: Slot) -> (&'static str, &'static str) {
    match slot {
        Slot::Cover => ("Cliquez ou déposez une image de couverture", "PNG, JPG ou WEBP"),
        Slot::Gallery => ("Cliquez ou déposez des images", "PNG, JPG ou WEBP, par image"),
        Slot::Attachments => ("Cliquez ou déposez des documents", "PDF, DOC, XLS"),
    }
}

fn zone_class(state: SurfaceState) -> &'static str {
    match state {
        SurfaceState::DragHover => {
            "mt-1 border-2 border-dashed border-yellow-500 bg-yellow-50 rounded-lg p-6 text-center cursor-pointer"
        }
        SurfaceState::Idle | SurfaceState::Populated => {
            "mt-1 border-2 border-dashed border-gray-300 rounded-lg p-6 text-center cursor-pointer \
             hover:bg-gray-50 transition-colors"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_highlights_zone() {
        assert!(zone_class(SurfaceState::DragHover).contains("border-yellow-500"));
        assert_eq!(zone_class(SurfaceState::Idle), zone_class(SurfaceState::Populated));
    }

    #[test]
    fn test_every_slot_has_a_prompt() {
        for slot in Slot::all() {
            assert!(!prompt(*slot).0.is_empty());
        }
    }

    #[wasm_bindgen_test::wasm_bindgen_test]
    fn test_leave_toward_child_keeps_hover() {
        use std::cell::RefCell;
        use std::rc::Rc;
        use wasm_bindgen::closure::Closure;

        let document = web_sys::window().unwrap().document().unwrap();
        let zone = document.create_element("div").unwrap();
        let child = document.create_element("p").unwrap();
        zone.append_child(&child).unwrap();
        let outside = document.create_element("span").unwrap();

        let seen = Rc::new(RefCell::new(Vec::new()));
        let record = seen.clone();
        let listener = Closure::<dyn FnMut(web_sys::DragEvent)>::new(move |ev: web_sys::DragEvent| {
            record.borrow_mut().push(moved_within(&ev));
        });
        zone.add_event_listener_with_callback("dragleave", listener.as_ref().unchecked_ref())
            .unwrap();

        for target in [&child, &outside] {
            let init = web_sys::DragEventInit::new();
            init.set_related_target(Some(target.as_ref()));
            let ev = web_sys::DragEvent::new_with_event_init_dict("dragleave", &init).unwrap();
            zone.dispatch_event(&ev).unwrap();
        }

        assert_eq!(*seen.borrow(), vec![true, false]);
    }
}
