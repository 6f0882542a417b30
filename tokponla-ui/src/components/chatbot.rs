//! Assistant Widget
//!
//! Floating chat panel. Replies are scripted and arrive after the configured
//! delay.

use leptos::*;
use tokponla::{Sender, Transcript};

use crate::state::global::use_global_state;

#[component]
pub fn Chatbot() -> impl IntoView {
    let global = use_global_state();
    let (assistant, delay) = global
        .config
        .with_value(|c| (c.assistant.clone(), c.assistant.reply_delay_ms));

    let transcript = create_rw_signal(Transcript::new(&assistant));
    let (input, set_input) = create_signal(String::new());

    let send = move || {
        let text = input.get_untracked();
        let mut sent = false;
        transcript.update(|t| sent = t.send(&text));
        if !sent {
            return;
        }
        set_input.set(String::new());

        gloo_timers::callback::Timeout::new(delay, move || {
            transcript.update(|t| {
                t.deliver_reply();
            });
        })
        .forget();
    };

    view! {
        <button
            class="fixed bottom-6 right-6 rounded-full h-14 w-14 shadow-lg bg-yellow-600 hover:bg-yellow-800 text-white text-xl"
            on:click=move |_| transcript.update(Transcript::toggle)
        >
            {move || if transcript.with(Transcript::is_open) { "✕" } else { "💬" }}
        </button>

        <Show when=move || transcript.with(Transcript::is_open)>
            <div class="fixed bottom-24 right-6 w-[350px] max-w-[calc(100vw-3rem)] h-[450px] max-h-[70vh] \
                        shadow-xl flex flex-col rounded-xl border bg-white overflow-hidden z-50">
                <div class="bg-blue-950 text-white p-3 font-medium">"Assistant TokponlaEngagé"</div>

                <div class="flex-1 overflow-y-auto p-4 space-y-3">
                    {move || transcript.with(|t| t.messages().to_vec()).into_iter().map(|message| {
                        let (align, bubble) = match message.sender {
                            Sender::Bot => ("justify-start", "bg-gray-100 text-gray-900"),
                            Sender::User => ("justify-end", "bg-yellow-600 text-white"),
                        };
                        view! {
                            <div class=format!("flex {}", align)>
                                <div class=format!("max-w-[80%] rounded-lg p-3 text-sm {}", bubble)>
                                    {message.text}
                                </div>
                            </div>
                        }
                    }).collect_view()}
                </div>

                <div class="border-t p-3 flex gap-2">
                    <input
                        type="text"
                        class="flex-1 border rounded px-3 py-2 text-sm"
                        placeholder="Posez votre question..."
                        prop:value=input
                        on:input=move |ev| set_input.set(event_target_value(&ev))
                        on:keydown=move |ev: ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <button
                        class="px-3 py-2 bg-yellow-600 hover:bg-yellow-700 text-white rounded"
                        on:click=move |_| send()
                    >
                        "Envoyer"
                    </button>
                </div>
            </div>
        </Show>
    }
}
