//! Project Creation Page
//!
//! Draft fields, the three upload zones and the submit button. Field errors
//! appear after the first submit attempt and follow each edit from then on.

use leptos::*;
use tokponla::{Category, Field, Slot, SubmitError};

use crate::browser::warn;
use crate::components::UploadZone;
use crate::state::form::FormState;
use crate::state::global::use_global_state;

const TIPS: [(&str, &str); 4] = [
    ("Soyez précis et concis", "Expliquez clairement votre projet et son impact attendu."),
    (
        "Ajoutez des visuels de qualité",
        "Une bonne image de couverture augmente significativement le taux de soutien.",
    ),
    (
        "Détaillez votre budget",
        "Mentionnez comment les fonds seront utilisés pour gagner la confiance des contributeurs.",
    ),
    (
        "Partagez votre parcours",
        "Présentez votre organisation et son expérience dans des projets similaires.",
    ),
];

#[component]
pub fn CreateProject() -> impl IntoView {
    let form = FormState::new(use_global_state());

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(Err(SubmitError::Invalid(report))) = form.submit() {
            warn(&format!("submission blocked: {} invalid field(s)", report.error_count()));
        }
    };

    view! {
        <div class="mb-8">
            <h1 class="text-3xl font-bold mb-2">"Proposer un projet"</h1>
            <p class="text-gray-500">
                "Soumettez votre initiative communautaire pour obtenir du soutien et du financement"
            </p>
        </div>

        <div class="grid md:grid-cols-3 gap-8">
            <form on:submit=on_submit class="md:col-span-2 space-y-6" novalidate=true>
                <Section title="Informations de base">
                    <TextField
                        form=form
                        field=Field::Title
                        label="Titre du projet"
                        placeholder="Ex: Rénovation du parc communautaire"
                        help="Choisissez un titre accrocheur qui décrit clairement votre projet."
                    />
                    <TextField
                        form=form
                        field=Field::Description
                        label="Description détaillée"
                        placeholder="Décrivez l'objectif, le contexte et l'impact attendu de votre projet..."
                        help="Expliquez clairement le problème que votre projet résoudra et les bénéfices pour la communauté."
                        multiline=true
                    />
                    <UploadZone slot=Slot::Cover form=form />
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <TextField
                            form=form
                            field=Field::Location
                            label="Lieu du projet"
                            placeholder="Ex: Cotonou, Bénin"
                        />
                        <CategorySelect form=form />
                    </div>
                </Section>

                <Section title="Galerie">
                    <UploadZone slot=Slot::Gallery form=form />
                </Section>

                <Section title="Financement et Durée">
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                        <TextField
                            form=form
                            field=Field::GoalAmount
                            label="Montant souhaité (FCFA)"
                            placeholder="Ex: 1000000"
                            help="Estimation réaliste du budget nécessaire"
                            number=true
                        />
                        <TextField
                            form=form
                            field=Field::Duration
                            label="Durée de la campagne (jours)"
                            placeholder="Ex: 30"
                            help="Nombre de jours pour atteindre votre objectif"
                            number=true
                        />
                    </div>
                </Section>

                <Section title="Documents complémentaires">
                    <UploadZone slot=Slot::Attachments form=form />
                </Section>

                <div class="flex justify-end">
                    <button type="submit" class="px-6 py-3 bg-yellow-600 hover:bg-yellow-700 text-white rounded-lg">
                        "Soumettre le projet"
                    </button>
                </div>
            </form>

            <aside class="md:col-span-1">
                <div class="rounded-lg p-6 border sticky top-20">
                    <h2 class="text-xl font-semibold mb-4">"Conseils pour réussir"</h2>
                    <div class="space-y-4">
                        {TIPS.iter().map(|(title, text)| view! {
                            <div>
                                <h3 class="font-medium">{*title}</h3>
                                <p class="text-sm text-gray-500">{*text}</p>
                            </div>
                        }).collect_view()}
                    </div>
                    <div class="mt-6 p-4 bg-gray-50 rounded-lg text-sm">
                        "Les projets sont analysés par notre système IA et approuvés par notre équipe \
                         sous 48 heures ouvrables."
                    </div>
                </div>
            </aside>
        </div>
    }
}

#[component]
fn Section(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="rounded-lg p-6 border">
            <h2 class="text-xl font-semibold mb-4">{title}</h2>
            {children()}
        </div>
    }
}

#[component]
fn TextField(
    form: FormState,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[prop(optional)]
    help: Option<&'static str>,
    #[prop(optional)]
    multiline: bool,
    #[prop(optional)]
    number: bool,
) -> impl IntoView {
    let value = move || form.text(field);
    let on_input = move |ev: ev::Event| form.set_text(field, &event_target_value(&ev));
    let kind = if number { "number" } else { "text" };
    let class = "w-full border rounded px-3 py-2";

    let control = if multiline {
        view! { <textarea class=class rows="5" placeholder=placeholder prop:value=value on:input=on_input /> }
            .into_view()
    } else {
        view! { <input type=kind class=class placeholder=placeholder prop:value=value on:input=on_input /> }
            .into_view()
    };

    view! {
        <div class="mb-4">
            <label class="block text-sm font-medium mb-1">{label}</label>
            {control}
            {help.map(|text| view! { <p class="text-xs text-gray-500 mt-1">{text}</p> })}
            <FieldMessage form=form field=field />
        </div>
    }
}

#[component]
fn CategorySelect(form: FormState) -> impl IntoView {
    view! {
        <div class="mb-4">
            <label class="block text-sm font-medium mb-1">"Catégorie"</label>
            <select
                class="w-full border rounded px-3 py-2"
                prop:value=move || form.text(Field::Category)
                on:change=move |ev| form.set_text(Field::Category, &event_target_value(&ev))
            >
                <option value="">"Sélectionnez une catégorie"</option>
                {Category::all().iter().map(|c| view! {
                    <option value=c.slug()>{c.label()}</option>
                }).collect_view()}
            </select>
            <FieldMessage form=form field=Field::Category />
        </div>
    }
}

#[component]
fn FieldMessage(form: FormState, field: Field) -> impl IntoView {
    move || {
        form.error(field)
            .map(|message| view! { <p class="text-sm text-red-600 mt-1">{message}</p> })
    }
}
