//! Edit Student Page
//!
//! Form over one entry, saved as a full update.

use leptos::*;
use leptos_router::*;

use crate::components::{ErrorBanner, InlineLoading, Loading};
use crate::state::edit::{self, EditForm, EditPhase, Field};
use crate::state::global::GlobalState;
use crate::state::model::STATUS_OPTIONS;

/// Edit view at `/editpost/:student_id`
#[component]
pub fn EditStudent() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();
    let navigate = use_navigate();
    let form = create_rw_signal(EditForm::default());

    let student_id = create_memo(move |_| {
        params.with(|p| p.get("student_id").cloned().unwrap_or_default())
    });

    // Load once per distinct id
    let api = state.api.clone();
    create_effect(move |_| {
        let id = student_id.get();
        let api = api.clone();
        spawn_local(async move {
            edit::load(&api, &form, id).await;
        });
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let state = state.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            let api = state.api.clone();
            edit::submit(&api, &form, || {
                state.show_success("Successfully Updated!");
                navigate("/", Default::default());
            })
            .await;
        });
    };

    let phase = create_memo(move |_| form.with(|f| f.phase));
    let error = create_memo(move |_| form.with(|f| f.error));

    view! {
        <div class="max-w-2xl mx-auto space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Edit Student"</h1>
                <p class="text-gray-400 mt-1">"Update the entry and save"</p>
            </div>

            {move || error.get().map(|e| view! { <ErrorBanner message=e.message() /> })}

            <Show
                when=move || phase.get() != EditPhase::Loading
                fallback=|| view! { <Loading /> }
            >
                <form on:submit=on_submit.clone() class="bg-gray-800 rounded-lg p-6 space-y-4">
                    <TextField form=form field=Field::Name label="Date" input_type="date" />
                    <TextField form=form field=Field::Address label="Description" input_type="text" />
                    <StatusField form=form />
                    <TextField form=form field=Field::Pushups label="No Of Pushups" input_type="number" />
                    <TextField form=form field=Field::Distance label="Ran Distance" input_type="number" />
                    <TextField form=form field=Field::Weight label="Weight Lifted" input_type="number" />

                    <button
                        type="submit"
                        disabled=move || phase.get() == EditPhase::Submitting
                        class="w-full px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:opacity-50 \
                               rounded-lg font-medium transition-colors"
                    >
                        {move || {
                            if phase.get() == EditPhase::Submitting {
                                view! { <InlineLoading /> }.into_view()
                            } else {
                                "Update".into_view()
                            }
                        }}
                    </button>
                </form>
            </Show>
        </div>
    }
}

/// Controlled input bound to one field
#[component]
fn TextField(
    form: RwSignal<EditForm>,
    field: Field,
    label: &'static str,
    input_type: &'static str,
) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-1">{label}</span>
            <input
                type=input_type
                name=field.name()
                step=(input_type == "number").then_some("any")
                prop:value=move || form.with(|f| f.value(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
                class="w-full px-3 py-2 bg-gray-700 border border-gray-600 rounded-lg \
                       focus:outline-none focus:border-primary-500"
            />
        </label>
    }
}

#[component]
fn StatusField(form: RwSignal<EditForm>) -> impl IntoView {
    view! {
        <label class="block">
            <span class="block text-sm text-gray-400 mb-1">"Status"</span>
            <select
                name=Field::Status.name()
                prop:value=move || form.with(|f| f.value(Field::Status).to_string())
                on:change=move |ev| form.update(|f| f.set(Field::Status, event_target_value(&ev)))
                class="w-full px-3 py-2 bg-gray-700 border border-gray-600 rounded-lg \
                       focus:outline-none focus:border-primary-500"
            >
                {STATUS_OPTIONS
                    .iter()
                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                    .collect_view()}
            </select>
        </label>
    }
}
