//! Student List Page
//!
//! Three exercise charts above the table of all entries.

use leptos::*;
use leptos_router::*;

use crate::components::{ErrorBanner, LineChart, Loading};
use crate::state::global::GlobalState;
use crate::state::list::{self, ListState};
use crate::state::model::Student;
use crate::state::series::Exercise;

/// List view at `/`
#[component]
pub fn StudentList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let list_state = create_rw_signal(ListState::default());

    // Fetch on mount
    let api = state.api.clone();
    create_effect(move |_| {
        let api = api.clone();
        spawn_local(async move {
            list::refresh(&api, &list_state).await;
        });
    });

    let on_delete = Callback::new(move |id: String| {
        let state = state.clone();
        spawn_local(async move {
            let api = state.api.clone();
            list::delete_and_refresh(&api, &list_state, &id, || {
                state.show_success("Successfully Deleted");
            })
            .await;
        });
    });

    let students = create_memo(move |_| list_state.with(|s| s.students.clone()));
    let loaded = create_memo(move |_| list_state.with(|s| s.loaded));
    let error = create_memo(move |_| list_state.with(|s| s.error));

    view! {
        <div class="space-y-8">
            // Header
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Student Details"</h1>
                    <p class="text-gray-400 mt-1">"Pushups, distance and weight over time"</p>
                </div>

                <A
                    href="/post"
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
                >
                    "Create"
                </A>
            </div>

            {move || error.get().map(|e| view! { <ErrorBanner message=e.message() /> })}

            // Charts
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                {Exercise::ALL
                    .into_iter()
                    .map(|exercise| {
                        let series = create_memo(move |_| {
                            list_state.with(|s| s.series.get(exercise).to_vec())
                        });
                        view! { <LineChart exercise=exercise series=series /> }
                    })
                    .collect_view()}
            </div>

            // Table
            <div class="bg-gray-800 rounded-lg overflow-x-auto">
                <Show when=move || loaded.get() fallback=|| view! { <Loading /> }>
                    <StudentTable students=students on_delete=on_delete />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn StudentTable(
    #[prop(into)]
    students: Signal<Vec<Student>>,
    on_delete: Callback<String>,
) -> impl IntoView {
    view! {
        <table class="w-full text-sm">
            <thead class="bg-gray-700 text-gray-300">
                <tr>
                    <th class="px-4 py-3 text-left">"Date"</th>
                    <th class="px-4 py-3 text-left">"Description"</th>
                    <th class="px-4 py-3 text-left">"Status"</th>
                    <th class="px-4 py-3 text-right">"No Of Pushups"</th>
                    <th class="px-4 py-3 text-right">"Ran Distance"</th>
                    <th class="px-4 py-3 text-right">"Weight Lifted"</th>
                    <th class="px-4 py-3 text-center">"Action"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || students.get()
                    key=|student| student.clone()
                    children=move |student| view! { <StudentRow student=student on_delete=on_delete /> }
                />
            </tbody>
        </table>
    }
}

#[component]
fn StudentRow(student: Student, on_delete: Callback<String>) -> impl IntoView {
    let navigate = use_navigate();
    let edit_path = format!("/editpost/{}", student.id);
    let id = student.id.clone();
    let fields = student.fields;

    view! {
        <tr class="border-t border-gray-700 hover:bg-gray-750">
            <td class="px-4 py-3">{fields.student_name}</td>
            <td class="px-4 py-3 text-gray-300">{fields.student_address}</td>
            <td class="px-4 py-3">{fields.status}</td>
            <td class="px-4 py-3 text-right">{fields.pushups}</td>
            <td class="px-4 py-3 text-right">{format!("{} Km", fields.ran_distance)}</td>
            <td class="px-4 py-3 text-right">{format!("{} Kg", fields.weight_lifted)}</td>
            <td class="px-4 py-3 text-center space-x-2">
                <button
                    on:click=move |_| navigate(&edit_path, Default::default())
                    class="px-3 py-1 bg-primary-600 hover:bg-primary-700 rounded font-medium transition-colors"
                >
                    "Edit"
                </button>
                <button
                    on:click=move |_| on_delete.call(id.clone())
                    class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded font-medium transition-colors"
                >
                    "Delete"
                </button>
            </td>
        </tr>
    }
}
