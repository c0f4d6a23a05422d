//! Status/category/text filters for the manage-tasks table.

use leptos::prelude::*;

use crate::config::{REPORT_CATEGORIES, TASK_STATUSES};
use crate::controller::actions::DashboardAction;
use crate::controller::runtime;
use crate::net::types::TaskFilters;
use crate::state::dashboard::DashboardState;

fn options_with_all(choices: &'static [(&'static str, &'static str)], all: &'static str) -> impl IntoView {
    let rest = choices
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view();
    view! {
        <option value="">{all}</option>
        {rest}
    }
}

#[component]
pub fn TaskFilterForm() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let initial = state.with_untracked(|s| s.filters.clone());
    let status = RwSignal::new(initial.status);
    let category = RwSignal::new(initial.category);
    let q = RwSignal::new(initial.q);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let filters = TaskFilters { status: status.get_untracked(), category: category.get_untracked(), q: q.get_untracked() };
        runtime::dispatch(state, DashboardAction::FilterTasks(filters));
    };

    view! {
        <form id="task-filter-form" class="form-inline" on:submit=on_submit>
            <select
                class="form-control"
                prop:value=move || status.get()
                on:change=move |ev| status.set(event_target_value(&ev))
            >
                {options_with_all(TASK_STATUSES, "All statuses")}
            </select>
            <select
                class="form-control"
                prop:value=move || category.get()
                on:change=move |ev| category.set(event_target_value(&ev))
            >
                {options_with_all(REPORT_CATEGORIES, "All categories")}
            </select>
            <input
                class="form-control"
                type="search"
                placeholder="Search tasks"
                prop:value=move || q.get()
                on:input=move |ev| q.set(event_target_value(&ev))
            />
            <button class="btn btn-secondary" type="submit">"Filter"</button>
        </form>
    }
}
