//! Moderator form assigning a volunteer to a report.

use leptos::prelude::*;

use crate::controller::actions::AssignDraft;
use crate::controller::runtime;
use crate::render::volunteers::{retained_pick, volunteer_options};
use crate::state::dashboard::DashboardState;

#[component]
pub fn AssignForm() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let form_seq = Memo::new(move |_| state.with(|s| s.assign_form_seq));

    move || {
        form_seq.track();
        view! { <AssignFormFields/> }
    }
}

#[component]
fn AssignFormFields() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let report_id = RwSignal::new(String::new());
    let volunteer_id = RwSignal::new(String::new());
    let volunteer_markup = move || state.with(|s| volunteer_options(&s.volunteers, &volunteer_id.get()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let picked = state.with_untracked(|s| retained_pick(&s.volunteers, &volunteer_id.get_untracked()));
        let draft = AssignDraft { report_id: report_id.get_untracked(), volunteer_id: picked };
        match draft.into_action() {
            Ok(action) => runtime::dispatch(state, action),
            Err(message) => runtime::reject(state, message),
        }
    };

    view! {
        <form id="assign-form" class="card form-inline" on:submit=on_submit>
            <h3>"Assign Volunteer"</h3>
            <input
                class="form-control"
                type="number"
                min="1"
                placeholder="Report ID"
                prop:value=move || report_id.get()
                on:input=move |ev| report_id.set(event_target_value(&ev))
            />
            <select
                class="form-control"
                inner_html=volunteer_markup
                on:change=move |ev| volunteer_id.set(event_target_value(&ev))
            ></select>
            <button class="btn btn-primary" type="submit">"Assign"</button>
        </form>
    }
}
