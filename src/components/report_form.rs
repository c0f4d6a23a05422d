//! Citizen report submission form.
//!
//! The form remounts whenever `report_form_seq` changes, which is how a
//! successful submission clears every field including the file input.

use leptos::html;
use leptos::prelude::*;

use super::proof_picker::first_file;
use crate::config::{REPORT_CATEGORIES, REPORT_SEVERITIES};
use crate::controller::actions::ReportDraft;
use crate::controller::runtime;
use crate::state::dashboard::DashboardState;

const DEFAULT_SEVERITY: &str = "medium";

fn options(choices: &'static [(&'static str, &'static str)]) -> impl IntoView {
    choices
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view()
}

#[component]
pub fn ReportForm() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let form_seq = Memo::new(move |_| state.with(|s| s.report_form_seq));

    move || {
        form_seq.track();
        view! { <ReportFormFields/> }
    }
}

#[component]
fn ReportFormFields() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    let category = RwSignal::new(REPORT_CATEGORIES.first().map_or("", |(v, _)| *v).to_owned());
    let severity = RwSignal::new(DEFAULT_SEVERITY.to_owned());
    let description = RwSignal::new(String::new());
    let location_text = RwSignal::new(String::new());
    let latitude = RwSignal::new(String::new());
    let longitude = RwSignal::new(String::new());
    let is_anonymous = RwSignal::new(false);
    let photo = NodeRef::<html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ReportDraft {
            category: category.get_untracked(),
            description: description.get_untracked(),
            location_text: location_text.get_untracked(),
            severity: severity.get_untracked(),
            latitude: latitude.get_untracked(),
            longitude: longitude.get_untracked(),
            is_anonymous: is_anonymous.get_untracked(),
            photo: first_file(photo),
        };
        match draft.into_action() {
            Ok(action) => runtime::dispatch(state, action),
            Err(message) => runtime::reject(state, message),
        }
    };

    view! {
        <form id="report-form" class="card form-grid" on:submit=on_submit>
            <h3>"Report an Issue"</h3>
            <label>
                "Category"
                <select
                    class="form-control"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    {options(REPORT_CATEGORIES)}
                </select>
            </label>
            <label>
                "Severity"
                <select
                    class="form-control"
                    prop:value=move || severity.get()
                    on:change=move |ev| severity.set(event_target_value(&ev))
                >
                    {options(REPORT_SEVERITIES)}
                </select>
            </label>
            <label class="form-span">
                "Description"
                <textarea
                    class="form-control"
                    rows="3"
                    required
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
            </label>
            <label class="form-span">
                "Location"
                <input
                    class="form-control"
                    type="text"
                    required
                    placeholder="Street, landmark, or area"
                    prop:value=move || location_text.get()
                    on:input=move |ev| location_text.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Latitude"
                <input
                    class="form-control"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || latitude.get()
                    on:input=move |ev| latitude.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Longitude"
                <input
                    class="form-control"
                    type="text"
                    inputmode="decimal"
                    prop:value=move || longitude.get()
                    on:input=move |ev| longitude.set(event_target_value(&ev))
                />
            </label>
            <label class="form-span">
                "Photo"
                <input class="form-control" type="file" accept="image/*" node_ref=photo/>
            </label>
            <label class="checkbox">
                <input
                    type="checkbox"
                    prop:checked=move || is_anonymous.get()
                    on:change=move |ev| is_anonymous.set(event_target_checked(&ev))
                />
                "Submit anonymously"
            </label>
            <button class="btn btn-primary" type="submit">"Submit Report"</button>
        </form>
    }
}
