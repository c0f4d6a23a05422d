//! Container for renderer output with delegated click handling.

use leptos::html;
use leptos::prelude::*;

use super::proof_picker::ProofPicker;
use crate::state::dashboard::DashboardState;

/// Render `html` into a `div` and route clicks on `[data-action]` controls.
#[component]
pub fn MarkupPanel(
    #[prop(into)] html: Signal<String>,
    id: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] picker: Option<ProofPicker>,
) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let container = NodeRef::<html::Div>::new();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            use crate::controller::delegate::{notes_in, target_from_event};
            use crate::controller::runtime;

            let Some(target) = target_from_event(&ev) else {
                return;
            };
            let Some(delegated) = target.resolve(|report_id| {
                container.get_untracked().map(|el| notes_in(&el, report_id)).unwrap_or_default()
            }) else {
                return;
            };
            runtime::handle_delegated(state, delegated, move || {
                if let Some(picker) = picker {
                    picker.open();
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        let _ = (ev, state, container, picker);
    };

    view! { <div id=id class=class node_ref=container inner_html=move || html.get() on:click=on_click></div> }
}
