//! Hidden file input used to pick proof-of-completion photos.

use leptos::html;
use leptos::prelude::*;

use crate::net::types::Attachment;
use crate::state::dashboard::DashboardState;

/// First file chosen in `input`, if any.
pub fn first_file(input: NodeRef<html::Input>) -> Option<Attachment> {
    #[cfg(feature = "csr")]
    {
        input
            .get_untracked()
            .and_then(|el| el.files())
            .and_then(|files| files.get(0))
            .map(Attachment::from)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = input;
        None
    }
}

/// Handle to the hidden proof input, shared with panels that open it.
#[derive(Clone, Copy)]
pub struct ProofPicker(NodeRef<html::Input>);

impl ProofPicker {
    pub fn new() -> Self {
        Self(NodeRef::new())
    }

    /// Clear the previous selection and open the file dialog.
    pub fn open(self) {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = self.0.get_untracked() {
                input.set_value("");
                input.click();
            }
        }
    }
}

impl Default for ProofPicker {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn ProofInput(picker: ProofPicker) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    let on_change = move |_ev: leptos::ev::Event| {
        crate::controller::runtime::proof_picked(state, first_file(picker.0));
    };

    view! {
        <input
            type="file"
            accept="image/*"
            class="visually-hidden"
            node_ref=picker.0
            on:change=on_change
        />
    }
}
