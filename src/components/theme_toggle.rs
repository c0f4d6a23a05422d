//! Light/dark toggle button shown on every page header.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::theme;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let current = move || ui.with(|u| u.theme);

    view! {
        <button
            class="btn btn-outline theme-toggle"
            type="button"
            title="Toggle theme"
            on:click=move |_| {
                let next = theme::toggle(ui.get_untracked().theme);
                ui.update(|u| u.theme = next);
            }
        >
            <i class=move || format!("fa {}", current().toggle_icon())></i>
            <span>{move || current().toggle_label()}</span>
        </button>
    }
}
