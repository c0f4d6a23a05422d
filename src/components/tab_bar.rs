//! Role tab strip. Every tab is listed; selection is gated by the session's
//! capabilities and exactly one button carries `active`.

use leptos::prelude::*;

use crate::state::access::Tab;
use crate::state::dashboard::DashboardState;

#[component]
pub fn TabBar() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    view! {
        <nav class="tabs">
            {Tab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            class="tab-button"
                            class:active=move || state.with(|s| s.active_tab == tab)
                            on:click=move |_| {
                                state.update(|s| {
                                    s.select_tab(tab);
                                });
                            }
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
