//! Dashboard alert region.

use leptos::prelude::*;

use crate::state::dashboard::{AlertKind, DashboardState};

#[component]
pub fn AlertBanner() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();

    view! {
        <div id="alert" class="alert-region" aria-live="polite">
            {move || {
                state
                    .with(|s| s.alert.clone())
                    .map(|alert| {
                        let class = match alert.kind {
                            AlertKind::Success => "alert alert-success",
                            AlertKind::Error => "alert alert-error",
                        };
                        view! { <div class=class role="alert">{alert.message}</div> }
                    })
            }}
        </div>
    }
}
