//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{auth::AuthPage, dashboard::DashboardPage, landing::LandingPage};
use crate::state::ui::UiState;
use crate::util::theme;

/// Root application component.
///
/// Resolves the theme before the first route renders and provides it as
/// app-wide context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let initial_theme = theme::read_preference();
    theme::apply(initial_theme);
    let ui = RwSignal::new(UiState { theme: initial_theme });
    provide_context(ui);

    view! {
        <Link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.0/css/all.min.css"/>
        <Title text="GreenTrack"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
