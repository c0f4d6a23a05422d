//! Authenticated dashboard with one section per role tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page owns the `RwSignal<DashboardState>` and provides it to every
//! panel. On mount it loads the signed-in user; a failed identity load sends
//! the browser back to sign-in before anything else renders.

use leptos::prelude::*;

use crate::components::alert_banner::AlertBanner;
use crate::components::assign_form::AssignForm;
use crate::components::markup_panel::MarkupPanel;
use crate::components::proof_picker::{ProofInput, ProofPicker};
use crate::components::report_form::ReportForm;
use crate::components::tab_bar::TabBar;
use crate::components::task_filter_form::TaskFilterForm;
use crate::components::theme_toggle::ThemeToggle;
use crate::controller::runtime;
use crate::render;
use crate::render::tasks::TaskListKind;
use crate::state::access::Tab;
use crate::state::dashboard::DashboardState;

/// Derive panel markup from state; `None` data renders as an empty panel.
fn markup(state: RwSignal<DashboardState>, build: fn(&DashboardState) -> Option<String>) -> Signal<String> {
    Signal::derive(move || state.with(build).unwrap_or_default())
}

#[component]
fn Section(tab: Tab, children: Children) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    view! {
        <section id=tab.section_id() class="tab-content" class:active=move || state.with(|s| s.active_tab == tab)>
            {children()}
        </section>
    }
}

#[component]
fn CitizenSection() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let reports = markup(state, |s| s.my_reports.as_deref().map(render::reports::my_reports));
    let rewards = markup(state, |s| s.rewards.as_ref().map(render::rewards::rewards));
    let submit_reports = move || state.with(|s| s.capabilities.submit_reports);
    let view_rewards = move || state.with(|s| s.capabilities.view_rewards);

    view! {
        <Section tab=Tab::Citizen>
            <Show when=submit_reports>
                <ReportForm/>
            </Show>
            <Show when=view_rewards>
                <h3>"Your Rewards"</h3>
                <MarkupPanel id="rewards" class="rewards-grid" html=rewards/>
            </Show>
            <h3>"My Reports"</h3>
            <MarkupPanel id="my-reports" class="card-list" html=reports/>
        </Section>
    }
}

#[component]
fn VolunteerSection(picker: ProofPicker) -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let available = markup(state, |s| {
        s.available_tasks.as_deref().map(|t| render::tasks::task_list(t, TaskListKind::Available))
    });
    let mine = markup(state, |s| s.my_tasks.as_deref().map(|t| render::tasks::task_list(t, TaskListKind::Mine)));
    let work_tasks = move || state.with(|s| s.capabilities.work_tasks);

    view! {
        <Section tab=Tab::Volunteer>
            <Show when=work_tasks>
                <div class="search-bar">
                    <input
                        id="available-search"
                        class="form-control"
                        type="search"
                        placeholder="Search available tasks"
                        prop:value=move || state.with(|s| s.available_query.clone())
                        on:input=move |ev| runtime::search_available(state, event_target_value(&ev))
                    />
                    <button class="btn btn-secondary" type="button" on:click=move |_| runtime::search_now(state)>
                        "Search"
                    </button>
                </div>
                <h3>"Available Tasks"</h3>
                <MarkupPanel id="available-tasks" class="card-list" html=available picker=picker/>
                <h3>"My Tasks"</h3>
                <MarkupPanel id="my-tasks" class="card-list" html=mine picker=picker/>
            </Show>
        </Section>
    }
}

#[component]
fn ModeratorSection() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let pending = markup(state, |s| s.pending_reports.as_deref().map(render::reports::pending_reports));
    let moderate = move || state.with(|s| s.capabilities.moderate);

    view! {
        <Section tab=Tab::Moderator>
            <Show when=moderate>
                <AssignForm/>
                <h3>"Pending Reports"</h3>
                <MarkupPanel id="pending-reports" class="card-list" html=pending/>
            </Show>
        </Section>
    }
}

#[component]
fn AdminSection() -> impl IntoView {
    let state = expect_context::<RwSignal<DashboardState>>();
    let managed = markup(state, |s| s.managed_tasks.as_deref().map(render::tasks::managed_tasks));
    let stat_cards = markup(state, |s| s.stats.as_ref().map(render::analytics::stat_cards));
    let hotspots = move || state.with(|s| s.stats.as_ref().map(|st| render::analytics::hotspots(&st.hotspots)));
    let view_analytics = move || state.with(|s| s.capabilities.view_analytics);
    let moderate = move || state.with(|s| s.capabilities.moderate);

    view! {
        <Section tab=Tab::Admin>
            <Show when=view_analytics>
                <h3>"Analytics"</h3>
                <MarkupPanel id="analytics" class="stats-grid" html=stat_cards/>
                <h4>"Hotspots"</h4>
                <ul id="hotspots" class="hotspot-list" inner_html=move || hotspots().unwrap_or_default()></ul>
            </Show>
            <Show when=moderate>
                <h3>"All Tasks"</h3>
                <TaskFilterForm/>
                <MarkupPanel id="manage-tasks" class="table-wrap" html=managed/>
            </Show>
        </Section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    provide_context(state);
    let picker = ProofPicker::new();

    #[cfg(feature = "csr")]
    runtime::start_session(state);

    let identity = move || state.with(DashboardState::identity_label).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="site-header">
                <a href="/" class="brand">
                    <i class="fa fa-leaf"></i>
                    " GreenTrack"
                </a>
                <div class="header-actions">
                    <span id="user-info" class="user-info">{identity}</span>
                    <ThemeToggle/>
                    <button id="logout-btn" class="btn btn-outline" type="button" on:click=move |_| runtime::logout(state)>
                        "Logout"
                    </button>
                </div>
            </header>

            <Show
                when=move || state.with(DashboardState::is_authenticated)
                fallback=|| view! { <p class="loading">"Loading your dashboard..."</p> }
            >
                <main class="dashboard">
                    <AlertBanner/>
                    <TabBar/>
                    <CitizenSection/>
                    <VolunteerSection picker=picker/>
                    <ModeratorSection/>
                    <AdminSection/>
                    <ProofInput picker=picker/>
                </main>
            </Show>
        </div>
    }
}
