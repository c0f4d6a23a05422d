//! Public landing page with role previews and sign-up links.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;
use crate::config::SIGN_IN_PATH;
use crate::net::types::Role;

/// Role preview shown in the landing page carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Preview {
    #[default]
    Citizen,
    Volunteer,
    Moderator,
}

impl Preview {
    pub const ALL: [Preview; 3] = [Preview::Citizen, Preview::Volunteer, Preview::Moderator];

    pub fn label(self) -> &'static str {
        match self {
            Self::Citizen => "Citizens",
            Self::Volunteer => "Volunteers",
            Self::Moderator => "Moderators",
        }
    }

    fn blurb(self) -> &'static str {
        match self {
            Self::Citizen => "Snap a photo of an overflowing bin or dump site, tag the location, and track it until it is cleaned.",
            Self::Volunteer => "Claim nearby cleanup tasks, mark progress, and upload proof photos when the job is done.",
            Self::Moderator => "Verify incoming reports, assign volunteers, and watch hotspots across the city.",
        }
    }
}

/// Sign-up link that opens the register form with `role` pre-selected.
pub fn register_link(role: Role) -> String {
    format!("{SIGN_IN_PATH}?action=register&role={}", role.as_str())
}

#[component]
pub fn LandingPage() -> impl IntoView {
    let active = RwSignal::new(Preview::default());

    view! {
        <div class="landing-page">
            <header class="site-header">
                <a href="/" class="brand">
                    <i class="fa fa-leaf"></i>
                    " GreenTrack"
                </a>
                <nav class="site-nav">
                    <a href=SIGN_IN_PATH class="btn btn-outline">"Sign In"</a>
                    <ThemeToggle/>
                </nav>
            </header>

            <section class="hero">
                <h1>"Cleaner neighborhoods, one report at a time."</h1>
                <p>"Report litter and dumping, rally volunteers, and see the city get cleaner."</p>
                <div class="hero-actions">
                    <a href=register_link(Role::Citizen) class="btn btn-primary">"Report an Issue"</a>
                    <a href=register_link(Role::Volunteer) class="btn btn-secondary">"Become a Volunteer"</a>
                </div>
            </section>

            <section class="preview">
                <div class="preview-tabs">
                    {Preview::ALL
                        .into_iter()
                        .map(|preview| {
                            view! {
                                <button
                                    type="button"
                                    class="preview-tab"
                                    class:active=move || active.get() == preview
                                    on:click=move |_| active.set(preview)
                                >
                                    {preview.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                {Preview::ALL
                    .into_iter()
                    .map(|preview| {
                        view! {
                            <div class="preview-panel" class:active=move || active.get() == preview>
                                <p>{preview.blurb()}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
