//! App-wide UI chrome state.
//!
//! DESIGN
//! ======
//! Only the theme is shared across routes; everything else is route-scoped.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// Shared presentation state provided at the app root.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
}
