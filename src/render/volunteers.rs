//! `<option>` markup for the volunteer assignment selector.

#[cfg(test)]
#[path = "volunteers_test.rs"]
mod volunteers_test;

use super::escape::escape_html;
use crate::net::types::Volunteer;

pub const CHOOSE_VOLUNTEER: &str = "Choose volunteer";

/// `picked` if it still names a listed volunteer, otherwise empty.
pub fn retained_pick(volunteers: &[Volunteer], picked: &str) -> String {
    let picked = picked.trim();
    if volunteers.iter().any(|v| v.id.to_string() == picked) {
        picked.to_owned()
    } else {
        String::new()
    }
}

/// Placeholder option followed by one option per volunteer.
///
/// The option matching `picked` carries `selected`; when nothing matches the
/// placeholder does, so the visible choice always agrees with the pick.
pub fn volunteer_options(volunteers: &[Volunteer], picked: &str) -> String {
    let picked = retained_pick(volunteers, picked);
    let options = volunteers
        .iter()
        .map(|v| {
            let selected = if v.id.to_string() == picked { " selected" } else { "" };
            format!(
                r#"<option value="{}"{selected}>{} ({})</option>"#,
                v.id,
                escape_html(&v.name),
                escape_html(&v.email)
            )
        })
        .collect::<String>();
    let placeholder = if picked.is_empty() { " selected" } else { "" };
    format!(r#"<option value="" disabled{placeholder}>{CHOOSE_VOLUNTEER}</option>{options}"#)
}
