//! Analytics markup: headline counters and the hotspot ranking.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use super::escape::escape_html;
use crate::net::types::{Hotspot, Stats};

pub const NO_HOTSPOTS: &str = "No hotspots identified yet.";

fn stat_card(value: u64, label: &str) -> String {
    format!(r#"<div class="stat-card"><div class="stat-number">{value}</div><div class="stat-label">{label}</div></div>"#)
}

pub fn stat_cards(stats: &Stats) -> String {
    [
        stat_card(stats.total_reports, "Total Reports"),
        stat_card(stats.valid_reports, "Verified Reports"),
        stat_card(stats.completed_tasks, "Tasks Completed"),
        stat_card(stats.volunteers_count, "Volunteers"),
    ]
    .concat()
}

/// `<li>` items for the hotspot `<ul>`, highest count first as delivered.
pub fn hotspots(hotspots: &[Hotspot]) -> String {
    if hotspots.is_empty() {
        return format!("<li>{NO_HOTSPOTS}</li>");
    }
    hotspots
        .iter()
        .map(|h| {
            format!(
                r#"<li class="hotspot-item"><span>{}</span><strong>{}</strong></li>"#,
                escape_html(&h.location),
                h.count
            )
        })
        .collect()
}
