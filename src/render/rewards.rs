//! Reward panel markup with one-shot code reveal controls.

#[cfg(test)]
#[path = "rewards_test.rs"]
mod rewards_test;

use super::escape::escape_html;
use crate::state::dashboard::RewardsView;

pub const NO_REWARDS: &str = "No rewards unlocked yet. Keep reporting to earn discounts.";
pub const REVEAL_LABEL: &str = "Tap to reveal";
pub const ALL_TIERS_UNLOCKED: &str = "You've unlocked every reward tier!";

fn progress(view: &RewardsView) -> String {
    let snapshot = &view.snapshot;
    let next = match &snapshot.next_tier {
        Some(tier) => {
            let remaining = tier.threshold.saturating_sub(snapshot.valid_reports);
            if remaining == 0 {
                format!("Unlocking {} on your next refresh.", escape_html(&tier.brand))
            } else {
                let noun = if remaining == 1 { "report" } else { "reports" };
                format!("{remaining} more valid {noun} to unlock {}.", escape_html(&tier.brand))
            }
        }
        None => escape_html(ALL_TIERS_UNLOCKED),
    };
    format!(
        r#"<div class="reward-progress"><div class="stat-number">{}</div><div class="stat-label">Valid Reports</div><p class="reward-next">{next}</p></div>"#,
        snapshot.valid_reports
    )
}

fn reveal_control(view: &RewardsView, index: usize, code: &str) -> String {
    if view.is_revealed(index) {
        format!(
            r#"<button class="reward-code reward-code--revealed" data-action="reveal" data-index="{index}" data-revealed="true">{}</button>"#,
            escape_html(code)
        )
    } else {
        format!(r#"<button class="reward-code" data-action="reveal" data-index="{index}">{REVEAL_LABEL}</button>"#)
    }
}

/// Reward progress plus one card per unlocked reward.
///
/// Codes stay out of the markup until their control has been activated.
pub fn rewards(view: &RewardsView) -> String {
    let cards = if view.snapshot.rewards.is_empty() {
        format!("<p>{NO_REWARDS}</p>")
    } else {
        view.snapshot
            .rewards
            .iter()
            .enumerate()
            .map(|(index, reward)| {
                format!(
                    r#"<div class="reward-card card"><div class="report-header"><h4>{brand}</h4><span class="badge">Tier {tier}</span></div><p>{description}</p>{control}</div>"#,
                    brand = escape_html(&reward.brand),
                    tier = reward.tier,
                    description = escape_html(&reward.description),
                    control = reveal_control(view, index, &reward.code),
                )
            })
            .collect()
    };
    format!("{}{cards}", progress(view))
}
