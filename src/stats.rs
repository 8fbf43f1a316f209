use crate::models::{BadgeUpdate, StatBadge};

/// Label substrings that identify the two reconciled badges.
const PROJECTS_LABEL: &str = "project";
const TECHNOLOGIES_LABEL: &str = "technolog";

/// Set every badge whose label contains `needle` (case-insensitive) to
/// `count`, returning the produced updates.
fn reconcile(badges: &mut [StatBadge], needle: &str, count: u64) -> Vec<BadgeUpdate> {
    badges
        .iter_mut()
        .filter(|b| b.label.to_lowercase().contains(needle))
        .map(|badge| {
            badge.count = count;
            BadgeUpdate {
                label: badge.label.clone(),
                data_count: count,
                text: count.to_string(),
            }
        })
        .collect()
}

/// Projects badge: statically authored cards plus dynamically rendered ones.
/// Runs after the repository fetch completes, on both the success and the
/// failure path.
pub fn reconcile_projects(
    badges: &mut [StatBadge],
    curated_cards: u64,
    rendered_cards: u64,
) -> Vec<BadgeUpdate> {
    reconcile(badges, PROJECTS_LABEL, curated_cards + rendered_cards)
}

/// Technologies badge: statically authored skill entries only. The dynamic
/// language list never counts toward this; it runs once at startup, before
/// remote data arrives.
pub fn reconcile_technologies(badges: &mut [StatBadge], static_skills: u64) -> Vec<BadgeUpdate> {
    reconcile(badges, TECHNOLOGIES_LABEL, static_skills)
}
