use repo_showcase::models::StatBadge;
use repo_showcase::stats::{reconcile_projects, reconcile_technologies};

fn badges() -> Vec<StatBadge> {
    vec![
        StatBadge {
            label: "Projects".to_string(),
            count: 0,
        },
        StatBadge {
            label: "Technologies".to_string(),
            count: 0,
        },
        StatBadge {
            label: "Years Experience".to_string(),
            count: 5,
        },
    ]
}

#[test]
fn test_projects_badge_sums_curated_and_rendered() {
    let mut badges = badges();
    let updates = reconcile_projects(&mut badges, 4, 6);

    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].label, "Projects");
    assert_eq!(updates[0].data_count, 10);
    assert_eq!(updates[0].text, "10");
    assert_eq!(badges[0].count, 10);
    // Unrelated badges untouched
    assert_eq!(badges[2].count, 5);
}

#[test]
fn test_projects_badge_on_fetch_failure_uses_curated_only() {
    let mut badges = badges();
    let updates = reconcile_projects(&mut badges, 4, 0);
    assert_eq!(updates[0].data_count, 4);
}

#[test]
fn test_technologies_badge_counts_static_skills_only() {
    let mut badges = badges();
    let updates = reconcile_technologies(&mut badges, 12);

    assert_eq!(updates.len(), 1);
    assert_eq!(updates[0].label, "Technologies");
    assert_eq!(updates[0].data_count, 12);
    assert_eq!(badges[1].count, 12);
    assert_eq!(badges[0].count, 0);
}

#[test]
fn test_label_matching_is_substring_and_case_insensitive() {
    let mut badges = vec![StatBadge {
        label: "COMPLETED PROJECTS".to_string(),
        count: 0,
    }];
    let updates = reconcile_projects(&mut badges, 2, 1);
    assert_eq!(updates.len(), 1);
    assert_eq!(badges[0].count, 3);
}

#[test]
fn test_no_matching_badge_produces_no_updates() {
    let mut badges = vec![StatBadge {
        label: "Followers".to_string(),
        count: 0,
    }];
    assert!(reconcile_projects(&mut badges, 1, 1).is_empty());
    assert!(reconcile_technologies(&mut badges, 1).is_empty());
}
