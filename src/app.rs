use crate::github::GithubClient;
use crate::languages::tally_languages;
use crate::models::{BadgeUpdate, StatBadge};
use crate::render::{render_cards, render_languages};
use crate::showcase::build_cards;
use crate::stats::{reconcile_projects, reconcile_technologies};
use tracing::{info, warn};

/// Everything the widget produces for one page load.
#[derive(Debug, Clone)]
pub struct ShowcasePage {
    pub cards_html: String,
    pub languages_html: String,
    pub rendered_cards: usize,
    pub badge_updates: Vec<BadgeUpdate>,
}

/// Drive both widget consumers for one page load.
///
/// The card grid and the language tally each issue their own fetch against
/// the same endpoint, uncoordinated and uncached. Failures are caught here,
/// logged, and degraded to the empty-state fragment; nothing propagates to
/// the caller. The projects badge is reconciled after the card fetch settles,
/// success or failure, while the technologies badge is computed up front from
/// static content only.
pub async fn run_showcase(
    client: &GithubClient,
    account: &str,
    curated_cards: u64,
    static_skills: u64,
) -> ShowcasePage {
    let mut badges = vec![
        StatBadge {
            label: "Projects".to_string(),
            count: 0,
        },
        StatBadge {
            label: "Technologies".to_string(),
            count: 0,
        },
    ];

    let mut badge_updates = reconcile_technologies(&mut badges, static_skills);

    let (cards_result, languages_result) = tokio::join!(
        client.list_user_repos(account),
        client.list_user_repos(account),
    );

    let (cards_html, rendered_cards) = match cards_result {
        Ok(repos) => {
            let cards = build_cards(&repos, account);
            info!(count = cards.len(), "rendered repository cards");
            (render_cards(&cards), cards.len())
        }
        Err(err) => {
            warn!(error = %err, "failed to load repositories for cards");
            (render_cards(&[]), 0)
        }
    };

    badge_updates.extend(reconcile_projects(
        &mut badges,
        curated_cards,
        rendered_cards as u64,
    ));

    let languages_html = match languages_result {
        Ok(repos) => {
            let shares = tally_languages(&repos);
            info!(count = shares.len(), "tallied languages");
            render_languages(&shares)
        }
        Err(err) => {
            warn!(error = %err, "failed to load repositories for language tally");
            render_languages(&[])
        }
    };

    ShowcasePage {
        cards_html,
        languages_html,
        rendered_cards,
        badge_updates,
    }
}
