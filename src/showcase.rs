use crate::models::{DisplayCard, RepoSummary};

/// Upper bound on rendered cards.
pub const MAX_CARDS: usize = 6;

/// Apply the selection policy, in order:
/// 1. exclude forks,
/// 2. exclude archived repositories,
/// 3. exclude the repo named after the account itself (case-insensitive),
/// 4. exclude empty or whitespace-only descriptions,
/// 5. sort by stars descending, ties broken by most-recent push
///    (a never-pushed repository sorts last),
/// then keep at most [`MAX_CARDS`].
pub fn select_repos<'a>(repos: &'a [RepoSummary], account: &str) -> Vec<&'a RepoSummary> {
    let account_lower = account.to_lowercase();

    let mut selected: Vec<&RepoSummary> = repos
        .iter()
        .filter(|r| !r.fork)
        .filter(|r| !r.archived)
        .filter(|r| r.name.to_lowercase() != account_lower)
        .filter(|r| {
            r.description
                .as_deref()
                .is_some_and(|d| !d.trim().is_empty())
        })
        .collect();

    selected.sort_by(|a, b| {
        b.stargazers_count
            .cmp(&a.stargazers_count)
            .then_with(|| b.pushed_at.cmp(&a.pushed_at))
    });
    selected.truncate(MAX_CARDS);
    selected
}

/// Build the rendered-card views for the selected repositories.
pub fn build_cards(repos: &[RepoSummary], account: &str) -> Vec<DisplayCard> {
    select_repos(repos, account)
        .into_iter()
        .map(DisplayCard::from_repo)
        .collect()
}
