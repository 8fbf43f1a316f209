use crate::models::{LanguageShare, RepoSummary};
use std::collections::HashMap;

/// How many languages survive the tally.
pub const MAX_LANGUAGES: usize = 6;

/// Per-item reveal stagger for the progress-bar animation.
pub const REVEAL_STEP_MS: u32 = 80;

/// Tally declared languages across non-fork, non-archived repositories and
/// keep the top [`MAX_LANGUAGES`] by occurrence count.
///
/// Percentages are rounded to the nearest integer share of the full tally
/// (before truncation to the top six). Equal counts order by name so the
/// output is deterministic.
pub fn tally_languages(repos: &[RepoSummary]) -> Vec<LanguageShare> {
    let mut tally: HashMap<&str, u32> = HashMap::new();
    for repo in repos.iter().filter(|r| !r.fork && !r.archived) {
        if let Some(lang) = repo.language.as_deref() {
            *tally.entry(lang).or_insert(0) += 1;
        }
    }

    let total: u32 = tally.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<(&str, u32)> = tally.into_iter().collect();
    shares.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    shares.truncate(MAX_LANGUAGES);

    shares
        .into_iter()
        .enumerate()
        .map(|(idx, (name, count))| LanguageShare {
            name: name.to_string(),
            count,
            percent: ((count as f64 / total as f64) * 100.0).round() as u32,
            reveal_delay_ms: idx as u32 * REVEAL_STEP_MS,
        })
        .collect()
}
