/// Stagger between visible cards when a filter is applied.
pub const FILTER_STAGGER_MS: u32 = 50;

/// Filter value that shows every card.
pub const FILTER_ALL: &str = "all";

/// A statically authored project card, as the filter sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectEntry {
    pub name: String,
    /// Space-separated category tokens from the card's `data-category`.
    pub categories: String,
}

/// Visibility outcome for one card under the active filter.
#[derive(Debug, Clone, PartialEq)]
pub struct CardVisibility {
    pub name: String,
    pub visible: bool,
    /// Transition delay; staggered across visible cards, zero when hidden.
    pub delay_ms: u32,
}

/// Apply a category filter to the project grid. A card stays visible when the
/// filter is [`FILTER_ALL`] or its category string contains the filter token.
pub fn apply_filter(entries: &[ProjectEntry], filter: &str) -> Vec<CardVisibility> {
    let mut delay = 0;
    entries
        .iter()
        .map(|entry| {
            let visible = filter == FILTER_ALL || entry.categories.contains(filter);
            let delay_ms = if visible {
                let current = delay;
                delay += FILTER_STAGGER_MS;
                current
            } else {
                0
            };
            CardVisibility {
                name: entry.name.clone(),
                visible,
                delay_ms,
            }
        })
        .collect()
}
