use crate::models::{DisplayCard, LanguageShare};
use std::fmt::Write as _;

/// Escape the HTML-significant characters `& < > "` in untrusted text.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

pub const CARDS_EMPTY_STATE: &str =
    r#"<p style="text-align:center;color:var(--text-muted)">No public repositories found.</p>"#;

pub const LANGUAGES_EMPTY_STATE: &str =
    r#"<p style="color:var(--text-muted)">No language data available.</p>"#;

/// Render the card-grid fragment, or the empty-state message when nothing
/// passed selection.
pub fn render_cards(cards: &[DisplayCard]) -> String {
    if cards.is_empty() {
        return CARDS_EMPTY_STATE.to_string();
    }
    cards.iter().map(|c| render_card(c)).collect()
}

fn render_card(card: &DisplayCard) -> String {
    let name = escape_html(&card.name);
    let description = escape_html(&card.description);
    let language = escape_html(&card.language);

    let demo_link = card
        .demo_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<a href="{}" class="action-btn" target="_blank" rel="noopener" title="Live Demo"><i class="fas fa-external-link-alt"></i></a>"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    let mut html = String::new();
    let _ = write!(
        html,
        r#"<div class="project-card">
  <div class="project-image">
    <div class="project-placeholder visible"><i class="fas fa-code-branch"></i></div>
    <div class="project-overlay">
      <div class="project-actions">
        {demo_link}<a href="{source}" class="action-btn" target="_blank" rel="noopener" title="Source Code"><i class="fab fa-github"></i></a>
      </div>
    </div>
  </div>
  <div class="project-content">
    <div class="project-meta">
      <span class="project-type">{language}</span>
      <span class="project-date">{year}</span>
    </div>
    <h3>{name}</h3>
    <p>{description}</p>
    <div class="project-tech"><span class="tech-tag">{language}</span></div>
    <div class="project-stats">
      <div class="stat"><i class="fas fa-star"></i><span>{stars}</span></div>
      <div class="stat"><i class="fas fa-code-branch"></i><span>{forks}</span></div>
    </div>
  </div>
</div>
"#,
        demo_link = demo_link,
        source = escape_html(&card.source_url),
        language = language,
        year = card
            .updated_year
            .map(|y| y.to_string())
            .unwrap_or_default(),
        name = name,
        description = description,
        stars = card.stars,
        forks = card.forks,
    );
    html
}

/// Render the language progress list, or its empty-state message.
pub fn render_languages(shares: &[LanguageShare]) -> String {
    if shares.is_empty() {
        return LANGUAGES_EMPTY_STATE.to_string();
    }

    let mut html = String::new();
    for share in shares {
        let _ = write!(
            html,
            r#"<div class="skill-item">
  <div class="skill-info"><i class="fas fa-code"></i><span>{name}</span></div>
  <div class="skill-progress"><div class="progress-bar" data-progress="{percent}" data-reveal-delay="{delay}"></div></div>
</div>
"#,
            name = escape_html(&share.name),
            percent = share.percent,
            delay = share.reveal_delay_ms,
        );
    }
    html
}
