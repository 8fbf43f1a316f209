mod common;

use common::repo;
use repo_showcase::models::DisplayCard;
use repo_showcase::render::{
    escape_html, render_cards, render_languages, CARDS_EMPTY_STATE, LANGUAGES_EMPTY_STATE,
};
use repo_showcase::showcase::build_cards;

#[test]
fn test_escape_html_covers_significant_characters() {
    assert_eq!(
        escape_html(r#"<a href="x">&</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain text"), "plain text");
}

#[test]
fn test_script_description_renders_as_literal_text() {
    let r = repo("xss", 1, Some("<script>alert('pwn')</script>"), None);
    let cards = build_cards(&[r], "someone");
    let html = render_cards(&cards);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert('pwn')&lt;/script&gt;"));
}

#[test]
fn test_empty_selection_renders_empty_state() {
    let html = render_cards(&[]);
    assert_eq!(html, CARDS_EMPTY_STATE);
    assert!(html.contains("No public repositories found."));
}

#[test]
fn test_card_contains_expected_fields() {
    let mut r = repo("widget", 42, Some("A small widget"), Some("Rust"));
    r.forks_count = 7;
    r.homepage = Some("https://widget.example.com".to_string());
    let cards = build_cards(&[r], "someone");
    let html = render_cards(&cards);

    assert!(html.contains("<h3>widget</h3>"));
    assert!(html.contains("A small widget"));
    assert!(html.contains(r#"<span class="project-type">Rust</span>"#));
    assert!(html.contains("<span>42</span>"));
    assert!(html.contains("<span>7</span>"));
    assert!(html.contains(r#"href="https://github.com/someone/widget""#));
    assert!(html.contains(r#"title="Live Demo""#));
}

#[test]
fn test_demo_link_omitted_without_http_homepage() {
    let mut r = repo("widget", 1, Some("x"), None);
    r.homepage = Some("ftp://widget.example.com".to_string());
    let cards = build_cards(&[r], "someone");
    let html = render_cards(&cards);
    assert!(!html.contains("Live Demo"));
}

#[test]
fn test_one_card_fragment_per_display_card() {
    let cards: Vec<DisplayCard> = build_cards(
        &[
            repo("one", 2, Some("x"), None),
            repo("two", 1, Some("y"), None),
        ],
        "someone",
    );
    let html = render_cards(&cards);
    assert_eq!(html.matches(r#"<div class="project-card">"#).count(), 2);
}

#[test]
fn test_language_list_empty_state() {
    let html = render_languages(&[]);
    assert_eq!(html, LANGUAGES_EMPTY_STATE);
    assert!(html.contains("No language data available."));
}
