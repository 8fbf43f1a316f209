use crate::notify::{Notification, NotificationKind};
use crate::state::AppState;
use std::collections::HashMap;

/// Offset applied when deciding which section is active while scrolling.
const SCROLL_PROBE_OFFSET: f64 = 100.0;

/// Scroll depth past which the navbar takes its condensed style.
const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Scroll depth past which the back-to-top button shows.
const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// A section's vertical extent in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Inbound UI events, decoupled from the listeners that produce them.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ThemeToggled,
    NavLinkClicked { section: String },
    Scrolled { position: f64, sections: Vec<SectionBounds> },
    FormSubmitted { accepted: bool },
    PageLoaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ThemeToggled,
    NavLinkClicked,
    Scrolled,
    FormSubmitted,
    PageLoaded,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::ThemeToggled => EventKind::ThemeToggled,
            Event::NavLinkClicked { .. } => EventKind::NavLinkClicked,
            Event::Scrolled { .. } => EventKind::Scrolled,
            Event::FormSubmitted { .. } => EventKind::FormSubmitted,
            Event::PageLoaded => EventKind::PageLoaded,
        }
    }
}

/// Side effects a handler requests; the host environment executes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    ApplyDocumentTheme { theme: String },
    PersistTheme { theme: String },
    SetToggleIcon { icon: String },
    HighlightNavLink { section: String },
    ScrollToSection { section: String },
    SetNavbarCondensed { condensed: bool },
    SetBackToTopVisible { visible: bool },
    ShowNotification(Notification),
}

pub type Handler = fn(&AppState, &Event) -> (AppState, Vec<Effect>);

/// Explicit dispatch table keyed by event kind. Each handler is a pure
/// function of (state, event); nothing here touches the DOM.
pub struct HandlerMap {
    handlers: HashMap<EventKind, Handler>,
}

impl Default for HandlerMap {
    fn default() -> Self {
        let mut handlers: HashMap<EventKind, Handler> = HashMap::new();
        handlers.insert(EventKind::ThemeToggled, handle_theme_toggled);
        handlers.insert(EventKind::NavLinkClicked, handle_nav_link);
        handlers.insert(EventKind::Scrolled, handle_scrolled);
        handlers.insert(EventKind::FormSubmitted, handle_form_submitted);
        handlers.insert(EventKind::PageLoaded, handle_page_loaded);
        HandlerMap { handlers }
    }
}

impl HandlerMap {
    pub fn dispatch(&self, state: &AppState, event: &Event) -> (AppState, Vec<Effect>) {
        match self.handlers.get(&event.kind()) {
            Some(handler) => handler(state, event),
            None => (state.clone(), Vec::new()),
        }
    }
}

fn handle_theme_toggled(state: &AppState, _event: &Event) -> (AppState, Vec<Effect>) {
    let mut next = state.clone();
    next.theme = state.theme.toggled();
    let theme = next.theme.as_str().to_string();
    let effects = vec![
        Effect::ApplyDocumentTheme { theme: theme.clone() },
        Effect::PersistTheme { theme },
        Effect::SetToggleIcon {
            icon: next.theme.icon().to_string(),
        },
    ];
    (next, effects)
}

fn handle_nav_link(state: &AppState, event: &Event) -> (AppState, Vec<Effect>) {
    let Event::NavLinkClicked { section } = event else {
        return (state.clone(), Vec::new());
    };
    let mut next = state.clone();
    next.active_section = section.clone();
    let effects = vec![
        Effect::ScrollToSection {
            section: section.clone(),
        },
        Effect::HighlightNavLink {
            section: section.clone(),
        },
    ];
    (next, effects)
}

fn handle_scrolled(state: &AppState, event: &Event) -> (AppState, Vec<Effect>) {
    let Event::Scrolled { position, sections } = event else {
        return (state.clone(), Vec::new());
    };

    let mut next = state.clone();
    let mut effects = vec![
        Effect::SetNavbarCondensed {
            condensed: *position > NAVBAR_SCROLL_THRESHOLD,
        },
        Effect::SetBackToTopVisible {
            visible: *position > BACK_TO_TOP_THRESHOLD,
        },
    ];

    if let Some(active) = active_section(*position, sections) {
        if active != state.active_section {
            next.active_section = active.clone();
            effects.push(Effect::HighlightNavLink { section: active });
        }
    }

    (next, effects)
}

fn handle_form_submitted(state: &AppState, event: &Event) -> (AppState, Vec<Effect>) {
    let Event::FormSubmitted { accepted } = event else {
        return (state.clone(), Vec::new());
    };
    let notification = if *accepted {
        Notification::new(
            "Thank you for your message! I'll get back to you soon.",
            NotificationKind::Success,
        )
    } else {
        Notification::new(
            "Please correct the errors in the form",
            NotificationKind::Error,
        )
    };
    (state.clone(), vec![Effect::ShowNotification(notification)])
}

fn handle_page_loaded(state: &AppState, _event: &Event) -> (AppState, Vec<Effect>) {
    let mut next = state.clone();
    next.loaded = true;
    let effects = vec![
        Effect::ApplyDocumentTheme {
            theme: next.theme.as_str().to_string(),
        },
        Effect::SetToggleIcon {
            icon: next.theme.icon().to_string(),
        },
    ];
    (next, effects)
}

/// The section whose extent contains the probed scroll position. Probe and
/// section tops are both offset by 100px, matching the page's fixed header.
pub fn active_section(position: f64, sections: &[SectionBounds]) -> Option<String> {
    let probe = position + SCROLL_PROBE_OFFSET;
    sections
        .iter()
        .find(|s| {
            let top = s.top - SCROLL_PROBE_OFFSET;
            probe >= top && probe < top + s.height
        })
        .map(|s| s.id.clone())
}
