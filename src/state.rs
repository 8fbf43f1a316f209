/// Storage key for the persisted theme preference.
pub const THEME_KEY: &str = "theme";

/// Injected key-value persistence seam. The only key this crate writes is
/// [`THEME_KEY`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory store, used by tests and by the CLI.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: std::collections::HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon class shown on the toggle button for this theme.
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }
}

/// Explicit application state, threaded through the event handlers instead of
/// living on a mutable singleton.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub theme: Theme,
    pub active_section: String,
    pub loaded: bool,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            theme: Theme::default(),
            active_section: "home".to_string(),
            loaded: false,
        }
    }
}

impl AppState {
    /// Initial state, with the theme restored from the injected store.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let theme = store
            .get(THEME_KEY)
            .and_then(|v| Theme::from_str(&v))
            .unwrap_or_default();
        AppState {
            theme,
            ..AppState::default()
        }
    }

    /// Flip the theme and persist the new preference.
    pub fn toggle_theme(&mut self, store: &mut dyn KeyValueStore) -> Theme {
        self.theme = self.theme.toggled();
        store.set(THEME_KEY, self.theme.as_str());
        self.theme
    }
}
