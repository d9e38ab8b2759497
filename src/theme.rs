//! Light/dark preference.
//!
//! The preference lives in storage under [`STORAGE_KEY`] as the literal string
//! `light` or `dark`. Anything else, including a missing or unreadable value,
//! means dark. On the page the preference is the [`LIGHT_CLASS`] flag on `<body>`.

use kuchiki::NodeRef;

use crate::dom;
use crate::page::{Action, EventKind, Feature, Page};
use crate::storage::Storage;

pub const STORAGE_KEY: &str = "dexterity-theme";
pub const LIGHT_CLASS: &str = "light-mode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

type Listener = Box<dyn Fn(Theme)>;

/// Injectable preference store with change subscriptions.
pub struct ThemeStore {
    storage: Box<dyn Storage>,
    listeners: Vec<Listener>,
}

impl ThemeStore {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            storage,
            listeners: Vec::new(),
        }
    }

    pub fn get_preference(&self) -> Theme {
        match self.storage.get_item(STORAGE_KEY) {
            Ok(value) => Theme::from_stored(value.as_deref()),
            Err(err) => {
                tracing::debug!(error = %err, "theme storage unreadable; using dark");
                Theme::Dark
            }
        }
    }

    /// Persists `theme` and notifies subscribers. A storage failure only costs
    /// persistence; subscribers still see the change.
    pub fn set_preference(&mut self, theme: Theme) {
        if let Err(err) = self.storage.set_item(STORAGE_KEY, theme.as_str()) {
            tracing::warn!(error = %err, theme = theme.as_str(), "theme not persisted");
        }
        for listener in &self.listeners {
            listener(theme);
        }
    }

    pub fn subscribe(&mut self, listener: impl Fn(Theme) + 'static) {
        self.listeners.push(Box::new(listener));
    }
}

/// Theme currently shown by `document`.
pub fn current(document: &NodeRef) -> Theme {
    match dom::body(document) {
        Some(body) if dom::has_class(&body, LIGHT_CLASS) => Theme::Light,
        _ => Theme::Dark,
    }
}

pub fn apply(document: &NodeRef, theme: Theme) {
    if let Some(body) = dom::body(document) {
        dom::toggle_class(&body, LIGHT_CLASS, Some(theme == Theme::Light));
    }
}

fn update_toggles(document: &NodeRef) {
    let is_light = current(document) == Theme::Light;
    for toggle in dom::select_all(document, "[data-theme-toggle]") {
        dom::set_attr(&toggle, "aria-pressed", is_light.to_string());
        dom::set_text(
            &toggle,
            if is_light {
                "🌙 Dark mode"
            } else {
                "☀️ Light mode"
            },
        );
    }
}

impl Page {
    /// Writes the stored preference onto the page before anything else renders.
    pub fn apply_theme_preference(&mut self) {
        let theme = self.theme.get_preference();
        apply(&self.document, theme);
    }

    pub fn theme_preference(&self) -> Theme {
        self.theme.get_preference()
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let next = current(&self.document).flipped();
        apply(&self.document, next);
        self.theme.set_preference(next);
        update_toggles(&self.document);
        tracing::debug!(theme = next.as_str(), "theme toggled");
        next
    }
}

pub(crate) fn init(page: &mut Page) -> Option<Feature> {
    let toggles = dom::select_all(&page.document, "[data-theme-toggle]");
    if toggles.is_empty() {
        return None;
    }
    update_toggles(&page.document);
    for toggle in toggles {
        page.bind(&toggle, EventKind::Click, Action::ToggleTheme);
    }
    Some(Feature::ThemeToggle)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::storage::{MemoryStorage, UnavailableStorage};

    #[test]
    fn unknown_values_mean_dark() {
        assert_eq!(Theme::from_stored(None), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
    }

    #[test]
    fn store_round_trips_and_notifies() {
        let mut store = ThemeStore::new(Box::new(MemoryStorage::default()));
        let seen = Rc::new(Cell::new(None));
        let sink = seen.clone();
        store.subscribe(move |t| sink.set(Some(t)));

        for theme in [Theme::Light, Theme::Dark, Theme::Light] {
            store.set_preference(theme);
            assert_eq!(store.get_preference(), theme);
            assert_eq!(seen.get(), Some(theme));
        }
    }

    #[test]
    fn unavailable_storage_degrades_to_dark() {
        let mut store = ThemeStore::new(Box::new(UnavailableStorage));
        assert_eq!(store.get_preference(), Theme::Dark);
        store.set_preference(Theme::Light);
        assert_eq!(store.get_preference(), Theme::Dark);
    }
}
