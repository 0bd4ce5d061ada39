//! Visitor preferences (language and theme).
//!
//! A single `Preferences` value is created at the root of the app and shared
//! through a Yew context. Every change goes through [`Preferences::apply`],
//! which also writes the new value to the backing [`PreferenceStore`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;
use web_sys::window;
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "es" => Some(Language::Es),
            "en" => Some(Language::En),
            _ => None,
        }
    }

    /// Picks a language from a browser locale such as `en-GB`. Only English
    /// is recognised, everything else falls back to Spanish.
    pub fn from_locale(locale: &str) -> Self {
        let primary = locale.split('-').next().unwrap_or_default();
        if primary.eq_ignore_ascii_case("en") {
            Language::En
        } else {
            Language::Es
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::Es => Language::En,
            Language::En => Language::Es,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Es
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn code(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Dark
    }
}

/// Key/value persistence for preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// Browser `localStorage`. Storage errors (private mode, quota) are ignored.
pub struct LocalStorageStore {
    storage: web_sys::Storage,
}

impl LocalStorageStore {
    pub fn open() -> Option<Self> {
        let storage = window()?.local_storage().ok().flatten()?;
        Some(Self { storage })
    }
}

impl PreferenceStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let _ = self.storage.set_item(key, value);
    }
}

/// In-memory store, used when `localStorage` is unavailable.
#[derive(Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
    }
}

pub enum PreferenceChange {
    SetLanguage(Language),
    ToggleLanguage,
    SetTheme(Theme),
    ToggleTheme,
}

#[derive(Clone)]
pub struct Preferences {
    language: Language,
    theme: Theme,
    store: Rc<dyn PreferenceStore>,
}

impl Preferences {
    /// Restores preferences from `store`. The language falls back to
    /// `browser_locale` and then to Spanish; the theme falls back to dark.
    pub fn load(store: Rc<dyn PreferenceStore>, browser_locale: Option<&str>) -> Self {
        let language = store
            .get(config::LANGUAGE_STORAGE_KEY)
            .and_then(|code| Language::from_code(&code))
            .unwrap_or_else(|| browser_locale.map(Language::from_locale).unwrap_or_default());
        let theme = store
            .get(config::THEME_STORAGE_KEY)
            .and_then(|code| Theme::from_code(&code))
            .unwrap_or_default();

        Self { language, theme, store }
    }

    /// Preferences backed by `localStorage` and `navigator.language`.
    pub fn from_browser() -> Self {
        let store: Rc<dyn PreferenceStore> = match LocalStorageStore::open() {
            Some(store) => Rc::new(store),
            None => {
                log::warn!("localStorage unavailable, preferences will not persist");
                Rc::new(MemoryStore::default())
            }
        };
        let locale = window().and_then(|w| w.navigator().language());
        Self::load(store, locale.as_deref())
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn apply(&mut self, change: PreferenceChange) {
        match change {
            PreferenceChange::SetLanguage(language) => self.set_language(language),
            PreferenceChange::ToggleLanguage => self.set_language(self.language.toggled()),
            PreferenceChange::SetTheme(theme) => self.set_theme(theme),
            PreferenceChange::ToggleTheme => self.set_theme(self.theme.toggled()),
        }
    }

    fn set_language(&mut self, language: Language) {
        self.language = language;
        self.store.set(config::LANGUAGE_STORAGE_KEY, language.code());
    }

    fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.store.set(config::THEME_STORAGE_KEY, theme.code());
    }
}

impl PartialEq for Preferences {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && self.theme == other.theme && Rc::ptr_eq(&self.store, &other.store)
    }
}

impl Reducible for Preferences {
    type Action = PreferenceChange;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        next.into()
    }
}

pub type PreferencesContext = UseReducerHandle<Preferences>;

/// Reflects the current preferences on the `<html>` element.
pub fn apply_to_document(language: Language, theme: Theme) {
    let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("lang", language.code());
    let classes = root.class_list();
    let _ = classes.remove_1(theme.toggled().code());
    let _ = classes.add_1(theme.code());
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn store() -> Rc<MemoryStore> {
        Rc::new(MemoryStore::default())
    }

    #[test]
    fn defaults_to_spanish_and_dark() {
        let prefs = Preferences::load(store(), None);
        assert_eq!(prefs.language(), Language::Es);
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn english_browser_locale_is_used_without_stored_choice() {
        let prefs = Preferences::load(store(), Some("en-US"));
        assert_eq!(prefs.language(), Language::En);

        let prefs = Preferences::load(store(), Some("fr-FR"));
        assert_eq!(prefs.language(), Language::Es);
    }

    #[test]
    fn stored_language_wins_over_browser_locale() {
        let backing = store();
        backing.set(config::LANGUAGE_STORAGE_KEY, "es");
        let prefs = Preferences::load(backing, Some("en"));
        assert_eq!(prefs.language(), Language::Es);
    }

    #[test]
    fn invalid_stored_values_are_ignored() {
        let backing = store();
        backing.set(config::LANGUAGE_STORAGE_KEY, "de");
        backing.set(config::THEME_STORAGE_KEY, "sepia");
        let prefs = Preferences::load(backing, Some("en-GB"));
        assert_eq!(prefs.language(), Language::En);
        assert_eq!(prefs.theme(), Theme::Dark);
    }

    #[test]
    fn language_choice_survives_reload() {
        let backing = store();
        let mut prefs = Preferences::load(backing.clone(), None);
        prefs.apply(PreferenceChange::SetLanguage(Language::En));

        let reloaded = Preferences::load(backing, None);
        assert_eq!(reloaded.language(), Language::En);
    }

    #[test]
    fn toggles_persist_every_change() {
        let backing = store();
        let mut prefs = Preferences::load(backing.clone(), None);

        prefs.apply(PreferenceChange::ToggleLanguage);
        prefs.apply(PreferenceChange::ToggleTheme);
        assert_eq!(backing.get(config::LANGUAGE_STORAGE_KEY).as_deref(), Some("en"));
        assert_eq!(backing.get(config::THEME_STORAGE_KEY).as_deref(), Some("light"));

        prefs.apply(PreferenceChange::ToggleLanguage);
        assert_eq!(prefs.language(), Language::Es);
        assert_eq!(backing.get(config::LANGUAGE_STORAGE_KEY).as_deref(), Some("es"));
    }

    #[test]
    fn reducer_returns_updated_copy() {
        let prefs = Rc::new(Preferences::load(store(), None));
        let next = prefs.clone().reduce(PreferenceChange::SetTheme(Theme::Light));
        assert_eq!(prefs.theme(), Theme::Dark);
        assert_eq!(next.theme(), Theme::Light);
    }

    #[test]
    fn language_codes_round_trip() {
        assert_eq!(Language::from_code(Language::En.code()), Some(Language::En));
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
    }
}
