//! Dictionary lookups for the two site languages.
//!
//! Each language ships as an embedded JSON document. Keys are dotted paths
//! (`form.errorEmail`, `mvpInfo.benefits.0`); object members are addressed by
//! name and array elements by index.

use once_cell::sync::Lazy;
use serde_json::{Map, Value};
use yew::prelude::*;

use crate::preferences::{Language, PreferencesContext};

static SPANISH: Lazy<Value> = Lazy::new(|| parse_dictionary(Language::Es, include_str!("../locales/es.json")));
static ENGLISH: Lazy<Value> = Lazy::new(|| parse_dictionary(Language::En, include_str!("../locales/en.json")));

fn parse_dictionary(language: Language, source: &str) -> Value {
    match serde_json::from_str(source) {
        Ok(value) => value,
        Err(e) => {
            log::error!("Failed to parse {} dictionary: {}", language.code(), e);
            Value::Object(Map::new())
        }
    }
}

pub fn dictionary(language: Language) -> &'static Value {
    match language {
        Language::Es => &*SPANISH,
        Language::En => &*ENGLISH,
    }
}

#[derive(Clone, Copy)]
pub struct Translator {
    language: Language,
    root: &'static Value,
}

impl PartialEq for Translator {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && std::ptr::eq(self.root, other.root)
    }
}

impl Translator {
    pub fn new(language: Language) -> Self {
        Self::with_dictionary(language, dictionary(language))
    }

    pub fn with_dictionary(language: Language, root: &'static Value) -> Self {
        Self { language, root }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    fn lookup(&self, key: &str) -> Option<&'static Value> {
        key.split('.').try_fold(self.root, |node, segment| match node {
            Value::Object(members) => members.get(segment),
            Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
            _ => None,
        })
    }

    /// Resolves `key` to a string, or returns the key itself when it is
    /// missing or does not point at a string.
    pub fn t(&self, key: &str) -> String {
        match self.lookup(key) {
            Some(Value::String(text)) => text.clone(),
            Some(_) => {
                log::warn!("Translation key is not a string: {}", key);
                key.to_string()
            }
            None => {
                log::warn!("Translation key not found: {}", key);
                key.to_string()
            }
        }
    }

    /// Resolves `key` to a list of strings; empty when the key is missing or
    /// does not point at a list.
    pub fn t_array(&self, key: &str) -> Vec<String> {
        match self.lookup(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string))
                .collect(),
            Some(_) => {
                log::warn!("Translation key is not a list: {}", key);
                Vec::new()
            }
            None => {
                log::warn!("Translation key not found: {}", key);
                Vec::new()
            }
        }
    }
}

/// Inline copy for content that lives next to its data rather than in the
/// dictionaries (reviews, portfolio entries).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Localized {
    pub es: &'static str,
    pub en: &'static str,
}

impl Localized {
    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::Es => self.es,
            Language::En => self.en,
        }
    }
}

/// Translator for the language currently held in the preferences context.
#[hook]
pub fn use_translator() -> Translator {
    let language = use_context::<PreferencesContext>()
        .map(|prefs| prefs.language())
        .unwrap_or_default();
    Translator::new(language)
}
