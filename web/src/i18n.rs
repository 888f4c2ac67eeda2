use booking_core::i18n::{Language, Localized, TextNode, Translator};
use leptos::prelude::*;

/// Active site language. Restored from browser storage once the page has
/// hydrated and written back on every toggle.
#[derive(Clone, Copy)]
pub struct I18n {
    language: RwSignal<Language>,
}

impl I18n {
    pub fn new() -> Self {
        Self {
            language: RwSignal::new(Language::default()),
        }
    }

    /// Tracked read, for use inside views.
    pub fn current(&self) -> Language {
        self.language.get()
    }

    pub fn toggle(&self) {
        let next = self.language.get_untracked().toggle();
        self.language.set(next);
        store_preference(next);
    }

    pub fn text(&self, text: &Localized) -> String {
        text.pick(self.current()).to_string()
    }

    pub fn node(&self, node: &TextNode) -> String {
        match &node.variants {
            Some(variants) => self.text(variants),
            None => node.text.clone(),
        }
    }

    /// Loads the stored preference and keeps `<html lang>` in sync. Effects
    /// only run in the browser, so server markup is always English.
    pub fn install(&self) {
        let language = self.language;
        Effect::new(move |_| {
            if let Some(saved) = load_preference() {
                language.set(saved);
            }
        });
        Effect::new(move |_| {
            apply_document_language(language.get());
        });
    }
}

impl Default for I18n {
    fn default() -> Self {
        Self::new()
    }
}

impl Translator for I18n {
    fn language(&self) -> Language {
        self.language.get_untracked()
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(feature = "hydrate")]
fn load_preference() -> Option<Language> {
    use booking_core::i18n::STORAGE_KEY;

    let stored = local_storage()?.get_item(STORAGE_KEY).ok()?;
    Some(Language::from_stored(stored.as_deref()))
}

#[cfg(not(feature = "hydrate"))]
fn load_preference() -> Option<Language> {
    None
}

#[cfg(feature = "hydrate")]
fn store_preference(language: Language) {
    use booking_core::i18n::STORAGE_KEY;

    let Some(storage) = local_storage() else {
        leptos::logging::warn!("localStorage unavailable, language preference not saved");
        return;
    };
    if storage.set_item(STORAGE_KEY, language.code()).is_err() {
        leptos::logging::warn!("Failed to save language preference");
    }
}

#[cfg(not(feature = "hydrate"))]
fn store_preference(_language: Language) {}

#[cfg(feature = "hydrate")]
fn apply_document_language(language: Language) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", language.code());
    }
    if let Some(body) = document.body() {
        let _ = body
            .class_list()
            .toggle_with_force("german", language == Language::De);
    }
}

#[cfg(not(feature = "hydrate"))]
fn apply_document_language(_language: Language) {}
