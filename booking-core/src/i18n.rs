use serde::{Deserialize, Serialize};

/// Browser storage key holding the visitor's language preference.
pub const STORAGE_KEY: &str = "preferred-language";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim() {
            "en" => Some(Language::En),
            "de" => Some(Language::De),
            _ => None,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Language::En => Language::De,
            Language::De => Language::En,
        }
    }

    /// Label shown on the toggle button: the language you would switch *to*.
    pub fn toggle_label(self) -> &'static str {
        match self {
            Language::En => "DE",
            Language::De => "EN",
        }
    }

    /// Resolves a stored preference, falling back to English for anything
    /// missing or unrecognised.
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(Language::from_code).unwrap_or_default()
    }
}

/// Parallel English/German text for one piece of copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Localized {
    pub en: String,
    pub de: String,
}

impl Localized {
    pub fn new(en: impl Into<String>, de: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            de: de.into(),
        }
    }

    pub fn pick(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::De => &self.de,
        }
    }
}

/// A piece of visible text, optionally tagged with its translations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextNode {
    pub text: String,
    pub variants: Option<Localized>,
}

impl TextNode {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variants: None,
        }
    }

    pub fn localized(variants: Localized) -> Self {
        Self {
            text: variants.en.clone(),
            variants: Some(variants),
        }
    }
}

/// Re-localizes text injected after the page was first translated.
pub trait Translator {
    fn language(&self) -> Language;

    fn localize(&self, container: &mut [TextNode]) {
        let language = self.language();
        for node in container.iter_mut() {
            if let Some(variants) = &node.variants {
                node.text = variants.pick(language).to_string();
            }
        }
    }
}

impl Translator for Language {
    fn language(&self) -> Language {
        *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_between_the_two_languages() {
        assert_eq!(Language::En.toggle(), Language::De);
        assert_eq!(Language::De.toggle().toggle(), Language::De);
    }

    #[test]
    fn stored_preference_falls_back_to_english() {
        assert_eq!(Language::from_stored(Some("de")), Language::De);
        assert_eq!(Language::from_stored(Some("fr")), Language::En);
        assert_eq!(Language::from_stored(None), Language::En);
    }

    #[test]
    fn localize_only_touches_tagged_nodes() {
        let mut nodes = vec![
            TextNode::localized(Localized::new("Date", "Datum")),
            TextNode::plain("ada@x.com"),
        ];

        Language::De.localize(&mut nodes);

        assert_eq!(nodes[0].text, "Datum");
        assert_eq!(nodes[1].text, "ada@x.com");
    }
}
