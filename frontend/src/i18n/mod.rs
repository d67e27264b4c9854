use std::collections::HashMap;
use leptos::*;

/// Translation data loaded from JSON files
type Translations = HashMap<String, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    De,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::De];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::De => "de",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::De => "Deutsch",
        }
    }

    /// Unknown codes fall back to English.
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "de" => Language::De,
            _ => Language::En,
        }
    }
}

/// I18n context for page chrome. Item texts are data and never translated.
#[derive(Clone, Copy)]
pub struct I18nContext {
    language: RwSignal<Language>,
    translations: Memo<Translations>,
}

impl I18nContext {
    pub fn new(language: Language) -> Self {
        let language = create_rw_signal(language);
        let translations = create_memo(move |_| load_translations(language.get()));
        Self {
            language,
            translations,
        }
    }

    /// Translate a key to the current language.
    /// Returns the key itself if translation is not found
    pub fn t(&self, key: &str) -> String {
        self.translations
            .with(|t| t.get(key).cloned())
            .unwrap_or_else(|| key.to_string())
    }

    pub fn set_language(&self, language: Language) {
        log::debug!("switching language to {}", language.code());
        self.language.set(language);
    }

    pub fn language(&self) -> Language {
        self.language.get()
    }
}

/// Load translations for a language from embedded JSON
fn load_translations(language: Language) -> Translations {
    let json = match language {
        Language::De => include_str!("../translations/de.json"),
        Language::En => include_str!("../translations/en.json"),
    };

    serde_json::from_str(json).unwrap_or_else(|e| {
        log::error!("invalid {} translations: {}", language.code(), e);
        Translations::default()
    })
}

pub fn provide_i18n(language: Language) {
    provide_context(I18nContext::new(language));
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_translations_en() {
        let translations = load_translations(Language::En);
        assert_eq!(translations.get("page.title").unwrap(), "Accordions Example");
        assert_eq!(translations.get("section.basic").unwrap(), "Basic Accordion");
    }

    #[test]
    fn test_load_translations_de() {
        let translations = load_translations(Language::De);
        assert_eq!(translations.get("section.nested").unwrap(), "Verschachteltes Akkordeon");
    }

    #[test]
    fn test_translation_keys_match() {
        let mut en: Vec<_> = load_translations(Language::En).into_keys().collect();
        let mut de: Vec<_> = load_translations(Language::De).into_keys().collect();
        en.sort();
        de.sort();
        assert_eq!(en, de);
    }

    #[test]
    fn test_language_from_code_fallback() {
        assert_eq!(Language::from_code("DE"), Language::De);
        assert_eq!(Language::from_code("en"), Language::En);
        assert_eq!(Language::from_code("fr"), Language::En);
    }

    #[test]
    fn test_missing_key_returns_key() {
        let runtime = create_runtime();
        let i18n = I18nContext::new(Language::En);
        assert_eq!(i18n.t("no.such.key"), "no.such.key");
        assert_eq!(i18n.t("section.multi"), "Multi Accordion");

        i18n.set_language(Language::De);
        assert_eq!(i18n.t("section.multi"), "Mehrfach-Akkordeon");
        runtime.dispose();
    }
}
