use crate::language::Language;
use std::fmt;

/// Deferred lookup token for a translated label.
///
/// Holds only the localization key. The text is looked up in the locale
/// tables when `resolve` is called, so the locale can change in between.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct LocalizedLabel {
    key: &'static str,
}

impl LocalizedLabel {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }

    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Translates with the current process-wide locale.
    pub fn resolve(&self) -> String {
        t!(self.key).to_string()
    }

    pub fn resolve_in(&self, language: Language) -> String {
        t!(self.key, locale = language.locale()).to_string()
    }
}

impl fmt::Display for LocalizedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tab::Tab;
    use strum::IntoEnumIterator;

    #[test]
    fn test_english() {
        assert_eq!(Tab::Home.label().resolve_in(Language::English), "Home");
        assert_eq!(
            Tab::Statistics.label().resolve_in(Language::English),
            "Statistics"
        );
    }

    #[test]
    fn test_ukrainian() {
        assert_eq!(Tab::Home.label().resolve_in(Language::Ukrainian), "Головна");
        assert_eq!(
            Tab::Setting.label().resolve_in(Language::Ukrainian),
            "Налаштування"
        );
    }

    #[test]
    fn test_every_tab_is_translated() {
        for tab in Tab::iter() {
            let english = tab.label().resolve_in(Language::English);
            let ukrainian = tab.label().resolve_in(Language::Ukrainian);

            assert_ne!(english, tab.localization_key(), "{tab:?}: no English text");
            assert_ne!(ukrainian, english, "{tab:?}: no Ukrainian text");
        }
    }

    // The only test touching the process-wide locale.
    #[test]
    fn test_resolution_follows_applied_language() {
        let label = Tab::Home.label();

        Language::Ukrainian.apply();
        let ukrainian = label.resolve();
        assert_eq!(ukrainian, "Головна");
        assert_eq!(label.to_string(), "Головна");
        assert_eq!(Language::English.localize(), "Англійська");
        assert_eq!(Language::Ukrainian.localize(), "Українська");

        Language::English.apply();
        let english = label.resolve();
        assert_eq!(english, "Home");
        assert_eq!(label.to_string(), "Home");
        assert_eq!(Language::English.localize(), "English");
        assert_eq!(Language::Ukrainian.localize(), "Ukrainian");

        assert_ne!(ukrainian, english);
    }
}
