use strum_macros::{Display, EnumIter, EnumString};

/// Interface languages. `Display` gives the rust-i18n locale name.
#[derive(
    Default, Copy, Clone, Display, EnumIter, EnumString, PartialEq, Eq, Hash, Debug,
)]
#[strum(ascii_case_insensitive)]
pub enum Language {
    #[default]
    English,
    Ukrainian,
}

impl Language {
    pub const fn locale(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Ukrainian => "Ukrainian",
        }
    }

    /// Name of the language in the current locale.
    pub fn localize(&self) -> String {
        match self {
            Language::English => t!("Language.English").to_string(),
            Language::Ukrainian => t!("Language.Ukrainian").to_string(),
        }
    }

    /// Makes this language the process-wide locale for label resolution.
    pub fn apply(&self) {
        rust_i18n::set_locale(self.locale());
        log::debug!("Locale set to {}", self.locale());
    }
}
