//! Plain-text listing of the tab bar for the `tabbar` CLI.
//!
//! A demo consumer of the registry for terminal output. Drawing the actual
//! tab bar belongs to the application's view layer, not here.

use crate::config::Config;
use crate::language::Language;
use crate::logging::localize_log_level;
use crate::tab::Tab;
use strum::IntoEnumIterator;

/// Header line, then one line per tab in display order.
pub fn lines(config: &Config) -> Vec<String> {
    let mut lines = Vec::with_capacity(Tab::iter().len() + 1);
    lines.push(header(config));
    lines.extend(Tab::iter().map(|tab| line(tab, config)));
    lines
}

fn header(config: &Config) -> String {
    t!(
        "Render.Header",
        locale = config.language.locale(),
        level = localize_log_level(&config.log_level, config.language)
    )
    .to_string()
}

fn line(tab: Tab, config: &Config) -> String {
    let mut line = format!(
        "{position}. [{icon}] {label} ({key})",
        position = tab.position() + 1,
        icon = tab.icon(),
        label = tab.label().resolve_in(config.language),
        key = tab.localization_key(),
    );
    if tab == config.default_tab {
        line.push_str(&format!(" *{}*", default_marker(config.language)));
    }
    line
}

fn default_marker(language: Language) -> String {
    t!("Render.Default", locale = language.locale()).to_string()
}
