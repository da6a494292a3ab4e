// Library lints
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unsafe_code)]

#[macro_use]
extern crate rust_i18n;

// Defining folder with locales. Path: crate-root/locales
rust_i18n::i18n!("locales", fallback = "English");

pub mod config;
pub mod label;
pub mod language;
pub mod logging;
pub mod render;
pub mod tab;

pub use label::LocalizedLabel;
pub use language::Language;
pub use tab::{Tab, TabMetadata};
