// Project lints
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(unsafe_code)]

use std::fmt::Display;
use std::process;
use tabbar::config::Config;
use tabbar::{logging, render};

fn main() {
    let config = Config::from_file()
        .unwrap_or_else(|err| fail("Config", &err, err.additional_info()));

    config.language.apply();

    logging::setup(&config)
        .unwrap_or_else(|err| fail("Logger", &err, err.additional_info()));

    log::info!("Config loaded: {:#?}", config);

    for line in render::lines(&config) {
        println!("{line}");
    }

    log::info!("Tab bar printed, default tab: {}", config.default_tab);
}

/// Stops before anything is printed to stdout; the logger may not exist yet.
fn fail(stage: &str, err: &dyn Display, additional_info: Option<String>) -> ! {
    match additional_info {
        Some(info) => eprintln!("{stage} initialization failed: {err} ({info})"),
        None => eprintln!("{stage} initialization failed: {err}"),
    }
    process::exit(1);
}
