use crate::config::Config;
use crate::language::Language;
use common::logging::{self, LogError};
use log::LevelFilter;

pub const LOG_TITLE: &str = "TABBAR";

/// Routes the `log` facade into a dated file, using the level and line format
/// from `config`. Nothing is set up when the level is `Off`.
pub fn setup(config: &Config) -> Result<(), LogError> {
    if config.log_level == LevelFilter::Off {
        return Ok(());
    }

    let file_name = logging::generate_file_name(LOG_TITLE);
    let file = fern::log_file(&file_name)
        .map_err(|source| LogError::LogFile { file_name, source })?;

    let format = config.log_format.clone();
    fern::Dispatch::new()
        .level(config.log_level)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{}",
                logging::parse_format(&format, message, record)
            ))
        })
        .chain(file)
        .apply()?;

    Ok(())
}

pub fn localize_log_level(log_level: &LevelFilter, language: Language) -> String {
    let locale = language.locale();
    match log_level {
        LevelFilter::Off => t!("Logging.Level.Off", locale = locale).to_string(),
        LevelFilter::Error => t!("Logging.Level.Error", locale = locale).to_string(),
        LevelFilter::Warn => t!("Logging.Level.Warn", locale = locale).to_string(),
        LevelFilter::Info => t!("Logging.Level.Info", locale = locale).to_string(),
        LevelFilter::Debug => t!("Logging.Level.Debug", locale = locale).to_string(),
        LevelFilter::Trace => t!("Logging.Level.Trace", locale = locale).to_string(),
    }
}
