use chrono::{DateTime, Datelike, Local, Timelike};
use log::Record;
use std::fmt::Arguments;

pub use error::LogError;

pub const DEFAULT_FORMAT: &str = "[$Y-$m-$D $H:$M $LEVEL] $MESSAGE";

/// Log file name of the form `TITLE_YYYY-MM-DD.log`.
pub fn generate_file_name(title: &str) -> String {
    file_name_for(title, &Local::now())
}

fn file_name_for(title: &str, now: &DateTime<Local>) -> String {
    let date = format!(
        "{year:04}-{month:02}-{day:02}",
        year = now.year(),
        month = now.month(),
        day = now.day(),
    );

    let title_formatted = title.trim().replace(" ", "-");
    format!("{title_formatted}_{date}.log")
}

/// Expands the placeholders of a user-defined log line format.
///
/// Supported: `$Y`, `$m`, `$D`, `$H`, `$M`, `$S`, `$LEVEL`, `$TARGET`, `$MESSAGE`.
/// Unknown `$` sequences are kept as is.
pub fn parse_format(format: &str, message: &Arguments, record: &Record) -> String {
    expand(format, &Local::now(), message, record)
}

// Longest names first, so `$MESSAGE` is not read as `$M`.
const PLACEHOLDERS: [&str; 9] =
    ["MESSAGE", "TARGET", "LEVEL", "Y", "m", "D", "H", "M", "S"];

fn expand(
    format: &str, time: &DateTime<Local>, message: &Arguments, record: &Record,
) -> String {
    let format = format.trim();
    let mut log = String::with_capacity(format.len());

    let mut rest = format;
    while let Some(index) = rest.find('$') {
        log.push_str(&rest[..index]);
        let tail = &rest[index + 1..];

        let placeholder = PLACEHOLDERS.iter().find(|name| tail.starts_with(*name));
        match placeholder {
            Some(name) => {
                let value = match *name {
                    "Y" => format!("{:0>4}", time.year()),
                    "m" => format!("{:0>2}", time.month()),
                    "D" => format!("{:0>2}", time.day()),
                    "H" => format!("{:0>2}", time.hour()),
                    "M" => format!("{:0>2}", time.minute()),
                    "S" => format!("{:0>2}", time.second()),
                    "LEVEL" => record.level().as_str().to_string(),
                    "TARGET" => record.target().to_string(),
                    _ => message.to_string(),
                };
                log.push_str(&value);
                rest = &tail[name.len()..];
            },
            None => {
                log.push('$');
                rest = tail;
            },
        }
    }
    log.push_str(rest);

    log
}

pub mod error;
