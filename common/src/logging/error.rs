use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Cannot open log file.")]
    LogFile {
        file_name: String,
        source: std::io::Error,
    },

    #[error("Logger is already initialized.")]
    AlreadyInitialized(#[from] log::SetLoggerError),
}

impl LogError {
    pub fn additional_info(&self) -> Option<String> {
        match self {
            LogError::LogFile { file_name, source } => {
                Some(format!("{file_name}: {source}"))
            },
            LogError::AlreadyInitialized(err) => Some(err.to_string()),
        }
    }
}
