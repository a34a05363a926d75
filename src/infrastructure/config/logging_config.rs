use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: tracing::Level,
    /// When set, events are also written without ANSI colors to this file.
    pub log_file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: tracing::Level::INFO,
            log_file: None,
        }
    }
}
