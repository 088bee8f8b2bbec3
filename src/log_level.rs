use std::error::Error;
use std::fmt::{Display, Error as FmtError, Formatter};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// The severity of a log event. Variants are ordered from the least to the most severe.
pub enum LogLevel {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
}

impl LogLevel {
    /// The name written into log lines, e.g. `Information`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "Trace",
            LogLevel::Debug => "Debug",
            LogLevel::Information => "Information",
            LogLevel::Warning => "Warning",
            LogLevel::Error => "Error",
            LogLevel::Critical => "Critical",
        }
    }

    /// The most verbose `log::LevelFilter` that can still pass this minimum level.
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Information => log::LevelFilter::Info,
            LogLevel::Warning => log::LevelFilter::Warn,
            LogLevel::Error | LogLevel::Critical => log::LevelFilter::Error,
        }
    }
}

impl Default for LogLevel {
    #[inline]
    fn default() -> Self {
        LogLevel::Information
    }
}

impl Display for LogLevel {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        f.write_str(self.as_str())
    }
}

impl From<log::Level> for LogLevel {
    #[inline]
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warning,
            log::Level::Info => LogLevel::Information,
            log::Level::Debug => LogLevel::Debug,
            log::Level::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The name could not be recognized as a log level. Wrap the rejected name.
pub struct ParseLogLevelError(pub String);

impl Display for ParseLogLevelError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        f.write_fmt(format_args!("`{}` is not a valid log level.", self.0))
    }
}

impl Error for ParseLogLevelError {}

impl FromStr for LogLevel {
    type Err = ParseLogLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let level = match s.trim().to_ascii_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "information" | "info" => LogLevel::Information,
            "warning" | "warn" => LogLevel::Warning,
            "error" => LogLevel::Error,
            "critical" => LogLevel::Critical,
            _ => return Err(ParseLogLevelError(s.to_string())),
        };

        Ok(level)
    }
}
