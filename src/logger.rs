//! Plugs a `SinkProvider` into the `log` facade. The record's target is used as the category.

use std::collections::HashMap;
use std::io;
use std::sync::{Arc, PoisonError, RwLock};

use log::{Metadata, Record, SetLoggerError};

use crate::{LogEvent, LogLevel, RotatingFileSinkProvider, Sink, SinkConfig, SinkProvider};

/// A `log::Log` implementation which asks its provider for one sink per target and keeps it.
pub struct FileLogger<P: SinkProvider> {
    provider: P,
    sinks: RwLock<HashMap<String, Arc<P::Sink>>>,
}

impl<P: SinkProvider> FileLogger<P> {
    pub fn new(provider: P) -> FileLogger<P> {
        FileLogger {
            provider,
            sinks: RwLock::new(HashMap::new()),
        }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Get the sink of `category`, creating it on first use.
    pub fn sink(&self, category: &str) -> io::Result<Arc<P::Sink>> {
        {
            let sinks = self.sinks.read().unwrap_or_else(PoisonError::into_inner);

            if let Some(sink) = sinks.get(category) {
                return Ok(sink.clone());
            }
        }

        let mut sinks = self.sinks.write().unwrap_or_else(PoisonError::into_inner);

        // another thread may have won the race for the write lock
        if let Some(sink) = sinks.get(category) {
            return Ok(sink.clone());
        }

        let sink = Arc::new(self.provider.create_sink(category)?);

        sinks.insert(category.to_string(), sink.clone());

        Ok(sink)
    }
}

impl<P: SinkProvider + 'static> FileLogger<P> {
    /// Register this logger as the global `log` logger and raise the global max level to the
    /// provider's minimum level.
    pub fn install(self) -> Result<(), SetLoggerError> {
        let max_level = self.provider.minimum_level().to_level_filter();

        log::set_boxed_logger(Box::new(self))?;

        log::set_max_level(max_level);

        Ok(())
    }
}

impl<P: SinkProvider> log::Log for FileLogger<P> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        let level = LogLevel::from(metadata.level());

        if level < self.provider.minimum_level() {
            return false;
        }

        self.provider.is_category_enabled(metadata.target())
    }

    fn log(&self, record: &Record) {
        let level = LogLevel::from(record.level());

        if level < self.provider.minimum_level() {
            return;
        }

        let sink = match self.sink(record.target()) {
            Ok(sink) => sink,
            Err(err) => {
                eprintln!("Cannot create the log sink of `{}`: {}", record.target(), err);
                return;
            }
        };

        let message = record.args().to_string();

        // the sink must not log its own failures
        if let Err(err) = sink.append(&LogEvent::new(level, record.target(), &message)) {
            eprintln!("Cannot write the log of `{}`: {}", record.target(), err);
        }
    }

    fn flush(&self) {}
}

/// Log every category to a rotating file through the `log` facade.
pub fn init(config: SinkConfig) -> Result<(), SetLoggerError> {
    FileLogger::new(RotatingFileSinkProvider::new(config)).install()
}
