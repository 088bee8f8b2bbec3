use std::io::{self, Write};
use std::sync::Arc;

use chrono::prelude::*;

use crate::{all_categories, format_line, CategoryFilter, LogEvent, LogLevel, Sink, SinkProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which standard stream a `ConsoleSink` writes to.
pub enum Tee {
    /// To stdout.
    Stdout,
    /// To stderr.
    Stderr,
}

/// Writes the same lines as `RotatingFileSink`, but to stdout or stderr and without rotation.
pub struct ConsoleSink {
    tee: Tee,
    minimum_level: LogLevel,
    filter: CategoryFilter,
    category: String,
}

impl ConsoleSink {
    pub fn tee(&self) -> Tee {
        self.tee
    }
}

impl Sink for ConsoleSink {
    #[inline]
    fn category(&self) -> &str {
        &self.category
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.minimum_level && (self.filter)(self.category.as_str())
    }

    fn append(&self, event: &LogEvent) -> io::Result<()> {
        if !self.is_enabled(event.level) {
            return Ok(());
        }

        let line = format_line(Utc::now(), event.level, event.message);

        match self.tee {
            Tee::Stdout => io::stdout().lock().write_all(line.as_bytes()),
            Tee::Stderr => io::stderr().lock().write_all(line.as_bytes()),
        }
    }
}

#[derive(Clone)]
/// Creates one `ConsoleSink` per category.
pub struct ConsoleSinkProvider {
    tee: Tee,
    minimum_level: LogLevel,
    filter: CategoryFilter,
}

impl ConsoleSinkProvider {
    pub fn new(tee: Tee, minimum_level: LogLevel) -> ConsoleSinkProvider {
        ConsoleSinkProvider {
            tee,
            minimum_level,
            filter: all_categories(),
        }
    }

    pub fn set_filter<F>(&mut self, filter: F) -> &mut Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static, {
        self.filter = Arc::new(filter);
        self
    }
}

impl SinkProvider for ConsoleSinkProvider {
    type Sink = ConsoleSink;

    #[inline]
    fn minimum_level(&self) -> LogLevel {
        self.minimum_level
    }

    #[inline]
    fn is_category_enabled(&self, category: &str) -> bool {
        (self.filter)(category)
    }

    fn create_sink(&self, category: &str) -> io::Result<ConsoleSink> {
        Ok(ConsoleSink {
            tee: self.tee,
            minimum_level: self.minimum_level,
            filter: self.filter.clone(),
            category: category.to_string(),
        })
    }
}
