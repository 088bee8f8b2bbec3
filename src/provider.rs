use std::io;
use std::sync::Arc;

use crate::{all_categories, CategoryFilter, LogLevel, RotatingFileSink, Sink, SinkConfig};

/// Anything that can produce a sink for a category.
pub trait SinkProvider: Send + Sync {
    type Sink: Sink;

    /// Events below this level are never written by the sinks of this provider.
    fn minimum_level(&self) -> LogLevel;

    /// Whether the sinks of `category` would log anything at all. Creates nothing.
    fn is_category_enabled(&self, category: &str) -> bool;

    /// Create a new, independent sink for `category`. Sinks are not pooled.
    fn create_sink(&self, category: &str) -> io::Result<Self::Sink>;
}

#[derive(Clone)]
/// Creates one `RotatingFileSink` per category, all sharing the same settings and category filter.
pub struct RotatingFileSinkProvider {
    config: Arc<SinkConfig>,
    filter: CategoryFilter,
}

impl RotatingFileSinkProvider {
    /// Create a provider whose sinks log every category.
    pub fn new(config: SinkConfig) -> RotatingFileSinkProvider {
        RotatingFileSinkProvider {
            config: Arc::new(config),
            filter: all_categories(),
        }
    }

    /// Create a provider whose sinks only log the categories `filter` accepts.
    pub fn with_filter<F>(config: SinkConfig, filter: F) -> RotatingFileSinkProvider
    where
        F: Fn(&str) -> bool + Send + Sync + 'static, {
        RotatingFileSinkProvider {
            config: Arc::new(config),
            filter: Arc::new(filter),
        }
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }
}

impl SinkProvider for RotatingFileSinkProvider {
    type Sink = RotatingFileSink;

    #[inline]
    fn minimum_level(&self) -> LogLevel {
        self.config.minimum_level()
    }

    #[inline]
    fn is_category_enabled(&self, category: &str) -> bool {
        (self.filter)(category)
    }

    #[inline]
    fn create_sink(&self, category: &str) -> io::Result<RotatingFileSink> {
        RotatingFileSink::new(self.config.clone(), self.filter.clone(), category)
    }
}
