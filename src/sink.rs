use std::error::Error;
use std::fmt::{self, Debug, Formatter};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::prelude::*;

use crate::{roll, LogLevel, SinkConfig};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

const TIMESTAMP_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Decides whether a category is logged at all. Consulted after the level check.
pub type CategoryFilter = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A filter which enables every category.
pub fn all_categories() -> CategoryFilter {
    Arc::new(|_: &str| true)
}

#[derive(Debug, Clone, Copy)]
/// One log call. Only its rendered line outlives the call.
pub struct LogEvent<'a> {
    pub level: LogLevel,
    pub category: &'a str,
    /// The formatted message. A formatter is expected to have folded the error description in already.
    pub message: &'a str,
    pub error: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogEvent<'a> {
    #[inline]
    pub fn new(level: LogLevel, category: &'a str, message: &'a str) -> LogEvent<'a> {
        LogEvent {
            level,
            category,
            message,
            error: None,
        }
    }

    #[inline]
    pub fn with_error(mut self, error: &'a (dyn Error + 'static)) -> LogEvent<'a> {
        self.error = Some(error);
        self
    }
}

/// Anything that accepts level-gated, formatted log lines for one category.
pub trait Sink: Send + Sync {
    /// The category this sink was created for.
    fn category(&self) -> &str;

    /// Whether an event of `level` would be written. Has no side effects.
    fn is_enabled(&self, level: LogLevel) -> bool;

    /// Write the event if it is enabled. Errors are returned to the caller, never retried.
    fn append(&self, event: &LogEvent) -> io::Result<()>;
}

/// Render `[dd.MM.yyyy HH:mm:ss] [<level>] - <message>` followed by the line ending.
pub fn format_line(now: DateTime<Utc>, level: LogLevel, message: &str) -> String {
    format!("[{}] [{}] - {}{}", now.format(TIMESTAMP_FORMAT), level, message, LINE_ENDING)
}

#[derive(Debug)]
struct SinkState {
    current_file_path: PathBuf,
    current_file_size: u64,
    // the first write after construction always goes to the base file
    first_write: bool,
}

/// Appends log lines to the configured file and rolls over to `<base>_<N><ext>` once the
/// current file has reached the maximum size.
///
/// Every roll-over check, write and size update happens while holding one lock, so lines from
/// the same sink never interleave and appear in the order the lock was acquired.
pub struct RotatingFileSink {
    config: Arc<SinkConfig>,
    filter: CategoryFilter,
    category: String,
    state: Mutex<SinkState>,
}

impl Debug for RotatingFileSink {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("RotatingFileSink")
            .field("config", &self.config)
            .field("category", &self.category)
            .field("state", &self.state)
            .finish()
    }
}

impl RotatingFileSink {
    /// Create a sink for `category`. The log folder is created if it is missing, and the size of
    /// an existing base file is picked up, so appending resumes where a previous process stopped.
    pub fn new<S: Into<String>>(
        config: Arc<SinkConfig>,
        filter: CategoryFilter,
        category: S,
    ) -> io::Result<RotatingFileSink> {
        fs::create_dir_all(config.directory())?;

        let current_file_path = config.file_path().to_path_buf();

        let current_file_size = match fs::metadata(&current_file_path) {
            Ok(metadata) => metadata.len(),
            Err(ref err) if err.kind() == io::ErrorKind::NotFound => 0,
            Err(err) => return Err(err),
        };

        Ok(RotatingFileSink {
            config,
            filter,
            category: category.into(),
            state: Mutex::new(SinkState {
                current_file_path,
                current_file_size,
                first_write: true,
            }),
        })
    }

    pub fn config(&self) -> &SinkConfig {
        &self.config
    }

    /// The file the next write goes to, unless it triggers a roll-over.
    pub fn current_file_path(&self) -> PathBuf {
        self.lock_state().current_file_path.clone()
    }

    /// Bytes in the current file.
    pub fn current_file_size(&self) -> u64 {
        self.lock_state().current_file_size
    }

    /// The roll-over files which currently exist next to the base file, ordered by index.
    pub fn rolled_files(&self) -> io::Result<Vec<PathBuf>> {
        roll::rolled_files(
            self.config.directory(),
            self.config.base_name(),
            self.config.extension(),
        )
    }

    /// Append an already rendered line, rolling over first if the current file is full.
    ///
    /// The first write of a sink is not checked, so a base file which was already oversized when
    /// the sink was created receives one more line before the next write rolls over.
    pub fn write_line<S: AsRef<str>>(&self, line: S) -> io::Result<()> {
        let buf = line.as_ref().as_bytes();

        let mut state = self.lock_state();

        if state.first_write {
            state.first_write = false;
        } else if state.current_file_size >= self.config.max_file_size() {
            state.current_file_path = roll::next_available_path(
                self.config.directory(),
                self.config.base_name(),
                self.config.extension(),
            );
            state.current_file_size = 0;
        }

        let result =
            open_for_append(&state.current_file_path).and_then(|mut file| file.write_all(buf));

        match result {
            Ok(()) => {
                state.current_file_size += buf.len() as u64;

                Ok(())
            }
            Err(err) => {
                // a partial write may have landed
                let on_disk = fs::metadata(&state.current_file_path)
                    .ok()
                    .filter(|metadata| metadata.is_file())
                    .map(|metadata| metadata.len());

                if let Some(size) = on_disk {
                    state.current_file_size = size;
                }

                Err(err)
            }
        }
    }

    #[inline]
    fn lock_state(&self) -> MutexGuard<'_, SinkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Sink for RotatingFileSink {
    #[inline]
    fn category(&self) -> &str {
        &self.category
    }

    fn is_enabled(&self, level: LogLevel) -> bool {
        if level < self.config.minimum_level() {
            return false;
        }

        (self.filter)(self.category.as_str())
    }

    fn append(&self, event: &LogEvent) -> io::Result<()> {
        if !self.is_enabled(event.level) {
            return Ok(());
        }

        self.write_line(format_line(Utc::now(), event.level, event.message))
    }
}

fn open_for_append(path: &Path) -> io::Result<File> {
    let mut options = OpenOptions::new();

    options.create(true).append(true);

    #[cfg(windows)]
    {
        use std::os::windows::fs::OpenOptionsExt;

        // no sharing while the line is written
        options.share_mode(0);
    }

    options.open(path)
}
