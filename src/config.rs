use std::error::Error;
use std::fmt::{Display, Error as FmtError, Formatter};
use std::io;
use std::path::{Path, PathBuf};

use path_absolutize::*;

use crate::LogLevel;

/// The default threshold of a log file, 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

#[derive(Debug)]
pub enum SinkConfigError {
    /// A log file path needs to end with a UTF-8 file name. Wrap the absolutized log file.
    NoFileName(PathBuf),
    /// A log file cannot be a directory. Wrap the absolutized log file.
    FileIsDirectory(PathBuf),
    /// std::io::Error.
    IOError(io::Error),
}

impl Display for SinkConfigError {
    #[inline]
    fn fmt(&self, f: &mut Formatter) -> Result<(), FmtError> {
        match self {
            SinkConfigError::NoFileName(path) => {
                f.write_fmt(format_args!(
                    "A log file path needs to end with a UTF-8 file name. The path is `{}`.",
                    path.to_string_lossy()
                ))
            }
            SinkConfigError::FileIsDirectory(path) => {
                f.write_fmt(format_args!(
                    "A log file cannot be a directory. The path of that file is `{}`.",
                    path.to_string_lossy()
                ))
            }
            SinkConfigError::IOError(err) => Display::fmt(err, f),
        }
    }
}

impl Error for SinkConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SinkConfigError::IOError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for SinkConfigError {
    #[inline]
    fn from(err: io::Error) -> Self {
        SinkConfigError::IOError(err)
    }
}

#[derive(Debug, Clone)]
/// To build a SinkConfig instance.
pub struct SinkConfigBuilder<P: AsRef<Path>> {
    file_path: P,
    max_file_size: u64,
    minimum_level: LogLevel,
}

impl<P: AsRef<Path>> SinkConfigBuilder<P> {
    /// Create a new SinkConfigBuilder.
    pub fn new(file_path: P) -> SinkConfigBuilder<P> {
        SinkConfigBuilder {
            file_path,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            minimum_level: LogLevel::default(),
        }
    }

    pub fn file_path(&self) -> &P {
        &self.file_path
    }

    /// The size in bytes at which the next write goes to a new file.
    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub fn minimum_level(&self) -> LogLevel {
        self.minimum_level
    }

    /// The size in bytes at which the next write goes to a new file. With `0`, every write after
    /// the first one goes to a new file.
    pub fn set_max_file_size(&mut self, max_file_size: u64) -> &mut Self {
        self.max_file_size = max_file_size;
        self
    }

    pub fn set_minimum_level(&mut self, minimum_level: LogLevel) -> &mut Self {
        self.minimum_level = minimum_level;
        self
    }

    /// Validate the settings and build a new SinkConfig. Nothing is created on disk.
    pub fn build(self) -> Result<SinkConfig, SinkConfigError> {
        let file_path = self.file_path.as_ref().absolutize()?.into_owned();

        if file_path.is_dir() {
            return Err(SinkConfigError::FileIsDirectory(file_path));
        }

        let file_name = match file_path.file_name().and_then(|name| name.to_str()) {
            Some(name) => name.to_string(),
            None => return Err(SinkConfigError::NoFileName(file_path)),
        };

        let directory = match file_path.parent() {
            Some(parent) => parent.to_path_buf(),
            None => return Err(SinkConfigError::NoFileName(file_path)),
        };

        let file_name_point_index = match file_name.rfind('.') {
            Some(index) => index,
            None => file_name.len(),
        };

        Ok(SinkConfig {
            file_path,
            directory,
            file_name,
            file_name_point_index,
            max_file_size: self.max_file_size,
            minimum_level: self.minimum_level,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Immutable settings shared by every sink a provider creates.
pub struct SinkConfig {
    file_path: PathBuf,
    directory: PathBuf,
    file_name: String,
    file_name_point_index: usize,
    max_file_size: u64,
    minimum_level: LogLevel,
}

impl SinkConfig {
    /// Create a new SinkConfigBuilder.
    pub fn builder<P: AsRef<Path>>(file_path: P) -> SinkConfigBuilder<P> {
        SinkConfigBuilder::new(file_path)
    }

    /// The absolutized base log file. It is always the first file written to.
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The file name without its extension, e.g. `app` for `app.log`.
    pub fn base_name(&self) -> &str {
        &self.file_name[..self.file_name_point_index]
    }

    /// The extension including its leading dot, e.g. `.log`. Empty if there is none.
    pub fn extension(&self) -> &str {
        &self.file_name[self.file_name_point_index..]
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    pub fn minimum_level(&self) -> LogLevel {
        self.minimum_level
    }
}
