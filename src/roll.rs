//! Naming of roll-over files.
//!
//! A base file `app.log` rolls over to `app_0.log`, `app_1.log`, and so on, in the same folder.
//! No counter is stored anywhere. The next name is found by probing the disk, so numbering
//! continues from the first gap after a restart and existing files are never overwritten.

use std::io;
use std::path::{Path, PathBuf};

use regex::Regex;

#[inline]
fn rolled_file_name(base_name: &str, index: u64, extension: &str) -> String {
    format!("{}_{}{}", base_name, index, extension)
}

/// Find the lowest-indexed `<base_name>_<N><extension>` in `directory` which does not exist yet.
///
/// Nothing is created. The cost grows with the number of existing roll-over files.
pub fn next_available_path<D: AsRef<Path>>(
    directory: D,
    base_name: &str,
    extension: &str,
) -> PathBuf {
    let directory = directory.as_ref();

    let mut index = 0;

    loop {
        let path = directory.join(rolled_file_name(base_name, index, extension));

        if !path.exists() {
            return path;
        }

        index += 1;
    }
}

/// List the existing roll-over files of `<base_name><extension>` in `directory`, ordered by index.
pub fn rolled_files<D: AsRef<Path>>(
    directory: D,
    base_name: &str,
    extension: &str,
) -> io::Result<Vec<PathBuf>> {
    let re = Regex::new(&format!(
        "^{}_([0-9]+){}$",
        regex::escape(base_name),
        regex::escape(extension)
    ))
    .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err.to_string()))?;

    let mut indexed_files = Vec::new();

    for entry in directory.as_ref().read_dir()?.filter_map(|entry| entry.ok()) {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let index = match path.file_name().and_then(|name| name.to_str()) {
            Some(name) => {
                match re.captures(name).and_then(|c| c.get(1)) {
                    Some(m) => {
                        match m.as_str().parse::<u64>() {
                            Ok(index) => index,
                            Err(_) => continue,
                        }
                    }
                    None => continue,
                }
            }
            None => continue,
        };

        indexed_files.push((index, path));
    }

    indexed_files.sort_unstable_by_key(|(index, _)| *index);

    Ok(indexed_files.into_iter().map(|(_, path)| path).collect())
}
