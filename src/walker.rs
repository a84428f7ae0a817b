//! Recursive discovery of language files.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::parser::LoadError;

/// Lists every regular file below `root`, at any depth.
///
/// Entries are sorted by file name within each directory so the result is
/// stable across runs. The first directory that cannot be read fails the
/// whole listing; nothing gathered before it is returned.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>, LoadError> {
    // The root itself must be a listable directory, not a file.
    if let Err(source) = std::fs::read_dir(root) {
        return Err(directory_read_error(root.to_path_buf(), source));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(root).to_path_buf();
            directory_read_error(path, io::Error::from(err))
        })?;

        if entry.file_type().is_file() {
            trace!(path = %entry.path().display(), "found language file");
            files.push(entry.into_path());
        }
    }

    Ok(files)
}

fn directory_read_error(path: PathBuf, source: io::Error) -> LoadError {
    warn!(path = %path.display(), error = %source, "failed to read language directory");
    LoadError::DirectoryRead { path, source }
}
