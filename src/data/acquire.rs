use std::path::{Path, PathBuf};

use crate::errors::{ScopeError, ScopeResult};

/// A file's bytes plus where they came from. How the bytes were obtained
/// (dialog, fixed path) is irrelevant downstream; the path is kept so the
/// selection can be cached across sessions.
#[derive(Debug, Clone)]
pub struct AcquiredFile {
    pub name: String,
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

/// Capability seam for obtaining a CSV source.
///
/// `Ok(None)` means the user backed out (e.g. cancelled the picker) — not an
/// error, nothing changes. The pipeline below this trait is identical for
/// every implementation.
pub trait FileAcquirer {
    fn acquire(&self, prompt: &str) -> ScopeResult<Option<AcquiredFile>>;
}

/// Native OS file-picker dialog.
#[derive(Debug, Default)]
pub struct DialogAcquirer;

impl FileAcquirer for DialogAcquirer {
    fn acquire(&self, prompt: &str) -> ScopeResult<Option<AcquiredFile>> {
        let Some(path) = rfd::FileDialog::new()
            .set_title(prompt)
            .add_filter("csv", &["csv"])
            .pick_file()
        else {
            return Ok(None);
        };
        read_path(&path).map(Some)
    }
}

/// Fixed local path, used for CLI preloading and tests.
#[derive(Debug, Clone)]
pub struct PathAcquirer {
    pub path: PathBuf,
}

impl PathAcquirer {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl FileAcquirer for PathAcquirer {
    fn acquire(&self, _prompt: &str) -> ScopeResult<Option<AcquiredFile>> {
        read_path(&self.path).map(Some)
    }
}

fn read_path(path: &Path) -> ScopeResult<AcquiredFile> {
    let bytes = std::fs::read(path)
        .map_err(|e| ScopeError::Parse(format!("cannot read {}: {e}", path.display())))?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    Ok(AcquiredFile {
        name,
        path: path.to_path_buf(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_acquirer_reads_bytes_and_name() {
        let dir = std::env::temp_dir();
        let path = dir.join("reaction_scope_acquire_test.csv");
        std::fs::write(&path, b"Time,X\n0,1\n").unwrap();

        let acquirer = PathAcquirer::new(&path);
        let file = acquirer.acquire("unused").unwrap().unwrap();
        assert_eq!(file.name, "reaction_scope_acquire_test.csv");
        assert_eq!(file.bytes, b"Time,X\n0,1\n");

        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_path_acquirer_missing_file_is_parse_error() {
        let acquirer = PathAcquirer::new("/definitely/not/a/real/file.csv");
        assert!(matches!(
            acquirer.acquire("unused"),
            Err(ScopeError::Parse(_))
        ));
    }
}
