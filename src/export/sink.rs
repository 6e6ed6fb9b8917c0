//! Output destinations
//!
//! The orchestrator hands finished documents to an `ExportSink`, the
//! equivalent of a browser download. `DirectorySink` writes them into a
//! directory on disk.

use crate::error::{Error, Result};
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Receives finished documents.
pub trait ExportSink {
    /// Store `contents` under `file_name`, returning where it ended up.
    fn save(&mut self, file_name: &str, contents: &str) -> Result<PathBuf>;
}

/// Writes documents into a directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    directory: PathBuf,
}

impl DirectorySink {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl ExportSink for DirectorySink {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<PathBuf> {
        if !self.directory.exists() {
            fs::create_dir_all(&self.directory).map_err(|e| Error::FileWrite {
                path: self.directory.clone(),
                source: e,
            })?;
        }

        // Like a browser download, never let the name escape the directory
        let file_name = file_name.replace(['/', '\\'], "_");
        let path = self.directory.join(&file_name);
        let partial_path = self.directory.join(format!(".{}.part", file_name));

        // Write beside the target first so a failed write never leaves a truncated document
        let written = fs::write(&partial_path, contents)
            .and_then(|()| fs::rename(&partial_path, &path));
        if let Err(e) = written {
            let _ = fs::remove_file(&partial_path);
            return Err(Error::FileWrite {
                path: path.clone(),
                source: e,
            });
        }

        info!("Saved {}", path.display());
        Ok(path)
    }
}

/// Keeps documents in memory, for tests.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemorySink {
    pub files: Vec<(String, String)>,
}

#[cfg(test)]
impl ExportSink for MemorySink {
    fn save(&mut self, file_name: &str, contents: &str) -> Result<PathBuf> {
        self.files.push((file_name.to_string(), contents.to_string()));
        Ok(PathBuf::from(file_name))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_directory_sink_writes_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut sink = DirectorySink::new(dir.path());

        let path = sink.save("Chat.md", "# hi").unwrap();
        assert_eq!(path, dir.path().join("Chat.md"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "# hi");
    }

    #[test]
    fn test_directory_sink_creates_directory() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let nested = dir.path().join("exports").join("today");
        let mut sink = DirectorySink::new(&nested);

        sink.save("Chat.html", "<html></html>").unwrap();
        assert!(nested.join("Chat.html").exists());
    }

    #[test]
    fn test_directory_sink_replaces_separators() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut sink = DirectorySink::new(dir.path());

        let path = sink.save("a/b\\c.md", "x").unwrap();
        assert_eq!(path, dir.path().join("a_b_c.md"));
    }

    #[test]
    fn test_directory_sink_leaves_no_partial_files() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let mut sink = DirectorySink::new(dir.path());

        sink.save("Chat.md", "first").unwrap();
        sink.save("Chat.md", "second").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["Chat.md"]);
        assert_eq!(fs::read_to_string(dir.path().join("Chat.md")).unwrap(), "second");
    }

    #[test]
    fn test_directory_sink_failed_replace_cleans_up() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        // A directory in the way makes the final rename fail
        fs::create_dir(dir.path().join("Chat.md")).unwrap();
        let mut sink = DirectorySink::new(dir.path());

        let result = sink.save("Chat.md", "x");
        assert!(matches!(result, Err(Error::FileWrite { .. })));

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["Chat.md"]);
        assert!(dir.path().join("Chat.md").is_dir());
    }

    #[test]
    fn test_directory_sink_write_error() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = dir.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();

        let mut sink = DirectorySink::new(&blocker);
        let result = sink.save("Chat.md", "x");
        assert!(matches!(result, Err(Error::FileWrite { .. })));
    }
}
