//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use framezgen_core::{
    application::{ApplicationError, ports::Filesystem},
    error::FramezResult,
};

/// In-memory filesystem for testing.
///
/// Stricter than the real thing in one respect: `write_file` fails when the
/// parent directory has not been created, so tests catch any generator path
/// that forgets the parent-creation invariant.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().expect("memory filesystem lock poisoned");
        inner.files.keys().cloned().collect()
    }

    /// List all directories (including implicitly created ancestors).
    pub fn list_directories(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().expect("memory filesystem lock poisoned");
        inner.directories.iter().cloned().collect()
    }

    /// Clear all contents.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("memory filesystem lock poisoned");
        inner.files.clear();
        inner.directories.clear();
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> FramezResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_error(path))?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> FramezResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| lock_error(path))?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().expect("memory filesystem lock poisoned");
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

fn lock_error(path: &Path) -> framezgen_core::error::FramezError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: "Memory filesystem lock poisoned".into(),
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
