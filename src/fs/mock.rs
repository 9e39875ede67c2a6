// src/fs/mock.rs

use super::FileSystem;
use anyhow::{anyhow, Result};
use std::collections::{HashMap, HashSet};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct MockState {
    files: HashMap<PathBuf, Vec<u8>>,
    executable: HashSet<PathBuf>,
}

/// In-memory filesystem for tests.
///
/// Writers returned by [`FileSystem::create`] append straight into the shared
/// map, so anything written before an error is still visible afterwards.
#[derive(Debug, Clone, Default)]
pub struct MockFileSystem {
    state: Arc<Mutex<MockState>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: impl Into<Vec<u8>>) {
        let mut state = self.state.lock().unwrap();
        state
            .files
            .insert(path.as_ref().to_path_buf(), content.into());
    }

    /// Current contents of a file as UTF-8, if it exists.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        let state = self.state.lock().unwrap();
        state
            .files
            .get(path.as_ref())
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn is_executable(&self, path: impl AsRef<Path>) -> bool {
        let state = self.state.lock().unwrap();
        state.executable.contains(path.as_ref())
    }
}

/// Writer handed out by [`MockFileSystem::create`].
struct MockWriter {
    path: PathBuf,
    state: Arc<Mutex<MockState>>,
}

impl Write for MockWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut state = self
            .state
            .lock()
            .map_err(|_| io::Error::other("mock filesystem lock poisoned"))?;
        state
            .files
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let state = self.state.lock().unwrap();
        match state.files.get(path) {
            Some(content) => {
                String::from_utf8(content.clone()).map_err(|e| anyhow!("Invalid UTF-8: {}", e))
            }
            None => Err(anyhow!("File not found: {:?}", path)),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state.lock().unwrap();
        state.files.contains_key(path)
    }

    fn create(&self, path: &Path) -> Result<Box<dyn Write + Send>> {
        let mut state = self.state.lock().unwrap();
        state.files.insert(path.to_path_buf(), Vec::new());
        state.executable.remove(path);
        Ok(Box::new(MockWriter {
            path: path.to_path_buf(),
            state: Arc::clone(&self.state),
        }))
    }

    fn set_executable(&self, path: &Path) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if !state.files.contains_key(path) {
            return Err(anyhow!("File not found: {:?}", path));
        }
        state.executable.insert(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_file_accumulates_writes() {
        let fs = MockFileSystem::new();
        let path = Path::new("out/tasks.sh");

        let mut w = fs.create(path).unwrap();
        w.write_all(b"one\n").unwrap();
        assert_eq!(fs.contents(path).as_deref(), Some("one\n"));

        w.write_all(b"two\n").unwrap();
        assert_eq!(fs.read_to_string(path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn create_truncates_existing_file() {
        let fs = MockFileSystem::new();
        fs.add_file("tasks.sh", "stale");
        fs.set_executable(Path::new("tasks.sh")).unwrap();

        let _w = fs.create(Path::new("tasks.sh")).unwrap();
        assert_eq!(fs.contents("tasks.sh").as_deref(), Some(""));
        assert!(!fs.is_executable("tasks.sh"));
    }

    #[test]
    fn set_executable_requires_existing_file() {
        let fs = MockFileSystem::new();
        assert!(fs.set_executable(Path::new("missing.sh")).is_err());
    }
}
