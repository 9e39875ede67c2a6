// src/fs/mod.rs

use std::fmt::Debug;
use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

pub mod mock;

/// Abstract filesystem interface used for reading manifests and writing scripts.
pub trait FileSystem: Send + Sync + Debug {
    fn read_to_string(&self, path: &Path) -> Result<String>;
    fn exists(&self, path: &Path) -> bool;

    /// Create (or truncate) a file and return a writer for it.
    ///
    /// Parent directories are created as needed.
    fn create(&self, path: &Path) -> Result<Box<dyn Write + Send>>;

    /// Mark a file as executable. A no-op where the platform has no such bit.
    fn set_executable(&self, path: &Path) -> Result<()>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).with_context(|| format!("reading file {:?}", path))
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create(&self, path: &Path) -> Result<Box<dyn Write + Send>> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating dir {:?}", parent))?;
            }
        }
        let file = fs::File::create(path).with_context(|| format!("creating file {:?}", path))?;
        Ok(Box::new(file))
    }

    #[cfg(unix)]
    fn set_executable(&self, path: &Path) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(path)
            .with_context(|| format!("reading metadata of {:?}", path))?
            .permissions();
        perms.set_mode(0o755);
        fs::set_permissions(path, perms)
            .with_context(|| format!("setting permissions on {:?}", path))
    }

    #[cfg(not(unix))]
    fn set_executable(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}
