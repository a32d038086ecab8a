use crate::Result;
use std::path::{Path, PathBuf};

/// Chrome user-data directory for one session.
///
/// A temporary profile is deleted when dropped. A persistent profile
/// survives across runs, which keeps the site's login cookies and can
/// avoid repeating the verification step on every run.
pub struct ProfileDir {
    path: PathBuf,
    temp: Option<tempfile::TempDir>,
}

impl ProfileDir {
    /// Create a throwaway profile directory.
    pub fn temporary() -> Result<Self> {
        let temp = tempfile::tempdir()?;
        Ok(Self {
            path: temp.path().to_path_buf(),
            temp: Some(temp),
        })
    }

    /// Create or reuse a persistent profile at the given path.
    pub fn persistent(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            std::fs::create_dir_all(&path)?;
        }
        Ok(Self { path, temp: None })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_temporary(&self) -> bool {
        self.temp.is_some()
    }
}
