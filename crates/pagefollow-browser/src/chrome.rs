use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Chrome binary names to try on the search path, in preference order.
const PATH_CANDIDATES: &[&str] = &[
    "google-chrome",
    "google-chrome-stable",
    "chromium",
    "chromium-browser",
    "chrome",
];

/// Locates a Chrome or Chromium binary on the system.
pub struct ChromeFinder {
    custom_path: Option<PathBuf>,
}

impl ChromeFinder {
    /// Create a finder, optionally pinned to an explicit binary path.
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Resolve the Chrome binary to use.
    ///
    /// A custom path wins when given; otherwise the search path is
    /// consulted, then platform install locations.
    pub fn find(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.custom_path {
            return Self::validate(path);
        }

        for name in PATH_CANDIDATES {
            if let Ok(path) = which::which(name) {
                tracing::debug!("Found Chrome on PATH: {}", path.display());
                return Ok(path);
            }
        }

        for path in Self::install_locations() {
            if let Ok(valid) = Self::validate(&path) {
                return Ok(valid);
            }
        }

        Err(Error::Browser(format!(
            "Chrome not found. Checked PATH for [{}] and {}. Use --chrome-path to specify a location.",
            PATH_CANDIDATES.join(", "),
            Self::install_locations()
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        )))
    }

    fn validate(path: &Path) -> Result<PathBuf> {
        if path.is_file() {
            Ok(path.to_path_buf())
        } else {
            Err(Error::Browser(format!(
                "Chrome binary not found at {}",
                path.display()
            )))
        }
    }

    /// Platform-specific install locations checked after the search path.
    fn install_locations() -> Vec<PathBuf> {
        #[cfg(target_os = "macos")]
        return vec![
            PathBuf::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
            PathBuf::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        ];

        #[cfg(target_os = "linux")]
        return vec![
            PathBuf::from("/usr/bin/google-chrome"),
            PathBuf::from("/usr/bin/google-chrome-stable"),
            PathBuf::from("/usr/bin/chromium"),
            PathBuf::from("/usr/bin/chromium-browser"),
            PathBuf::from("/snap/bin/chromium"),
        ];

        #[cfg(target_os = "windows")]
        return vec![
            PathBuf::from(r"C:\Program Files\Google\Chrome\Application\chrome.exe"),
            PathBuf::from(r"C:\Program Files (x86)\Google\Chrome\Application\chrome.exe"),
        ];

        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        return Vec::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_path_must_exist() {
        let finder = ChromeFinder::new(Some(PathBuf::from("/nonexistent/chrome")));
        let result = finder.find();
        assert!(matches!(result, Err(Error::Browser(_))));
    }

    #[test]
    fn test_custom_path_is_used_when_valid() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let finder = ChromeFinder::new(Some(file.path().to_path_buf()));
        assert_eq!(finder.find().unwrap(), file.path());
    }

    #[test]
    fn test_missing_chrome_error_mentions_override_flag() {
        let finder = ChromeFinder::new(Some(PathBuf::from("/nonexistent/chrome")));
        let message = finder.find().unwrap_err().to_string();
        assert!(message.contains("/nonexistent/chrome"));
    }
}
