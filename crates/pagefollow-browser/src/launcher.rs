use crate::{Error, Result};
use std::path::PathBuf;
use std::process::{Child, Command, Stdio};

/// Spawns a visible Chrome process with remote debugging enabled.
///
/// The browser is never launched headless: the verification pause needs a
/// window the user can interact with.
pub struct BrowserLauncher {
    chrome_path: PathBuf,
    profile_path: PathBuf,
    debugging_port: u16,
}

impl BrowserLauncher {
    pub const DEFAULT_PORT: u16 = 9222;

    pub fn new(chrome_path: PathBuf, profile_path: PathBuf) -> Self {
        Self {
            chrome_path,
            profile_path,
            debugging_port: Self::DEFAULT_PORT,
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.debugging_port = port;
        self
    }

    pub fn debugging_port(&self) -> u16 {
        self.debugging_port
    }

    /// Spawn the Chrome process. The caller owns the returned child and
    /// must kill it when the session ends.
    pub fn launch(&self) -> Result<Child> {
        let args = self.build_args();
        tracing::debug!(
            "Launching {} with debugging port {}",
            self.chrome_path.display(),
            self.debugging_port
        );

        Command::new(&self.chrome_path)
            .args(&args)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| Error::Browser(format!("Failed to launch Chrome: {}", e)))
    }

    fn build_args(&self) -> Vec<String> {
        vec![
            format!("--remote-debugging-port={}", self.debugging_port),
            "--no-first-run".to_string(),
            "--no-default-browser-check".to_string(),
            "--new-window".to_string(),
            format!("--user-data-dir={}", self.profile_path.display()),
            "about:blank".to_string(),
        ]
    }
}
