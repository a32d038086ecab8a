use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Chrome process or page-interaction failure; the message carries
    /// the full story (which binary, which URL, which step).
    #[error("{0}")]
    Browser(String),

    #[error("DevTools protocol error: {0}")]
    Cdp(String),

    #[error("Timed out after {after:?} waiting for {what}")]
    Timeout { what: String, after: Duration },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<chromiumoxide::error::CdpError> for Error {
    fn from(err: chromiumoxide::error::CdpError) -> Self {
        Error::Cdp(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message_names_the_wait_and_bound() {
        let err = Error::Timeout {
            what: "element matching #username".to_string(),
            after: Duration::from_secs(10),
        };
        let message = err.to_string();
        assert!(message.contains("element matching #username"));
        assert!(message.contains("10s"));
    }

    #[test]
    fn test_cdp_message_names_the_protocol() {
        let err = Error::Cdp("connection refused".to_string());
        assert!(err.to_string().contains("DevTools protocol"));
    }
}
