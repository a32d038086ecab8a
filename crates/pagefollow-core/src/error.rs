use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Failed to read target file: {0}")]
    Load(#[from] csv::Error),

    #[error("Failed to read target file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Browser session could not be started: {0}")]
    SessionInit(String),

    #[error("Login failed: {0}")]
    Auth(String),

    #[error("Page error at {url}: {reason}")]
    Page { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
