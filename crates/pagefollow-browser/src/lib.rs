mod chrome;
mod error;
mod launcher;
mod profile;
mod session;
mod site;

pub use chrome::ChromeFinder;
pub use error::{Error, Result};
pub use launcher::BrowserLauncher;
pub use profile::ProfileDir;
pub use session::BrowserSession;
pub use site::SiteConfig;
