pub mod credentials;
pub mod error;
pub mod outcome;
pub mod runner;
pub mod session;
pub mod targets;

pub use credentials::Credentials;
pub use error::{Error, Result};
pub use outcome::{FollowOutcome, RunProgress, RunReport};
pub use runner::{BatchRunner, NullProgress, ProgressObserver};
pub use session::{ConfirmationGate, FollowAction, FollowSession};
pub use targets::TargetList;
