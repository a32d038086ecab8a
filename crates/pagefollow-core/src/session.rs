use crate::{Credentials, Result};
use async_trait::async_trait;

/// What the session did to the follow control on one page visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowAction {
    /// The control was not yet in the following state and was activated.
    Activated,
    /// The control already showed the following state; no click was issued.
    AlreadyFollowing,
}

/// One live authenticated browser session, exclusively owned by the batch
/// runner for the duration of a run.
///
/// Implementations must not panic across these boundaries: driver
/// failures come back as errors so the runner can decide whether the run
/// aborts (authentication) or continues (per-page work).
#[async_trait]
pub trait FollowSession {
    /// Drive the login form, including the optional human-completed
    /// verification pause, and confirm arrival at the authenticated
    /// landing state.
    async fn authenticate(&mut self, credentials: &Credentials) -> Result<()>;

    /// Visit one target URL and bring it into the following state,
    /// reporting whether a click was needed.
    async fn follow(&mut self, url: &str) -> Result<FollowAction>;

    /// Release the session. Called unconditionally at run end; must be
    /// safe to call after a failed authentication.
    async fn close(&mut self);
}

/// Blocking human-in-the-loop synchronization point.
///
/// The session calls this when the user must complete an out-of-band
/// verification step before the login flow can continue. The
/// presentation layer decides how the prompt is shown; the call must not
/// return until the user has responded.
#[async_trait]
pub trait ConfirmationGate: Send + Sync {
    /// Present `prompt` and block until the user confirms or declines.
    async fn confirm(&self, prompt: &str) -> bool;
}
