use crate::outcome::{FollowOutcome, RunProgress, RunReport};
use crate::session::{FollowAction, FollowSession};
use crate::{Credentials, Error, Result, TargetList};

/// Receives a progress update after every processed item.
pub trait ProgressObserver {
    fn on_progress(&self, progress: RunProgress);
}

/// Observer that discards progress updates.
pub struct NullProgress;

impl ProgressObserver for NullProgress {
    fn on_progress(&self, _progress: RunProgress) {}
}

/// Orchestrates one batch: authenticate once, then visit every target in
/// order, isolating per-page failures so one bad URL never aborts the
/// run.
pub struct BatchRunner {
    credentials: Credentials,
    targets: TargetList,
}

impl BatchRunner {
    /// Validate inputs before any browser session exists.
    pub fn new(credentials: Credentials, targets: TargetList) -> Result<Self> {
        credentials.validate()?;
        if targets.is_empty() {
            return Err(Error::Validation(
                "target list contains no URLs".to_string(),
            ));
        }
        Ok(Self {
            credentials,
            targets,
        })
    }

    pub fn targets(&self) -> &TargetList {
        &self.targets
    }

    /// Run the batch over `session`.
    ///
    /// Authentication failure aborts the run with no per-URL work. Page
    /// failures are recorded and the loop continues; there are no
    /// retries. The session is closed on every exit path.
    pub async fn run<S, P>(&self, mut session: S, progress: &P) -> Result<RunReport>
    where
        S: FollowSession,
        P: ProgressObserver + ?Sized,
    {
        if let Err(e) = session.authenticate(&self.credentials).await {
            tracing::error!("Login failed: {}", e);
            session.close().await;
            return Err(e);
        }

        let total = self.targets.len();
        let mut report = RunReport::with_capacity(total);

        for (index, url) in self.targets.iter().enumerate() {
            let outcome = match session.follow(url).await {
                Ok(FollowAction::Activated) => {
                    tracing::info!("Followed the page: {}", url);
                    FollowOutcome::Followed
                }
                Ok(FollowAction::AlreadyFollowing) => {
                    tracing::info!("Already following the page: {}", url);
                    FollowOutcome::AlreadyFollowing
                }
                Err(e) => {
                    tracing::error!("Could not follow the page: {}. Error: {}", url, e);
                    FollowOutcome::Failed(e.to_string())
                }
            };
            report.record(url, outcome);
            progress.on_progress(RunProgress {
                completed: index + 1,
                total,
            });
        }

        session.close().await;
        Ok(report)
    }
}
