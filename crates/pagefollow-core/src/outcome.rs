use serde::Serialize;

/// Terminal state of one processed target URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum FollowOutcome {
    /// The follow control was activated on this visit.
    Followed,
    /// The page was already in the following state; nothing was clicked.
    AlreadyFollowing,
    /// The page could not be processed; the batch continued without it.
    Failed(String),
}

impl FollowOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, FollowOutcome::Failed(_))
    }
}

/// Fractional progress through the batch, emitted after every item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunProgress {
    pub completed: usize,
    pub total: usize,
}

impl RunProgress {
    /// Progress as a 0-100 percentage for user-facing display.
    pub fn percent(&self) -> u8 {
        if self.total == 0 {
            return 100;
        }
        ((self.completed * 100) / self.total) as u8
    }
}

/// Per-item outcomes for one completed batch, in processing order.
///
/// Exists only for the terminal summary and optional JSON output; nothing
/// is persisted across runs.
#[derive(Debug, Serialize)]
pub struct RunReport {
    pub items: Vec<ItemResult>,
}

#[derive(Debug, Serialize)]
pub struct ItemResult {
    pub url: String,
    #[serde(flatten)]
    pub outcome: FollowOutcome,
}

impl RunReport {
    pub fn with_capacity(total: usize) -> Self {
        Self {
            items: Vec::with_capacity(total),
        }
    }

    pub fn record(&mut self, url: impl Into<String>, outcome: FollowOutcome) {
        self.items.push(ItemResult {
            url: url.into(),
            outcome,
        });
    }

    pub fn followed(&self) -> usize {
        self.count(|o| matches!(o, FollowOutcome::Followed))
    }

    pub fn already_following(&self) -> usize {
        self.count(|o| matches!(o, FollowOutcome::AlreadyFollowing))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| o.is_failure())
    }

    /// True when every item was followed or already following.
    pub fn success(&self) -> bool {
        self.failed() == 0
    }

    fn count(&self, predicate: impl Fn(&FollowOutcome) -> bool) -> usize {
        self.items.iter().filter(|i| predicate(&i.outcome)).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_rounds_down() {
        let progress = RunProgress {
            completed: 1,
            total: 3,
        };
        assert_eq!(progress.percent(), 33);
    }

    #[test]
    fn test_percent_of_empty_batch_is_complete() {
        let progress = RunProgress {
            completed: 0,
            total: 0,
        };
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_report_counts_by_outcome() {
        let mut report = RunReport::with_capacity(3);
        report.record("https://a.example", FollowOutcome::Followed);
        report.record("https://b.example", FollowOutcome::AlreadyFollowing);
        report.record(
            "https://c.example",
            FollowOutcome::Failed("timed out".to_string()),
        );

        assert_eq!(report.followed(), 1);
        assert_eq!(report.already_following(), 1);
        assert_eq!(report.failed(), 1);
        assert!(!report.success());
    }
}
