use std::time::Duration;

use async_trait::async_trait;
use duel_bot::services::follow_up::{FollowUp, FollowUpError, FollowUpExecutor};
use parking_lot::Mutex;

/// Records every follow-up it is asked to run. Optionally rejects the
/// first `fail_first` calls.
#[derive(Default)]
pub struct RecordingExecutor {
    calls: Mutex<Vec<FollowUp>>,
    fail_first: usize,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_first(fail_first: usize) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_first,
        }
    }

    pub fn calls(&self) -> Vec<FollowUp> {
        self.calls.lock().clone()
    }

    /// Follow-ups run on a spawned task; poll until `n` have arrived.
    pub async fn wait_for(&self, n: usize) -> Vec<FollowUp> {
        for _ in 0..200 {
            if self.calls.lock().len() >= n {
                break;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        let calls = self.calls();
        assert!(
            calls.len() >= n,
            "expected {n} follow-ups, saw {}: {calls:?}",
            calls.len()
        );
        calls
    }
}

#[async_trait]
impl FollowUpExecutor for RecordingExecutor {
    async fn execute(&self, follow_up: &FollowUp) -> Result<(), FollowUpError> {
        let mut calls = self.calls.lock();
        calls.push(follow_up.clone());
        if calls.len() <= self.fail_first {
            return Err(FollowUpError::Rejected {
                status: 404,
                body: "Unknown Message".into(),
            });
        }
        Ok(())
    }
}
