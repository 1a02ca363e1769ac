//! Two-phase replies: one synchronous ack plus ordered follow-up calls.
//!
//! Handlers return a [`Reply`]. The HTTP boundary serializes the ack into
//! the response body and hands the follow-ups to a [`FollowUpRunner`],
//! which executes them on a spawned task after the ack has been produced.
//! A failing follow-up is logged and skipped; it never touches the ack.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, warn, Instrument, Span};

use crate::protocol::{Ack, MessageData};

/// A previously sent message, addressed through the interaction token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTarget {
    pub token: String,
    pub message_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FollowUp {
    DeleteMessage(MessageTarget),
    PatchMessage(MessageTarget, MessageData),
}

impl FollowUp {
    pub fn kind(&self) -> &'static str {
        match self {
            FollowUp::DeleteMessage(_) => "delete_message",
            FollowUp::PatchMessage(..) => "patch_message",
        }
    }

    pub fn target(&self) -> &MessageTarget {
        match self {
            FollowUp::DeleteMessage(target) | FollowUp::PatchMessage(target, _) => target,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub ack: Ack,
    pub follow_ups: Vec<FollowUp>,
}

impl Reply {
    pub fn ack(ack: Ack) -> Self {
        Self {
            ack,
            follow_ups: Vec::new(),
        }
    }

    /// Queue a follow-up; `None` targets (no message id in the event) are skipped.
    pub fn then(mut self, follow_up: Option<FollowUp>) -> Self {
        self.follow_ups.extend(follow_up);
        self
    }

    pub fn into_parts(self) -> (Ack, Vec<FollowUp>) {
        (self.ack, self.follow_ups)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FollowUpError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("platform rejected call with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[async_trait]
pub trait FollowUpExecutor: Send + Sync {
    async fn execute(&self, follow_up: &FollowUp) -> Result<(), FollowUpError>;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FollowUpReport {
    pub attempted: usize,
    pub failed: usize,
}

#[derive(Clone)]
pub struct FollowUpRunner {
    executor: Arc<dyn FollowUpExecutor>,
}

impl FollowUpRunner {
    pub fn new(executor: Arc<dyn FollowUpExecutor>) -> Self {
        Self { executor }
    }

    /// Execute in order. Failures are logged and do not stop later calls.
    pub async fn run(&self, follow_ups: Vec<FollowUp>) -> FollowUpReport {
        let mut report = FollowUpReport::default();
        for follow_up in &follow_ups {
            report.attempted += 1;
            match self.executor.execute(follow_up).await {
                Ok(()) => debug!(
                    kind = follow_up.kind(),
                    message_id = %follow_up.target().message_id,
                    "Follow-up sent"
                ),
                Err(err) => {
                    report.failed += 1;
                    warn!(
                        kind = follow_up.kind(),
                        message_id = %follow_up.target().message_id,
                        error = %err,
                        "Follow-up failed"
                    );
                }
            }
        }
        report
    }

    /// Run on a detached task inside the current span. `None` if there is nothing to do.
    pub fn spawn(&self, follow_ups: Vec<FollowUp>) -> Option<JoinHandle<FollowUpReport>> {
        if follow_ups.is_empty() {
            return None;
        }
        let runner = self.clone();
        Some(tokio::spawn(
            async move { runner.run(follow_ups).await }.instrument(Span::current()),
        ))
    }
}
