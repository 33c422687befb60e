//! Per-session draft state and flow
//!
//! A single linear state machine with two phases: `Idle` (no draft) and
//! `Previewing` (draft held, not yet published). Transitions are driven
//! exclusively by the two user actions; there is no automatic transition
//! and no timeout. The draft is owned by this session and never shared.

use crate::backend::Backend;
use crate::error::{ConsoleError, ConsoleResult};
use shared::PublishOutcome;

/// A generated article held in session memory, not yet published
#[derive(Clone, Debug, PartialEq)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

/// Session phase
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    Idle,
    Previewing(Draft),
}

/// One user's session: a backend handle plus at most one draft
pub struct Session<B: Backend> {
    backend: B,
    phase: Phase,
}

impl<B: Backend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            phase: Phase::Idle,
        }
    }

    /// The current draft, if one is being previewed
    pub fn draft(&self) -> Option<&Draft> {
        match &self.phase {
            Phase::Previewing(draft) => Some(draft),
            Phase::Idle => None,
        }
    }

    /// Whether the publish action is available
    pub fn can_publish(&self) -> bool {
        matches!(self.phase, Phase::Previewing(_))
    }

    /// Generate a draft for the given title
    ///
    /// Valid from any phase; a successful generation replaces any existing
    /// draft. On backend failure the current phase is left untouched.
    pub async fn generate(&mut self, title: &str) -> ConsoleResult<()> {
        let body = self.backend.generate_article(title).await?;

        self.phase = Phase::Previewing(Draft {
            title: title.to_string(),
            body,
        });

        Ok(())
    }

    /// Publish the held draft
    ///
    /// Only valid while previewing: in `Idle` the publish action does not
    /// exist. A successful publish clears the draft; a provider rejection
    /// keeps it so the user can retry.
    pub async fn publish(&mut self, publish_now: bool) -> ConsoleResult<PublishOutcome> {
        let draft = match &self.phase {
            Phase::Previewing(draft) => draft.clone(),
            Phase::Idle => return Err(ConsoleError::NoDraft),
        };

        let outcome = self
            .backend
            .publish_article(&draft.title, &draft.body, publish_now)
            .await?;

        if outcome.is_success() {
            self.phase = Phase::Idle;
        }

        Ok(outcome)
    }

    /// Drop the held draft without publishing
    pub fn discard(&mut self) {
        self.phase = Phase::Idle;
    }
}
