//! Completion API client port.

use crate::domain::{CompletionOutcome, ConversationMessage};

/// Port for chat-completion requests that should yield a story segment.
pub trait CompletionClient {
    /// Send one request and report success or the failure reason.
    ///
    /// Implementations never panic on bad responses; every failure becomes
    /// `CompletionOutcome::Failure`.
    fn complete(&self, messages: &[ConversationMessage]) -> CompletionOutcome;
}
