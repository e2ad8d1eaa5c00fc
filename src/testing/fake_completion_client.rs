use std::sync::{Arc, Mutex};

use crate::domain::{AppError, CompletionOutcome, ConversationMessage, StorySegment};
use crate::ports::CompletionClient;

/// Records every request and answers with a fixed segment, or fails.
#[derive(Clone)]
pub struct FakeCompletionClient {
    pub requests: Arc<Mutex<Vec<Vec<ConversationMessage>>>>,
    pub response: Option<StorySegment>,
}

impl FakeCompletionClient {
    pub fn answering(segment: StorySegment) -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: Some(segment) }
    }

    pub fn failing() -> Self {
        Self { requests: Arc::new(Mutex::new(vec![])), response: None }
    }

    pub fn get_requests(&self) -> Vec<Vec<ConversationMessage>> {
        self.requests.lock().unwrap().clone()
    }
}

impl CompletionClient for FakeCompletionClient {
    fn complete(&self, messages: &[ConversationMessage]) -> CompletionOutcome {
        self.requests.lock().unwrap().push(messages.to_vec());
        match &self.response {
            Some(segment) => CompletionOutcome::Success(segment.clone()),
            None => CompletionOutcome::Failure(AppError::CompletionApi {
                message: "API request failed with status 503: Unknown error".to_string(),
                status: Some(503),
            }),
        }
    }
}
