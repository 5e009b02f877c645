use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::application::ports::{LanguageModel, ModelInvocationError};

/// In-memory model returning queued answers in order, for tests and local
/// runs without network access. Once the queue is empty every call fails
/// with [`ModelInvocationError::Unavailable`].
#[derive(Debug, Default)]
pub struct ScriptedLanguageModel {
    responses: Mutex<VecDeque<Result<String, ModelInvocationError>>>,
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

impl ScriptedLanguageModel {
    pub fn new(responses: Vec<Result<String, ModelInvocationError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            prompts: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
        }
    }

    /// A model whose every call fails.
    pub fn failing() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Prompts received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl LanguageModel for ScriptedLanguageModel {
    async fn generate(&self, prompt: &str) -> Result<String, ModelInvocationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }

        let next = self
            .responses
            .lock()
            .ok()
            .and_then(|mut responses| responses.pop_front());

        match next {
            Some(Ok(text)) => Ok(text.trim().to_string()),
            Some(Err(e)) => Err(e),
            None => Err(ModelInvocationError::Unavailable(
                "no scripted response left".to_string(),
            )),
        }
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}
