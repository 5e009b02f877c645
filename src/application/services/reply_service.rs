use std::sync::Arc;

use crate::application::ports::{LanguageModel, ModelInvocationError};
use crate::domain::{Category, Classification, EmailContent, ReplyDraft, ReplySource};

use super::prompts::build_reply_prompt;

pub const CANNED_PRODUCTIVE_REPLY: &str =
    "Agradecemos seu contato. Sua solicitação foi recebida e será processada. Att, Equipe";
pub const CANNED_UNPRODUCTIVE_REPLY: &str =
    "Agradecemos sua mensagem! Desejamos um ótimo dia. Att, Equipe";

pub struct ReplyService<M>
where
    M: LanguageModel + ?Sized,
{
    model: Arc<M>,
}

impl<M> ReplyService<M>
where
    M: LanguageModel + ?Sized,
{
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    #[tracing::instrument(skip(self, content, classification), fields(category = %classification.category))]
    pub async fn draft_reply(
        &self,
        content: &EmailContent,
        classification: &Classification,
    ) -> ReplyDraft {
        match self.draft_with_model(content, classification).await {
            Ok(text) => ReplyDraft::new(text, ReplySource::Model),
            Err(e) => {
                tracing::warn!(error = %e, "Reply generation failed, using canned reply");
                ReplyDraft::new(canned_reply(classification.category), ReplySource::Canned)
            }
        }
    }

    pub async fn draft_with_model(
        &self,
        content: &EmailContent,
        classification: &Classification,
    ) -> Result<String, ModelInvocationError> {
        let prompt = build_reply_prompt(content, classification);
        let text = self.model.generate(&prompt).await?;
        let text = text.trim();

        if text.is_empty() {
            return Err(ModelInvocationError::EmptyResponse);
        }

        Ok(text.to_string())
    }
}

pub fn canned_reply(category: Category) -> &'static str {
    match category {
        Category::Productive => CANNED_PRODUCTIVE_REPLY,
        Category::Unproductive => CANNED_UNPRODUCTIVE_REPLY,
    }
}
