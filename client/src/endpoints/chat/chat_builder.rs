use super::{
    chat_request::ChatCompletionRequest,
    error::ValidationError,
    parameters::GenerationParameters,
    request_types::Message,
};
use crate::models::ModelIdentifier;

/// Builder for constructing [`ChatCompletionRequest`] instances.
///
/// Unset model falls back to [`ModelIdentifier::default`]. Validation runs in
/// [`build`](Self::build), never in the setters.
#[derive(Debug, Clone, Default)]
pub struct ChatCompletionRequestBuilder {
    model: Option<ModelIdentifier>,
    messages: Vec<Message>,
    params: GenerationParameters,
}

impl ChatCompletionRequestBuilder {
    /// Sets the model for the chat request.
    pub fn model(mut self, model: ModelIdentifier) -> Self {
        self.model = Some(model);
        self
    }

    /// Appends a message to the conversation.
    pub fn message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    /// Appends several messages, keeping their order.
    pub fn messages<I: IntoIterator<Item = Message>>(mut self, messages: I) -> Self {
        self.messages.extend(messages);
        self
    }

    /// Replaces all generation parameters at once.
    pub fn params(mut self, params: GenerationParameters) -> Self {
        self.params = params;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.params = self.params.max_tokens(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.params = self.params.temperature(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.params = self.params.top_p(top_p);
        self
    }

    pub fn top_k(mut self, top_k: i64) -> Self {
        self.params = self.params.top_k(top_k);
        self
    }

    pub fn presence_penalty(mut self, presence_penalty: f64) -> Self {
        self.params = self.params.presence_penalty(presence_penalty);
        self
    }

    pub fn frequency_penalty(mut self, frequency_penalty: f64) -> Self {
        self.params = self.params.frequency_penalty(frequency_penalty);
        self
    }

    /// Validates the parameters and builds the request.
    pub fn build(self) -> Result<ChatCompletionRequest, ValidationError> {
        ChatCompletionRequest::new(
            self.messages,
            self.model.unwrap_or_default(),
            &self.params,
        )
    }
}
