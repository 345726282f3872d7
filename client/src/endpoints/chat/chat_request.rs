use serde::{Serialize, Serializer, ser::SerializeMap};

use super::{
    chat_builder::ChatCompletionRequestBuilder,
    error::ValidationError,
    parameters::{GenerationParameter, GenerationParameters},
    request_types::Message,
};
use crate::models::ModelIdentifier;

/// A validated body for `POST /chat/completions`.
///
/// Always carries `model` and `messages`, plus at most one generation parameter.
/// The only way to obtain one is through [`ChatCompletionRequest::new`] or the
/// builder, so every instance has passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    model: ModelIdentifier,
    messages: Vec<Message>,
    parameter: Option<GenerationParameter>,
}

impl ChatCompletionRequest {
    /// Validates `params` and assembles the request body.
    ///
    /// # Errors
    /// * [`ValidationError::MutuallyExclusivePenalties`] if both penalties are nonzero
    /// * [`ValidationError::OutOfRange`] if the selected parameter is out of bounds
    pub fn new(
        messages: Vec<Message>,
        model: ModelIdentifier,
        params: &GenerationParameters,
    ) -> Result<Self, ValidationError> {
        let parameter = params.select()?;
        Ok(Self {
            model,
            messages,
            parameter,
        })
    }

    /// Creates a new request builder.
    pub fn builder() -> ChatCompletionRequestBuilder {
        ChatCompletionRequestBuilder::default()
    }

    pub fn model(&self) -> ModelIdentifier {
        self.model
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The generation parameter that made it into the body, if any.
    pub fn parameter(&self) -> Option<GenerationParameter> {
        self.parameter
    }
}

impl Serialize for ChatCompletionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + usize::from(self.parameter.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("model", &self.model)?;
        map.serialize_entry("messages", &self.messages)?;
        if let Some(parameter) = self.parameter {
            let key = parameter.name();
            match parameter {
                GenerationParameter::MaxTokens(value) => map.serialize_entry(key, &value)?,
                GenerationParameter::TopK(value) => map.serialize_entry(key, &value)?,
                GenerationParameter::Temperature(value)
                | GenerationParameter::TopP(value)
                | GenerationParameter::PresencePenalty(value)
                | GenerationParameter::FrequencyPenalty(value) => {
                    map.serialize_entry(key, &value)?
                }
            }
        }
        map.end()
    }
}
