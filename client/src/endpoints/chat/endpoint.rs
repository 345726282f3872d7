use reqwest::Method;
use serde_json::Value;

use crate::endpoints::{Endpoint, chat::ChatCompletionRequest};

pub const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

/// The chat completions endpoint.
///
/// The response is left as raw JSON; its shape is not checked.
pub struct ChatCompletionsEndpoint {
    request: ChatCompletionRequest,
}

impl ChatCompletionsEndpoint {
    pub fn new(request: ChatCompletionRequest) -> Self {
        Self { request }
    }
}

impl Endpoint for ChatCompletionsEndpoint {
    type Request = ChatCompletionRequest;
    type Response = Value;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> &str {
        CHAT_COMPLETIONS_PATH
    }

    fn request_body(&self) -> &Self::Request {
        &self.request
    }
}
