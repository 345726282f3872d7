use log::debug;
use reqwest::{
    Client, RequestBuilder,
    header::{ACCEPT, CONTENT_TYPE, HeaderValue},
};
use serde::Serialize;
use serde_json::Value;
use std::{fmt::Display, marker::PhantomData};

use crate::{
    config::ClientConfig,
    endpoints::{
        Endpoint,
        chat::{
            CHAT_COMPLETIONS_PATH, ChatCompletionRequest, ChatCompletionsEndpoint,
            GenerationParameters, Message,
        },
    },
    error::{ClientError, PerplexityError},
    models::ModelIdentifier,
};

/// Represents the state where no API key has been set for the request
pub struct NoApiKey;
/// Represents the state where an API key has been set for the request
pub struct ApiKeySet;
/// Represents the state where a payload has been set for the request
pub struct PayloadSet;

/// Builder for requests to Perplexity API endpoints
///
/// # Type Parameters
///
/// * `Api` - Authentication state ([`NoApiKey`] or [`ApiKeySet`])
/// * `Payload` - The payload type still to be attached, or [`PayloadSet`]
///
/// [`send`](PerplexityRequestBuilder::send) only exists once the bearer token is set.
pub struct PerplexityRequestBuilder<Api, Payload>(
    pub RequestBuilder,
    pub PhantomData<Payload>,
    pub PhantomData<Api>,
);

/// A client for the Perplexity chat completions API
///
/// Wraps a reqwest::Client together with a [`ClientConfig`]. Cloning is cheap and
/// clones share the connection pool.
#[derive(Clone, Debug)]
pub struct PerplexityClient {
    client: Client,
    config: ClientConfig,
}

impl PerplexityClient {
    /// Creates a client with a default reqwest::Client
    pub fn new(config: ClientConfig) -> PerplexityClient {
        Self::with_http_client(config, Client::new())
    }

    /// Creates a client around a caller-configured reqwest::Client
    ///
    /// Use this to set timeouts, proxies or TLS options on the transport.
    pub fn with_http_client(config: ClientConfig, client: Client) -> PerplexityClient {
        Self { client, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Creates a request builder for the chat completions endpoint
    ///
    /// The `accept` and `content-type` headers are already set; the caller still
    /// has to supply the bearer token and the payload.
    pub fn chat(&self) -> PerplexityRequestBuilder<NoApiKey, ChatCompletionRequest> {
        let url = self.config.url(CHAT_COMPLETIONS_PATH);
        self.client
            .post(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .into()
    }

    /// Sends any [`Endpoint`] using the configured base URL and API key
    ///
    /// Every failure after the request leaves the process, including a non-2xx
    /// status and a body that fails to decode, is returned as a [`ClientError`].
    pub async fn send<E: Endpoint>(&self, endpoint: E) -> Result<E::Response, ClientError> {
        let url = self.config.url(endpoint.path());
        debug!("{} {}", endpoint.method(), url);

        let response = self
            .client
            .request(endpoint.method(), url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .bearer_auth(&self.config.api_key)
            .json(endpoint.request_body())
            .send()
            .await?
            .error_for_status()?;

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Sends an already validated chat completion request
    pub async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<Value, ClientError> {
        debug!(
            "Chat completion with {} ({} messages, parameter: {:?})",
            request.model(),
            request.messages().len(),
            request.parameter()
        );
        self.send(ChatCompletionsEndpoint::new(request)).await
    }

    /// Validates the arguments and requests a chat completion
    ///
    /// Validation happens first; when it fails no request is made and the error is
    /// returned as [`PerplexityError::Validation`]. Transport failures come back as
    /// [`PerplexityError::Client`].
    pub async fn chat_completion(
        &self,
        messages: Vec<Message>,
        model: ModelIdentifier,
        params: &GenerationParameters,
    ) -> Result<Value, PerplexityError> {
        let request = ChatCompletionRequest::new(messages, model, params)?;
        Ok(self.create_chat_completion(request).await?)
    }
}

impl<T> PerplexityRequestBuilder<NoApiKey, T> {
    /// Sets the Bearer authentication token (API key) for this request
    pub fn bearer_auth<K: Display>(self, api_key: K) -> PerplexityRequestBuilder<ApiKeySet, T> {
        self.0.bearer_auth(api_key).into()
    }
}

impl<K, T: Serialize> PerplexityRequestBuilder<K, T> {
    /// Sets the JSON payload for the request
    pub fn json(self, payload: T) -> PerplexityRequestBuilder<K, PayloadSet> {
        self.0.json(&payload).into()
    }
}

impl<T> PerplexityRequestBuilder<ApiKeySet, T> {
    /// Sends the request and decodes the JSON response body
    ///
    /// Same error translation as [`PerplexityClient::send`].
    pub async fn send(self) -> Result<Value, ClientError> {
        let response = self.0.send().await?.error_for_status()?;
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl<T, U> From<RequestBuilder> for PerplexityRequestBuilder<T, U> {
    fn from(value: RequestBuilder) -> Self {
        PerplexityRequestBuilder(value, PhantomData, PhantomData)
    }
}
