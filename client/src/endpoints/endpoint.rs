use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

/// A Perplexity API endpoint.
///
/// Ties together the request body, the decoded response type, the HTTP method and
/// the URL path. Any implementor can be sent with
/// [`PerplexityClient::send`](crate::PerplexityClient::send).
pub trait Endpoint {
    /// The type of the request body. Must be serializable.
    type Request: Serialize;
    /// The type of the response body. Must be deserializable.
    type Response: DeserializeOwned;

    /// Returns the HTTP method for this endpoint.
    fn method(&self) -> Method;

    /// Returns the URL path for this endpoint, relative to the base URL.
    fn path(&self) -> &str;

    /// Returns the request body.
    fn request_body(&self) -> &Self::Request;
}
