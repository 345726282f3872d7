pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use client::{PerplexityClient, PerplexityRequestBuilder};
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use endpoints::chat::{
    ChatCompletionRequest, ChatCompletionRequestBuilder, GenerationParameter,
    GenerationParameters, Message, Role, ValidationError,
};
pub use error::{ClientError, PerplexityError};
pub use models::{ModelIdentifier, UnknownModel};
