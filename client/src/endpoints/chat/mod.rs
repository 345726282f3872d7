pub mod chat_builder;
pub mod chat_request;
pub mod endpoint;
pub mod error;
pub mod parameters;
pub mod request_types;
mod tests;

pub use chat_builder::*;
pub use chat_request::*;
pub use endpoint::*;
pub use error::*;
pub use parameters::*;
pub use request_types::*;
