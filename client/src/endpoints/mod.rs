pub mod chat;
pub mod endpoint;

pub use endpoint::Endpoint;
