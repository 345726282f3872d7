use clap::Parser;
use perplexity::{GenerationParameters, ModelIdentifier};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "perplexity",
    about = "Send a chat completion request to the Perplexity API",
    version
)]
pub struct Cli {
    /// User message to send
    #[arg(required_unless_present = "list_models")]
    pub prompt: Option<String>,

    /// Optional system message sent before the prompt
    #[arg(long)]
    pub system: Option<String>,

    /// Model to use
    #[arg(long, default_value_t = ModelIdentifier::default())]
    pub model: ModelIdentifier,

    /// API key for Perplexity (alternatively use PERPLEXITY_API_KEY env var)
    #[arg(long, env = "PERPLEXITY_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Base URL of the API
    #[arg(long, env = "PERPLEXITY_BASE_URL", default_value = perplexity::DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Maximum number of tokens to generate
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Sampling temperature, 0 to 2
    #[arg(long)]
    pub temperature: Option<f64>,

    /// Nucleus sampling, 0 to 1
    #[arg(long)]
    pub top_p: Option<f64>,

    /// Top-k sampling, 0 to 2048
    #[arg(long, allow_negative_numbers = true)]
    pub top_k: Option<i64>,

    /// Presence penalty, -2 to 2 (not with --frequency-penalty)
    #[arg(long, allow_negative_numbers = true)]
    pub presence_penalty: Option<f64>,

    /// Frequency penalty (not with --presence-penalty)
    #[arg(long, allow_negative_numbers = true)]
    pub frequency_penalty: Option<f64>,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Write logs to a file instead of stderr
    #[arg(long)]
    pub log_to_file: bool,

    /// List supported models and exit
    #[arg(long)]
    pub list_models: bool,
}

impl Cli {
    /// Only one of these ends up in the request; the client picks it.
    pub fn generation_parameters(&self) -> GenerationParameters {
        GenerationParameters {
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            top_p: self.top_p,
            top_k: self.top_k,
            presence_penalty: self.presence_penalty,
            frequency_penalty: self.frequency_penalty,
        }
    }
}
