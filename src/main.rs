use anyhow::Context;
use clap::Parser;
use flexi_logger::{FileSpec, Logger, WriteMode};
use log::{debug, info};
use perplexity::{ClientConfig, Message, ModelIdentifier, PerplexityClient};

mod cli;

use cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut logger = Logger::try_with_str(&cli.log_level)?.write_mode(WriteMode::BufferAndFlush);
    logger = if cli.log_to_file {
        logger.log_to_file(FileSpec::default())
    } else {
        logger.log_to_stderr()
    };
    let _logger = logger.start()?;

    if cli.list_models {
        for model in ModelIdentifier::ALL {
            println!("{model}");
        }
        return Ok(());
    }

    let api_key = cli
        .api_key
        .clone()
        .context("API key not set, use --api-key or PERPLEXITY_API_KEY")?;
    let prompt = cli.prompt.clone().context("No prompt given")?;

    let mut messages = Vec::new();
    if let Some(system) = &cli.system {
        messages.push(Message::system(system.as_str()));
    }
    messages.push(Message::user(prompt));

    let config = ClientConfig::new(api_key).with_base_url(cli.base_url.as_str());
    info!("Sending chat completion to {}", config.base_url);
    debug!("Using model {}", cli.model);

    let client = PerplexityClient::new(config);
    let response = client
        .chat_completion(messages, cli.model, &cli.generation_parameters())
        .await
        .context("Chat completion failed")?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
