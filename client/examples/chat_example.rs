use perplexity::{
    ChatCompletionRequest, ClientConfig, GenerationParameters, Message, ModelIdentifier,
    PerplexityClient, PerplexityError,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let client = PerplexityClient::new(config.clone());

    println!("=== Perplexity Chat Completion Examples ===\n");

    // Example 1: default model, no generation parameters
    println!("1. Simple Chat Request:");
    let response = client
        .chat_completion(
            vec![Message::user("Hello! Can you explain what Rust is?")],
            ModelIdentifier::default(),
            &GenerationParameters::default(),
        )
        .await?;
    println!("Response: {}\n", serde_json::to_string_pretty(&response)?);

    // Example 2: builder plus the typed request chain
    println!("2. System + User Message with max_tokens:");
    let request = ChatCompletionRequest::builder()
        .model(ModelIdentifier::Pplx70bOnline)
        .message(Message::system("You are a concise programming tutor."))
        .message(Message::user("What are the main benefits of Rust's ownership system?"))
        .max_tokens(200)
        .build()?;
    let response = client
        .chat()
        .bearer_auth(&config.api_key)
        .json(request)
        .send()
        .await?;
    println!("Response: {}\n", serde_json::to_string_pretty(&response)?);

    // Example 3: rejected locally, nothing is sent
    println!("3. Invalid parameters:");
    let params = GenerationParameters::new()
        .presence_penalty(0.5)
        .frequency_penalty(0.5);
    match client
        .chat_completion(vec![Message::user("Hi")], ModelIdentifier::default(), &params)
        .await
    {
        Err(PerplexityError::Validation(err)) => println!("Rejected: {err}\n"),
        other => println!("Unexpected: {other:?}\n"),
    }

    Ok(())
}
