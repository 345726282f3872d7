#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use crate::endpoints::chat::{
        ChatCompletionRequest, GenerationParameter, GenerationParameters, Message, Role,
        ValidationError,
    };
    use crate::models::ModelIdentifier;

    fn conversation() -> Vec<Message> {
        vec![Message::user("Hello"), Message::assistant("Hi")]
    }

    fn build(params: GenerationParameters) -> Result<ChatCompletionRequest, ValidationError> {
        ChatCompletionRequest::new(conversation(), ModelIdentifier::default(), &params)
    }

    fn payload(params: GenerationParameters) -> Value {
        serde_json::to_value(build(params).unwrap()).unwrap()
    }

    fn optional_keys(payload: &Value) -> Vec<String> {
        payload
            .as_object()
            .unwrap()
            .keys()
            .filter(|key| *key != "model" && *key != "messages")
            .cloned()
            .collect()
    }

    fn out_of_range_field(params: GenerationParameters) -> &'static str {
        match build(params) {
            Err(ValidationError::OutOfRange { field, .. }) => field,
            other => panic!("Expected OutOfRange, got {other:?}"),
        }
    }

    #[test]
    fn test_message_serialization() {
        let value = serde_json::to_value(Message::system("Be brief")).unwrap();
        assert_eq!(value, json!({"role": "system", "content": "Be brief"}));

        let parsed: Message =
            serde_json::from_str(r#"{"role":"assistant","content":"Sure"}"#).unwrap();
        assert_eq!(parsed.role, Role::Assistant);
        assert_eq!(parsed.content, "Sure");
    }

    #[test]
    fn test_no_parameters_yields_model_and_messages_only() {
        let request = ChatCompletionRequest::new(
            vec![Message::user("Hello")],
            ModelIdentifier::Mistral7bInstruct,
            &GenerationParameters::default(),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "model": "mistral-7b-instruct",
                "messages": [{"role": "user", "content": "Hello"}]
            })
        );
    }

    #[test]
    fn test_each_single_parameter_is_included() {
        let cases = [
            (GenerationParameters::new().max_tokens(100), "max_tokens", json!(100)),
            (GenerationParameters::new().temperature(0.5), "temperature", json!(0.5)),
            (GenerationParameters::new().top_p(0.9), "top_p", json!(0.9)),
            (GenerationParameters::new().top_k(40), "top_k", json!(40)),
            (
                GenerationParameters::new().presence_penalty(-1.5),
                "presence_penalty",
                json!(-1.5),
            ),
            (
                GenerationParameters::new().frequency_penalty(1.0),
                "frequency_penalty",
                json!(1.0),
            ),
        ];

        for (params, key, expected) in cases {
            let payload = payload(params);
            assert_eq!(optional_keys(&payload), vec![key.to_string()]);
            assert_eq!(payload[key], expected, "value for {key}");
        }
    }

    #[test]
    fn test_max_tokens_wins_over_temperature() {
        let payload = payload(GenerationParameters::new().max_tokens(100).temperature(0.5));
        assert_eq!(optional_keys(&payload), vec!["max_tokens".to_string()]);
        assert_eq!(payload["max_tokens"], json!(100));
    }

    #[test]
    fn test_priority_order_drops_lower_fields() {
        let params = GenerationParameters::new()
            .top_k(10)
            .top_p(0.3)
            .frequency_penalty(0.2);
        assert_eq!(
            build(params).unwrap().parameter(),
            Some(GenerationParameter::TopP(0.3))
        );

        let params = GenerationParameters::new().top_k(10).presence_penalty(1.0);
        assert_eq!(
            build(params).unwrap().parameter(),
            Some(GenerationParameter::TopK(10))
        );
    }

    #[test]
    fn test_dropped_fields_are_not_range_checked() {
        // temperature is out of range but max_tokens takes priority
        let request = build(GenerationParameters::new().max_tokens(10).temperature(9.0)).unwrap();
        assert_eq!(request.parameter(), Some(GenerationParameter::MaxTokens(10)));
    }

    #[test]
    fn test_top_p_is_sent_under_its_own_key() {
        let payload = payload(GenerationParameters::new().top_p(0.25));
        assert_eq!(payload["top_p"], json!(0.25));
        assert!(payload.get("top_k").is_none());
    }

    #[test]
    fn test_penalties_are_mutually_exclusive() {
        for (presence, frequency) in [(0.5, 0.5), (-2.0, 100.0), (1e-9, -1e-9)] {
            let params = GenerationParameters::new()
                .presence_penalty(presence)
                .frequency_penalty(frequency);
            assert_eq!(build(params), Err(ValidationError::MutuallyExclusivePenalties));
        }
    }

    #[test]
    fn test_penalty_exclusivity_checked_before_selection() {
        let params = GenerationParameters::new()
            .max_tokens(50)
            .presence_penalty(0.5)
            .frequency_penalty(0.5);
        assert_eq!(build(params), Err(ValidationError::MutuallyExclusivePenalties));
    }

    #[test]
    fn test_zero_penalty_does_not_conflict() {
        let params = GenerationParameters::new()
            .presence_penalty(0.0)
            .frequency_penalty(0.7);
        assert_eq!(
            build(params).unwrap().parameter(),
            Some(GenerationParameter::PresencePenalty(0.0))
        );
    }

    #[test]
    fn test_out_of_range_names_the_field() {
        assert_eq!(out_of_range_field(GenerationParameters::new().temperature(2.5)), "temperature");
        assert_eq!(out_of_range_field(GenerationParameters::new().temperature(-0.1)), "temperature");
        assert_eq!(out_of_range_field(GenerationParameters::new().top_p(1.5)), "top_p");
        assert_eq!(out_of_range_field(GenerationParameters::new().top_p(-0.5)), "top_p");
        assert_eq!(out_of_range_field(GenerationParameters::new().top_k(3000)), "top_k");
        assert_eq!(out_of_range_field(GenerationParameters::new().top_k(-1)), "top_k");
        assert_eq!(
            out_of_range_field(GenerationParameters::new().presence_penalty(2.1)),
            "presence_penalty"
        );
        assert_eq!(
            out_of_range_field(GenerationParameters::new().presence_penalty(-3.0)),
            "presence_penalty"
        );
        assert_eq!(out_of_range_field(GenerationParameters::new().temperature(f64::NAN)), "temperature");
    }

    #[test]
    fn test_out_of_range_carries_value_and_bound() {
        let err = build(GenerationParameters::new().top_k(3000)).unwrap_err();
        match &err {
            ValidationError::OutOfRange { value, allowed, .. } => {
                assert_eq!(*value, 3000.0);
                assert_eq!(allowed.min, 0.0);
                assert_eq!(allowed.max, 2048.0);
            }
            other => panic!("Expected OutOfRange, got {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "top_k must be between 0.0 and 2048.0 included, got 3000"
        );
    }

    #[test]
    fn test_bounds_are_inclusive() {
        for params in [
            GenerationParameters::new().temperature(0.0),
            GenerationParameters::new().temperature(2.0),
            GenerationParameters::new().top_p(0.0),
            GenerationParameters::new().top_p(1.0),
            GenerationParameters::new().top_k(0),
            GenerationParameters::new().top_k(2048),
            GenerationParameters::new().presence_penalty(-2.0),
            GenerationParameters::new().presence_penalty(2.0),
        ] {
            assert!(build(params).is_ok(), "{params:?} should be accepted");
        }
    }

    #[test]
    fn test_frequency_penalty_is_unchecked() {
        for value in [-1000.0, -2.5, 0.0, 2.5, 1e6] {
            let request = build(GenerationParameters::new().frequency_penalty(value)).unwrap();
            assert_eq!(
                request.parameter(),
                Some(GenerationParameter::FrequencyPenalty(value))
            );
        }
    }

    #[test]
    fn test_build_is_deterministic_and_leaves_inputs_untouched() {
        let messages = conversation();
        let params = GenerationParameters::new().temperature(1.2).top_k(5);

        let first = ChatCompletionRequest::new(messages.clone(), ModelIdentifier::Pplx70bChat, &params);
        let second = ChatCompletionRequest::new(messages.clone(), ModelIdentifier::Pplx70bChat, &params);

        assert_eq!(first, second);
        assert_eq!(params, GenerationParameters::new().temperature(1.2).top_k(5));
        assert_eq!(first.unwrap().messages(), messages.as_slice());
    }

    #[test]
    fn test_message_order_is_preserved() {
        let request = ChatCompletionRequest::builder()
            .message(Message::system("System"))
            .message(Message::user("First"))
            .message(Message::assistant("Reply"))
            .message(Message::user("Second"))
            .build()
            .unwrap();

        let payload = serde_json::to_value(&request).unwrap();
        let contents: Vec<&str> = payload["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|message| message["content"].as_str().unwrap())
            .collect();
        assert_eq!(contents, ["System", "First", "Reply", "Second"]);
    }

    #[test]
    fn test_empty_messages_pass_through() {
        let request = ChatCompletionRequest::builder().build().unwrap();
        assert!(request.messages().is_empty());
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"model": "mistral-7b-instruct", "messages": []})
        );
    }

    #[test]
    fn test_chat_request_builder_pattern() {
        let request = ChatCompletionRequest::builder()
            .model(ModelIdentifier::CodeLlama34bInstruct)
            .messages(conversation())
            .temperature(0.5)
            .max_tokens(100)
            .build()
            .unwrap();

        assert_eq!(request.model(), ModelIdentifier::CodeLlama34bInstruct);
        assert_eq!(request.messages().len(), 2);
        assert_eq!(request.parameter(), Some(GenerationParameter::MaxTokens(100)));
    }

    #[test]
    fn test_builder_surfaces_validation_errors() {
        let err = ChatCompletionRequest::builder()
            .messages(conversation())
            .presence_penalty(0.5)
            .frequency_penalty(0.5)
            .build()
            .unwrap_err();
        assert_eq!(err, ValidationError::MutuallyExclusivePenalties);
    }
}
