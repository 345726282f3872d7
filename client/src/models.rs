use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Models accepted by the chat completions endpoint.
///
/// The set is closed: adding or removing a variant changes the wire contract.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModelIdentifier {
    #[serde(rename = "pplx-7b-chat")]
    Pplx7bChat,
    #[serde(rename = "pplx-70b-chat")]
    Pplx70bChat,
    #[serde(rename = "pplx-7b-online")]
    Pplx7bOnline,
    #[serde(rename = "pplx-70b-online")]
    Pplx70bOnline,
    #[serde(rename = "llama-2-70b-chat")]
    Llama2_70bChat,
    #[serde(rename = "codellama-34b-instruct")]
    CodeLlama34bInstruct,
    #[default]
    #[serde(rename = "mistral-7b-instruct")]
    Mistral7bInstruct,
    #[serde(rename = "mixtral-8x7b-instruct")]
    Mixtral8x7bInstruct,
}

impl ModelIdentifier {
    /// Every supported model, in declaration order.
    pub const ALL: [ModelIdentifier; 8] = [
        ModelIdentifier::Pplx7bChat,
        ModelIdentifier::Pplx70bChat,
        ModelIdentifier::Pplx7bOnline,
        ModelIdentifier::Pplx70bOnline,
        ModelIdentifier::Llama2_70bChat,
        ModelIdentifier::CodeLlama34bInstruct,
        ModelIdentifier::Mistral7bInstruct,
        ModelIdentifier::Mixtral8x7bInstruct,
    ];

    /// The identifier as sent in the `model` field.
    pub const fn as_str(self) -> &'static str {
        match self {
            ModelIdentifier::Pplx7bChat => "pplx-7b-chat",
            ModelIdentifier::Pplx70bChat => "pplx-70b-chat",
            ModelIdentifier::Pplx7bOnline => "pplx-7b-online",
            ModelIdentifier::Pplx70bOnline => "pplx-70b-online",
            ModelIdentifier::Llama2_70bChat => "llama-2-70b-chat",
            ModelIdentifier::CodeLlama34bInstruct => "codellama-34b-instruct",
            ModelIdentifier::Mistral7bInstruct => "mistral-7b-instruct",
            ModelIdentifier::Mixtral8x7bInstruct => "mixtral-8x7b-instruct",
        }
    }
}

impl fmt::Display for ModelIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown model: {0}")]
pub struct UnknownModel(pub String);

impl FromStr for ModelIdentifier {
    type Err = UnknownModel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModelIdentifier::ALL
            .into_iter()
            .find(|model| model.as_str() == s)
            .ok_or_else(|| UnknownModel(s.to_string()))
    }
}
