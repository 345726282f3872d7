use super::error::{AllowedRange, ValidationError};

pub const TEMPERATURE_RANGE: AllowedRange = AllowedRange::new(0.0, 2.0);
pub const TOP_P_RANGE: AllowedRange = AllowedRange::new(0.0, 1.0);
pub const TOP_K_RANGE: AllowedRange = AllowedRange::new(0.0, 2048.0);
pub const PRESENCE_PENALTY_RANGE: AllowedRange = AllowedRange::new(-2.0, 2.0);

/// Optional generation settings supplied by the caller.
///
/// Any combination may be set, but only one of them reaches the request body: see
/// [`GenerationParameters::select`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GenerationParameters {
    /// Upper bound on generated tokens.
    pub max_tokens: Option<u32>,
    /// Sampling temperature, 0 to 2.
    pub temperature: Option<f64>,
    /// Nucleus sampling mass, 0 to 1.
    pub top_p: Option<f64>,
    /// Number of highest probability tokens kept, 0 to 2048.
    pub top_k: Option<i64>,
    /// -2.0 to 2.0. Cannot be combined with `frequency_penalty`.
    pub presence_penalty: Option<f64>,
    /// Unbounded. Cannot be combined with `presence_penalty`.
    pub frequency_penalty: Option<f64>,
}

impl GenerationParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn top_k(mut self, top_k: i64) -> Self {
        self.top_k = Some(top_k);
        self
    }

    pub fn presence_penalty(mut self, presence_penalty: f64) -> Self {
        self.presence_penalty = Some(presence_penalty);
        self
    }

    pub fn frequency_penalty(mut self, frequency_penalty: f64) -> Self {
        self.frequency_penalty = Some(frequency_penalty);
        self
    }

    /// Picks the one parameter that goes into the request and validates it.
    ///
    /// The penalties are checked for exclusivity first; a penalty set to zero does not
    /// count. Then the first present field in the order `max_tokens`, `temperature`,
    /// `top_p`, `top_k`, `presence_penalty`, `frequency_penalty` is selected and
    /// range checked. Every other field is ignored.
    pub fn select(&self) -> Result<Option<GenerationParameter>, ValidationError> {
        let is_set = |penalty: Option<f64>| penalty.is_some_and(|value| value != 0.0);
        if is_set(self.presence_penalty) && is_set(self.frequency_penalty) {
            return Err(ValidationError::MutuallyExclusivePenalties);
        }

        let candidates = [
            self.max_tokens.map(GenerationParameter::MaxTokens),
            self.temperature.map(GenerationParameter::Temperature),
            self.top_p.map(GenerationParameter::TopP),
            self.top_k.map(GenerationParameter::TopK),
            self.presence_penalty.map(GenerationParameter::PresencePenalty),
            self.frequency_penalty.map(GenerationParameter::FrequencyPenalty),
        ];

        match candidates.into_iter().flatten().next() {
            Some(parameter) => parameter.validate().map(Some),
            None => Ok(None),
        }
    }
}

/// The single optional field carried by a request body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GenerationParameter {
    MaxTokens(u32),
    Temperature(f64),
    TopP(f64),
    TopK(i64),
    PresencePenalty(f64),
    FrequencyPenalty(f64),
}

impl GenerationParameter {
    /// JSON key of the field.
    pub const fn name(&self) -> &'static str {
        match self {
            GenerationParameter::MaxTokens(_) => "max_tokens",
            GenerationParameter::Temperature(_) => "temperature",
            GenerationParameter::TopP(_) => "top_p",
            GenerationParameter::TopK(_) => "top_k",
            GenerationParameter::PresencePenalty(_) => "presence_penalty",
            GenerationParameter::FrequencyPenalty(_) => "frequency_penalty",
        }
    }

    /// Bound the value must fall in, if the API documents one.
    pub const fn allowed_range(&self) -> Option<AllowedRange> {
        match self {
            GenerationParameter::Temperature(_) => Some(TEMPERATURE_RANGE),
            GenerationParameter::TopP(_) => Some(TOP_P_RANGE),
            GenerationParameter::TopK(_) => Some(TOP_K_RANGE),
            GenerationParameter::PresencePenalty(_) => Some(PRESENCE_PENALTY_RANGE),
            GenerationParameter::MaxTokens(_) | GenerationParameter::FrequencyPenalty(_) => None,
        }
    }

    fn as_f64(&self) -> f64 {
        match *self {
            GenerationParameter::MaxTokens(value) => f64::from(value),
            GenerationParameter::TopK(value) => value as f64,
            GenerationParameter::Temperature(value)
            | GenerationParameter::TopP(value)
            | GenerationParameter::PresencePenalty(value)
            | GenerationParameter::FrequencyPenalty(value) => value,
        }
    }

    /// Returns the parameter unchanged if it lies within its allowed range.
    pub fn validate(self) -> Result<Self, ValidationError> {
        match self.allowed_range() {
            Some(allowed) if !allowed.contains(self.as_f64()) => {
                Err(ValidationError::OutOfRange {
                    field: self.name(),
                    value: self.as_f64(),
                    allowed,
                })
            }
            _ => Ok(self),
        }
    }
}
