//! Error types for the signal gateway
//!
//! None of these reach an HTTP caller: the API layer folds every failure
//! into a HOLD decision. They exist so library code can use `?`.

use async_openai::error::OpenAIError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("OpenAI API key is not configured")]
    MissingApiKey,

    #[error("Upstream completion error: {0}")]
    Upstream(#[from] OpenAIError),

    #[error("Upstream returned no completion text")]
    EmptyReply,

    #[error("Failed to build prompt: {0}")]
    Prompt(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type GatewayResult<T> = Result<T, GatewayError>;
