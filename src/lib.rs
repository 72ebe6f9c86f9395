//! Signal Gateway - HTTP front for LLM trading signals
//!
//! Accepts a market snapshot, asks an OpenAI-compatible completion API for a
//! trading call, and returns a normalized decision. Every failure degrades to
//! a HOLD decision.

pub mod agents;
pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod llm;
pub mod signal;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{GatewayError, GatewayResult};
pub use llm::{CompletionApi, LLMClient};
pub use signal::{Action, Decision, MarketState, SignalService};
