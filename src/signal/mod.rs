pub mod parse;
pub mod prompt;
pub mod service;
pub mod types;

pub use service::SignalService;
pub use types::{Action, Decision, MarketState, Recommendation};

#[cfg(test)]
mod service_tests;
