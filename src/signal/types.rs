use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::constants::decision::{
    FALLBACK_LOT, REASON_API_ERROR, REASON_INVALID_STRUCTURE, REASON_PARSE_FAILED,
    REASON_SERVER_ERROR, REASON_UNRECOGNIZED_ACTION,
};

/// Caller-supplied snapshot used to build the prompt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MarketState {
    pub symbol: String,
    pub timeframe: String,
    pub price: f64,
    pub indicators: BTreeMap<String, f64>,
    pub positions: Vec<Map<String, Value>>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Buy,
    Sell,
    Hold,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Buy => "BUY",
            Action::Sell => "SELL",
            Action::Hold => "HOLD",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BUY" => Ok(Action::Buy),
            "SELL" => Ok(Action::Sell),
            "HOLD" => Ok(Action::Hold),
            _ => Err(s.to_string()),
        }
    }
}

/// The model's answer once normalized, before it is stamped for the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Recommendation {
    pub action: Action,
    pub lot: f64,
    pub reason: String,
}

impl Recommendation {
    /// Safe default: never trade on an answer we could not understand.
    pub fn hold(reason: impl Into<String>) -> Self {
        Self {
            action: Action::Hold,
            lot: FALLBACK_LOT,
            reason: reason.into(),
        }
    }

    pub fn api_error() -> Self {
        Self::hold(REASON_API_ERROR)
    }

    pub fn parse_failed() -> Self {
        Self::hold(REASON_PARSE_FAILED)
    }

    pub fn invalid_structure() -> Self {
        Self::hold(REASON_INVALID_STRUCTURE)
    }

    pub fn unrecognized_action(raw: &str) -> Self {
        Self::hold(format!("{}: {}", REASON_UNRECOGNIZED_ACTION, raw))
    }

    pub fn server_error(message: &str) -> Self {
        Self::hold(format!("{}: {}", REASON_SERVER_ERROR, message))
    }

    /// Attach the response-time stamp and the echoed request fields.
    pub fn stamp(self, state: &MarketState) -> Decision {
        Decision {
            action: self.action,
            lot: self.lot,
            reason: self.reason,
            server_time: chrono::Utc::now().timestamp(),
            symbol: state.symbol.clone(),
            received_price: state.price,
        }
    }
}

/// Body returned by `POST /signal`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Decision {
    pub action: Action,
    pub lot: f64,
    pub reason: String,
    pub server_time: i64,
    pub symbol: String,
    pub received_price: f64,
}
