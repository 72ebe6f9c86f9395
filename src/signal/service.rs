use std::sync::Arc;
use tracing::{error, info};

use crate::agents::{signal::SignalAgent, Agent};
use crate::error::GatewayResult;
use crate::llm::CompletionApi;

use super::parse::interpret_reply;
use super::prompt::build_user_prompt;
use super::types::{Decision, MarketState, Recommendation};

/// Turns market snapshots into decisions through one completion call each.
#[derive(Clone)]
pub struct SignalService {
    llm: Arc<dyn CompletionApi>,
}

impl SignalService {
    pub fn new(llm: Arc<dyn CompletionApi>) -> Self {
        Self { llm }
    }

    /// Never fails: every error path degrades to a HOLD decision.
    pub async fn get_signal(&self, state: &MarketState) -> Decision {
        info!(
            "📈 [SIGNAL] Request: {} {} @ {}",
            state.symbol, state.timeframe, state.price
        );

        let recommendation = match self.recommend(state).await {
            Ok(rec) => rec,
            Err(e) => {
                error!("❌ [SIGNAL] Server error for {}: {}", state.symbol, e);
                Recommendation::server_error(&e.to_string())
            }
        };

        let decision = recommendation.stamp(state);
        info!(
            "📈 [SIGNAL] Decision for {}: {} lot={} ({})",
            decision.symbol, decision.action, decision.lot, decision.reason
        );
        decision
    }

    async fn recommend(&self, state: &MarketState) -> GatewayResult<Recommendation> {
        let prompt = build_user_prompt(state)?;

        let raw = match SignalAgent.run(&prompt, self.llm.as_ref()).await {
            Ok(raw) => raw,
            Err(e) => {
                error!("❌ [SIGNAL] Error calling completion API: {}", e);
                return Ok(Recommendation::api_error());
            }
        };

        info!("🤖 [SIGNAL] Raw AI response: {}", raw);

        Ok(interpret_reply(&raw))
    }
}
