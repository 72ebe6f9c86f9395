//! Unit tests for SignalService with a scripted completion backend.

#[cfg(test)]
mod service_tests {
    use crate::error::{GatewayError, GatewayResult};
    use crate::llm::CompletionApi;
    use crate::signal::{Action, MarketState, SignalService};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Replays a fixed reply and records what it was asked.
    struct ScriptedCompletion {
        reply: Option<String>,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl ScriptedCompletion {
        fn replying(text: &str) -> Arc<Self> {
            Arc::new(Self {
                reply: Some(text.to_string()),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl CompletionApi for ScriptedCompletion {
        fn model(&self) -> &str {
            "scripted"
        }

        async fn complete(&self, system_prompt: &str, user_input: &str) -> GatewayResult<String> {
            self.seen
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_input.to_string()));
            self.reply.clone().ok_or(GatewayError::EmptyReply)
        }
    }

    fn market_state() -> MarketState {
        MarketState {
            symbol: "XAUUSD".to_string(),
            timeframe: "M5".to_string(),
            price: 2401.25,
            indicators: [("rsi".to_string(), 44.0)].into_iter().collect(),
            positions: vec![],
        }
    }

    #[tokio::test]
    async fn test_valid_reply_passes_through() {
        let llm = ScriptedCompletion::replying(r#"{"action":"BUY","lot":0.02,"reason":"trend"}"#);
        let service = SignalService::new(llm.clone());

        let before = chrono::Utc::now().timestamp();
        let decision = service.get_signal(&market_state()).await;

        assert_eq!(decision.action, Action::Buy);
        assert_eq!(decision.lot, 0.02);
        assert_eq!(decision.reason, "trend");
        assert_eq!(decision.symbol, "XAUUSD");
        assert_eq!(decision.received_price, 2401.25);
        assert!(decision.server_time >= before);
    }

    #[tokio::test]
    async fn test_request_carries_system_and_user_prompt() {
        let llm = ScriptedCompletion::replying(r#"{"action":"HOLD"}"#);
        let service = SignalService::new(llm.clone());

        service.get_signal(&market_state()).await;

        let seen = llm.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (system, user) = &seen[0];
        assert!(system.starts_with("You are an expert XAUUSD trading assistant."));
        assert!(system.contains(r#"{"action":"BUY|SELL|HOLD","lot":0.01,"reason":"brief explanation"}"#));
        assert!(user.starts_with("Symbol: XAUUSD\nTimeframe: M5\nCurrent Price: 2401.25\n"));
        assert!(user.contains(r#"Technical Indicators: {"rsi":44.0}"#));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_api_error_hold() {
        let service = SignalService::new(ScriptedCompletion::failing());

        let decision = service.get_signal(&market_state()).await;

        assert_eq!(decision.action, Action::Hold);
        assert_eq!(decision.lot, 0.0);
        assert_eq!(decision.reason, "API error");
        assert_eq!(decision.symbol, "XAUUSD");
        assert_eq!(decision.received_price, 2401.25);
    }

    #[tokio::test]
    async fn test_missing_key_is_api_error_hold() {
        let config = crate::config::LlmConfig::default();
        let service = SignalService::new(Arc::new(crate::llm::LLMClient::new(&config)));

        let decision = service.get_signal(&market_state()).await;

        assert_eq!(decision.action, Action::Hold);
        assert_eq!(decision.reason, "API error");
    }

    #[tokio::test]
    async fn test_non_json_reply_holds() {
        let service = SignalService::new(ScriptedCompletion::replying("not json"));

        let decision = service.get_signal(&market_state()).await;

        assert_eq!(decision.action, Action::Hold);
        assert_eq!(decision.lot, 0.0);
        assert_eq!(decision.reason, "JSON parsing failed");
    }

    #[tokio::test]
    async fn test_missing_lot_defaults() {
        let service =
            SignalService::new(ScriptedCompletion::replying(r#"{"action":"BUY","reason":"momentum"}"#));

        let decision = service.get_signal(&market_state()).await;

        assert_eq!(decision.action, Action::Buy);
        assert_eq!(decision.lot, 0.01);
        assert_eq!(decision.reason, "momentum");
    }

    #[tokio::test]
    async fn test_decision_serializes_uppercase_action() {
        let service = SignalService::new(ScriptedCompletion::replying(r#"{"action":"sell","lot":0.05}"#));

        let decision = service.get_signal(&market_state()).await;
        let body = serde_json::to_value(&decision).unwrap();

        assert_eq!(body["action"], "SELL");
        assert_eq!(body["lot"], 0.05);
        assert_eq!(body["symbol"], "XAUUSD");
        assert!(body["server_time"].is_i64());
    }
}
