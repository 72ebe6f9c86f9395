use crate::error::GatewayResult;

use super::types::MarketState;

/// Render the user prompt for one market snapshot.
pub fn build_user_prompt(state: &MarketState) -> GatewayResult<String> {
    let indicators = serde_json::to_string(&state.indicators)?;
    let positions = serde_json::to_string(&state.positions)?;

    Ok(format!(
        "Symbol: {}\n\
         Timeframe: {}\n\
         Current Price: {}\n\
         Technical Indicators: {}\n\
         Open Positions: {}\n\
         Based on this data, what trading action should we take? \
         Consider risk management and current market conditions.",
        state.symbol, state.timeframe, state.price, indicators, positions
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_prompt_embeds_snapshot() {
        let state: MarketState = serde_json::from_value(json!({
            "symbol": "XAUUSD",
            "timeframe": "M15",
            "price": 2345.5,
            "indicators": {"rsi": 61.2, "ema_50": 2330.0},
            "positions": [{"ticket": 1, "type": "BUY", "lot": 0.02}]
        }))
        .unwrap();

        let prompt = build_user_prompt(&state).unwrap();
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(lines[0], "Symbol: XAUUSD");
        assert_eq!(lines[1], "Timeframe: M15");
        assert_eq!(lines[2], "Current Price: 2345.5");
        assert_eq!(lines[3], r#"Technical Indicators: {"ema_50":2330.0,"rsi":61.2}"#);
        assert!(lines[4].starts_with("Open Positions: [{"));
        assert!(lines[4].contains(r#""ticket":1"#));
        assert!(lines[5].starts_with("Based on this data"));
        assert!(prompt.ends_with("current market conditions."));
    }

    #[test]
    fn test_prompt_with_empty_collections() {
        let state = MarketState {
            symbol: "EURUSD".to_string(),
            timeframe: "H1".to_string(),
            price: 1.0842,
            indicators: Default::default(),
            positions: vec![],
        };

        let prompt = build_user_prompt(&state).unwrap();
        assert!(prompt.contains("Technical Indicators: {}\n"));
        assert!(prompt.contains("Open Positions: []\n"));
    }
}
