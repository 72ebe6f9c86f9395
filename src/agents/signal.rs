use crate::agents::Agent;

pub struct SignalAgent;

impl Agent for SignalAgent {
    fn name(&self) -> &str {
        "Signal-Agent"
    }

    fn system_prompt(&self) -> &str {
        concat!(
            "You are an expert XAUUSD trading assistant. ",
            "Analyze the market data and provide trading signals. ",
            "Reply with pure JSON format only: {\"action\":\"BUY|SELL|HOLD\",\"lot\":0.01,\"reason\":\"brief explanation\"}. ",
            "Never add extra text outside the JSON structure."
        )
    }
}
