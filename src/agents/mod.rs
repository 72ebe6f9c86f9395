pub mod signal;

use crate::error::GatewayResult;
use crate::llm::CompletionApi;

use tracing::info;

pub trait Agent {
    fn name(&self) -> &str;
    fn system_prompt(&self) -> &str;

    /// Send `query` under this agent's system instruction and return the raw reply.
    async fn run(&self, query: &str, llm: &dyn CompletionApi) -> GatewayResult<String> {
        info!("🤖 [AGENT] Sending request to {} (model: {})...", self.name(), llm.model());
        let response = llm.complete(self.system_prompt(), query).await?;
        info!("🤖 [AGENT] Response from {}: {}", self.name(), response);
        Ok(response)
    }
}
