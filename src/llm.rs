use async_openai::{
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::info;

use crate::config::LlmConfig;
use crate::error::{GatewayError, GatewayResult};

/// Anything that can turn a system instruction plus a user prompt into reply text.
#[async_trait]
pub trait CompletionApi: Send + Sync {
    fn model(&self) -> &str;

    async fn complete(&self, system_prompt: &str, user_input: &str) -> GatewayResult<String>;
}

#[derive(Clone)]
pub struct LLMClient {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    key_configured: bool,
}

impl LLMClient {
    pub fn new(config: &LlmConfig) -> Self {
        let mut openai = OpenAIConfig::new().with_api_key(config.api_key.clone().unwrap_or_default());
        if let Some(url) = &config.base_url {
            openai = openai.with_api_base(url);
        }
        Self {
            client: Client::with_config(openai),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            key_configured: config.key_configured(),
        }
    }
}

#[async_trait]
impl CompletionApi for LLMClient {
    fn model(&self) -> &str {
        &self.model
    }

    async fn complete(&self, system_prompt: &str, user_input: &str) -> GatewayResult<String> {
        if !self.key_configured {
            return Err(GatewayError::MissingApiKey);
        }

        info!("🤖 Sending request to LLM (Model: {})...", self.model);

        let messages: [ChatCompletionRequestMessage; 2] = [
            ChatCompletionRequestSystemMessageArgs::default()
                .content(system_prompt)
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(user_input)
                .build()?
                .into(),
        ];

        #[allow(deprecated)]
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(self.temperature)
            .max_tokens(self.max_tokens)
            .build()?;

        let response = self.client.chat().create(request).await?;

        info!("🤖 LLM Response received.");

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or(GatewayError::EmptyReply)
    }
}
