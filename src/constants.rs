//! Fixed values shared by the gateway.

/// Completion request defaults
pub mod llm {
    pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

    /// Low temperature keeps the model close to the requested JSON shape
    pub const DEFAULT_TEMPERATURE: f32 = 0.2;

    /// A decision object fits comfortably in 100 tokens
    pub const DEFAULT_MAX_TOKENS: u32 = 100;

    pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
    pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
    pub const MODEL_ENV: &str = "OPENAI_MODEL";
}

/// HTTP server defaults
pub mod server {
    pub const DEFAULT_HOST: &str = "0.0.0.0";
    pub const DEFAULT_PORT: u16 = 8000;

    pub const HOST_ENV: &str = "HOST";
    pub const PORT_ENV: &str = "PORT";

    pub const CONFIG_PATH_ENV: &str = "GATEWAY_CONFIG";
    pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

    pub const ROOT_MESSAGE: &str = "AI Trading Server is running";
}

/// Decision defaults and fallback reasons
pub mod decision {
    /// Lot used when the model omits one
    pub const DEFAULT_LOT: f64 = 0.01;

    /// Lot attached to every HOLD fallback
    pub const FALLBACK_LOT: f64 = 0.0;

    pub const REASON_API_ERROR: &str = "API error";
    pub const REASON_PARSE_FAILED: &str = "JSON parsing failed";
    pub const REASON_INVALID_STRUCTURE: &str = "Invalid response structure";
    pub const REASON_UNRECOGNIZED_ACTION: &str = "Unrecognized action";
    pub const REASON_SERVER_ERROR: &str = "Server error";
}
