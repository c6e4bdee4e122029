use std::env;

use dotenv::dotenv;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            model: DEFAULT_MODEL.to_owned(),
            api_key: None,
        }
    }
}

impl GeminiConfig {
    /// Reads `GEMINI_API_KEY`, `GEMINI_MODEL` and `GEMINI_BASE_URL`, loading a
    /// `.env` file first if one is present.
    pub fn from_env() -> Self {
        dotenv().ok();
        let defaults = Self::default();
        Self {
            base_url: env::var("GEMINI_BASE_URL").unwrap_or(defaults.base_url),
            model: env::var("GEMINI_MODEL").unwrap_or(defaults.model),
            api_key: env::var("GEMINI_API_KEY").ok().filter(|key| !key.is_empty()),
        }
    }

    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}
