use anyhow::Result;

const DEFAULT_MODEL: &str = "gemini-1.5-pro";
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub port: u16,
    /// When set, story generation surfaces provider failures as 500
    /// instead of degrading to a null story.
    pub strict_story_errors: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_API_KEY"))
            .map_err(|_| anyhow::anyhow!("GOOGLE_API_KEY not found in environment variables"))?;

        let model = std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let base_url =
            std::env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT is not a valid port number: {}", value))?,
            Err(_) => DEFAULT_PORT,
        };

        let strict_story_errors = std::env::var("STRICT_STORY_ERRORS")
            .map(|v| matches!(v.as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            api_key,
            model,
            base_url,
            port,
            strict_story_errors,
        })
    }
}
