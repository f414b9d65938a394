use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub ai_timeout_secs: u64,
    pub suggestion_lookahead_days: u64,
    pub event_bus_capacity: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());

        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        let openai_api_key = env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());

        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());

        let ai_timeout_secs = env::var("AI_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidTimeout)?;

        let suggestion_lookahead_days = env::var("SUGGESTION_LOOKAHEAD_DAYS")
            .unwrap_or_else(|_| "90".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidLookahead)?;
        if suggestion_lookahead_days == 0 {
            return Err(ConfigError::InvalidLookahead);
        }

        let event_bus_capacity = env::var("EVENT_BUS_CAPACITY")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .unwrap_or(1000);

        Ok(Config {
            gemini_api_key,
            gemini_model,
            openai_api_key,
            openai_model,
            ai_timeout_secs,
            suggestion_lookahead_days,
            event_bus_capacity,
        })
    }

    /// Credentials for the leave suggestion provider.
    pub fn suggestion_ai(&self) -> AiConfig {
        AiConfig {
            api_key: self.gemini_api_key.clone(),
            model: self.gemini_model.clone(),
            timeout: Duration::from_secs(self.ai_timeout_secs),
        }
    }

    /// Credentials for the email draft provider.
    pub fn email_draft_ai(&self) -> AiConfig {
        AiConfig {
            api_key: self.openai_api_key.clone(),
            model: self.openai_model.clone(),
            timeout: Duration::from_secs(self.ai_timeout_secs),
        }
    }
}

/// Explicitly constructed AI credentials passed to a provider. Absence of
/// a key means the enhancement is never attempted.
#[derive(Clone, Debug)]
pub struct AiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub timeout: Duration,
}

impl AiConfig {
    pub fn disabled(model: impl Into<String>) -> Self {
        Self {
            api_key: None,
            model: model.into(),
            timeout: Duration::from_secs(15),
        }
    }

    pub fn enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid AI_TIMEOUT_SECONDS value")]
    InvalidTimeout,

    #[error("Invalid SUGGESTION_LOOKAHEAD_DAYS value")]
    InvalidLookahead,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_config_presence_gates_enhancement() {
        let config = Config {
            gemini_api_key: Some("key".to_string()),
            gemini_model: "gemini-1.5-flash".to_string(),
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            ai_timeout_secs: 15,
            suggestion_lookahead_days: 90,
            event_bus_capacity: 1000,
        };

        assert!(config.suggestion_ai().enabled());
        assert!(!config.email_draft_ai().enabled());
        assert_eq!(config.suggestion_ai().timeout, Duration::from_secs(15));
        assert!(!AiConfig::disabled("any").enabled());
    }
}
