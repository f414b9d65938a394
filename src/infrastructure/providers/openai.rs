use crate::config::AiConfig;
use crate::domain::ports::{EmailDraftProvider, EnhancementError, EnhancementResult};
use crate::models::EmailDraftRequest;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

const SYSTEM_PROMPT: &str = "You are a professional email assistant specializing in leave \
applications. Take the employee's reason, rephrase it in a formal, clear and respectful \
manner, and generate a complete, well-structured email body with a proper greeting and \
closing. Use a formal but friendly tone and keep it concise.";

/// OpenAI-backed email draft provider for leave requests.
pub struct OpenAiEmailDraftProvider {
    config: AiConfig,
    client: Client,
}

impl OpenAiEmailDraftProvider {
    pub fn new(config: AiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { config, client }
    }
}

#[async_trait]
impl EmailDraftProvider for OpenAiEmailDraftProvider {
    async fn draft(&self, request: &EmailDraftRequest) -> EnhancementResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(EnhancementError::Disabled)?;

        debug!(model = %self.config.model, "Requesting AI email draft");

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(api_key)
            .json(&json!({
                "model": self.config.model,
                "messages": [
                    { "role": "system", "content": SYSTEM_PROMPT },
                    { "role": "user", "content": user_prompt(request) }
                ],
                "temperature": 0.7
            }))
            .send()
            .await
            .map_err(classify_reqwest_error)?
            .error_for_status()
            .map_err(classify_reqwest_error)?;

        let body: ChatCompletionResponse =
            response.json().await.map_err(classify_reqwest_error)?;
        let content = body
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(EnhancementError::Empty)?;

        Ok(content)
    }
}

fn user_prompt(request: &EmailDraftRequest) -> String {
    format!(
        "Create a professional leave application email with these details:\n\n\
         Employee Name: {}\n\
         Leave Type: {}\n\
         Start Date: {}\n\
         End Date: {}\n\
         Total Days: {}\n\
         Manager Name: {}\n\n\
         Employee's original reason (enhance this professionally):\n{}\n\n\
         Write the email body only, without a subject line.",
        request.user_name,
        request.leave_type,
        request.start_date.format("%B %d, %Y"),
        request.end_date.format("%B %d, %Y"),
        request.total_days(),
        request.manager_name,
        request.reason
    )
}

fn classify_reqwest_error(e: reqwest::Error) -> EnhancementError {
    if e.is_timeout() {
        EnhancementError::Timeout
    } else {
        EnhancementError::Request(e)
    }
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Debug, Deserialize)]
struct Message {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_user_prompt_includes_details() {
        let request = EmailDraftRequest {
            leave_type: "Casual Leave".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 9, 7).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2026, 9, 9).unwrap(),
            reason: "family event".to_string(),
            user_name: "Jane Doe".to_string(),
            manager_name: "Sam Lee".to_string(),
        };
        let prompt = user_prompt(&request);
        assert!(prompt.contains("Jane Doe"));
        assert!(prompt.contains("Casual Leave"));
        assert!(prompt.contains("September 07, 2026"));
        assert!(prompt.contains("Total Days: 3"));
        assert!(prompt.contains("Sam Lee"));
    }
}
