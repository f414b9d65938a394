use crate::calendar::Suggestion;
use crate::config::AiConfig;
use crate::domain::ports::{EnhancementError, EnhancementResult, SuggestionProvider};
use crate::models::LeaveSnapshot;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

const GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Gemini-backed leave suggestion provider. The model receives the
/// calendar snapshot as JSON and must answer with JSON only; anything
/// else is a malformed response and the caller falls back.
pub struct GeminiSuggestionProvider {
    config: AiConfig,
    client: Client,
}

impl GeminiSuggestionProvider {
    pub fn new(config: AiConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to build HTTP client");
        Self { config, client }
    }
}

#[async_trait]
impl SuggestionProvider for GeminiSuggestionProvider {
    async fn recommend(&self, snapshot: &LeaveSnapshot) -> EnhancementResult<Vec<Suggestion>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(EnhancementError::Disabled)?;

        let prompt = build_prompt(snapshot)?;
        let url = format!("{}/{}:generateContent", GEMINI_ENDPOINT, self.config.model);

        debug!(model = %self.config.model, "Requesting AI leave suggestions");

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&json!({
                "contents": [{ "parts": [{ "text": prompt }] }]
            }))
            .send()
            .await
            .map_err(classify_reqwest_error)?
            .error_for_status()
            .map_err(classify_reqwest_error)?;

        let body: GenerateContentResponse =
            response.json().await.map_err(classify_reqwest_error)?;
        let text = body
            .candidates
            .into_iter()
            .flat_map(|c| c.content.parts)
            .find_map(|p| p.text)
            .ok_or(EnhancementError::Empty)?;

        parse_suggestion_payload(&text)
    }
}

fn build_prompt(snapshot: &LeaveSnapshot) -> EnhancementResult<String> {
    let snapshot_json = serde_json::to_string_pretty(snapshot)
        .map_err(|e| EnhancementError::Malformed(e.to_string()))?;
    Ok(format!(
        r#"You are an AI leave optimization assistant.

Using this structured calendar JSON:
{snapshot_json}

Generate at most 5 recommended leave ideas in JSON ONLY, format:
{{
  "suggestions": [
     {{
        "month": "Month Name",
        "ideas": [
           {{
             "start": "YYYY-MM-DD",
             "end": "YYYY-MM-DD",
             "reason": "brief explanation"
           }}
        ]
     }}
  ]
}}
"#
    ))
}

/// Parse the model's JSON answer into suggestions. Code fences around the
/// payload are tolerated; an empty idea list is an error so the caller
/// degrades to the deterministic path.
fn parse_suggestion_payload(text: &str) -> EnhancementResult<Vec<Suggestion>> {
    let payload: SuggestionPayload = serde_json::from_str(strip_code_fences(text))
        .map_err(|e| EnhancementError::Malformed(e.to_string()))?;

    let mut suggestions = Vec::new();
    for month_entry in payload.suggestions {
        for idea in month_entry.ideas {
            let end = idea.end.as_deref().unwrap_or(&idea.start);
            let label = if end != idea.start {
                format!("{}: {} to {}", month_entry.month, idea.start, end)
            } else {
                format!("{}: {}", month_entry.month, idea.start)
            };
            suggestions.push(Suggestion {
                label,
                explanation: idea.reason.unwrap_or_default(),
            });
        }
    }

    if suggestions.is_empty() {
        return Err(EnhancementError::Empty);
    }
    Ok(suggestions)
}

fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(inner) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let inner = inner.strip_prefix("json").unwrap_or(inner);
    inner.strip_suffix("```").unwrap_or(inner).trim()
}

fn classify_reqwest_error(e: reqwest::Error) -> EnhancementError {
    if e.is_timeout() {
        EnhancementError::Timeout
    } else {
        EnhancementError::Request(e)
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SuggestionPayload {
    #[serde(default)]
    suggestions: Vec<MonthIdeas>,
}

#[derive(Debug, Deserialize)]
struct MonthIdeas {
    month: String,
    #[serde(default)]
    ideas: Vec<Idea>,
}

#[derive(Debug, Deserialize)]
struct Idea {
    start: String,
    end: Option<String>,
    reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payload_builds_labels() {
        let text = r#"{
            "suggestions": [
                {
                    "month": "December",
                    "ideas": [
                        {"start": "2026-12-24", "end": "2026-12-24", "reason": "Bridge to Christmas"},
                        {"start": "2026-12-28", "end": "2026-12-31", "reason": "Year-end stretch"}
                    ]
                }
            ]
        }"#;
        let suggestions = parse_suggestion_payload(text).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!(suggestions[0].label, "December: 2026-12-24");
        assert_eq!(suggestions[1].label, "December: 2026-12-28 to 2026-12-31");
        assert_eq!(suggestions[1].explanation, "Year-end stretch");
    }

    #[test]
    fn test_parse_payload_tolerates_code_fences() {
        let text = "```json\n{\"suggestions\": [{\"month\": \"May\", \"ideas\": [{\"start\": \"2026-05-04\"}]}]}\n```";
        let suggestions = parse_suggestion_payload(text).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].label, "May: 2026-05-04");
    }

    #[test]
    fn test_empty_payload_is_an_error() {
        assert!(matches!(
            parse_suggestion_payload("{\"suggestions\": []}"),
            Err(EnhancementError::Empty)
        ));
    }

    #[test]
    fn test_garbage_payload_is_malformed() {
        assert!(matches!(
            parse_suggestion_payload("take leave whenever"),
            Err(EnhancementError::Malformed(_))
        ));
    }
}
