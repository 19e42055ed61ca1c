use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f64 = 0.2;

/// Answer returned when the provider replies with no content at all.
pub const NO_ANSWER: &str = "No answer.";

const SYSTEM_PROMPT: &str = "You are a careful travel assistant. Use ONLY the provided web results for facts. \
     Every claim must have an inline citation like [1], [2] immediately after the sentence. \
     Prefer concrete dates, opening months, and drive durations. If data is stale or conflicting, say so briefly.";

// OpenAI chat completions wire format
#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f64,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// Client for the chat-completion provider. One call per request, no retry;
/// no explicit timeout beyond the provider client's defaults.
pub struct CompletionClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl CompletionClient {
    pub fn new(api_key: &str) -> CompletionClient {
        Self::with_base_url(api_key, "https://api.openai.com/v1")
    }

    pub fn with_base_url(api_key: &str, base_url: &str) -> CompletionClient {
        CompletionClient {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Send the fixed system instruction plus `prompt` and return the first
    /// choice's text. An empty or missing content degrades to `NO_ANSWER`
    /// rather than failing.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatCompletionRequest {
            model: MODEL,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .context("Failed to send completion request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Completion API returned {status}: {body}");
        }

        let api_response: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to parse completion response")?;

        let answer = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_ANSWER.to_string());

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_system_and_user_messages() {
        let request = ChatCompletionRequest {
            model: MODEL,
            temperature: TEMPERATURE,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: "where to?",
                },
            ],
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0.2);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "where to?");
    }

    #[test]
    fn test_response_parsing_with_content() {
        let json = r#"{"choices": [{"message": {"content": "Go in May. [1]"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content);
        assert_eq!(text.as_deref(), Some("Go in May. [1]"));
    }

    #[test]
    fn test_response_parsing_null_content() {
        let json = r#"{"choices": [{"message": {"content": null}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
