use serde::{Deserialize, Serialize};

use super::CompletionSettings;
use super::provider::{AssistantInput, AssistantOutput, LlmError, LlmProvider, LlmResult};
use crate::http::client::HttpClient;
use async_trait::async_trait;

/// Chat-completion adapter for the Groq OpenAI-compatible API.
#[derive(Debug, Clone)]
pub struct GroqProvider {
    http: HttpClient,
    api_key: String,
    settings: CompletionSettings,
    base_url: String,
}

impl GroqProvider {
    pub fn new(
        http: HttpClient,
        api_key: Option<String>,
        settings: CompletionSettings,
        base_url: String,
    ) -> LlmResult<Self> {
        let api_key = api_key
            .filter(|v| !v.trim().is_empty())
            .ok_or(LlmError::MissingApiKey)?;

        Ok(Self {
            http,
            api_key,
            settings,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/openai/v1/chat/completions", self.base_url)
    }

    fn build_request(&self, input: &AssistantInput) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: self.settings.render_prompt(&input.user_query),
            }],
            temperature: self.settings.temperature,
            max_tokens: self.settings.max_tokens,
        }
    }

    fn extract_text(resp: ChatCompletionResponse) -> LlmResult<String> {
        for choice in resp.choices {
            let text = choice.message.content.trim();
            if !text.is_empty() {
                return Ok(text.to_string());
            }
        }

        Err(LlmError::EmptyResponse)
    }
}

#[async_trait]
impl LlmProvider for GroqProvider {
    async fn generate(&self, input: AssistantInput) -> LlmResult<AssistantOutput> {
        let payload = self.build_request(&input);
        let bearer = format!("Bearer {}", self.api_key);
        let response = self
            .http
            .post_json(
                &self.endpoint(),
                &[],
                &[("Authorization", bearer.as_str())],
                &payload,
            )
            .await
            .map_err(|err| LlmError::Transport(err.to_string()))?;

        if !(200..300).contains(&response.status) {
            let body = response.body.chars().take(400).collect::<String>();
            return Err(LlmError::HttpStatus {
                status: response.status,
                body,
            });
        }

        let parsed = serde_json::from_str::<ChatCompletionResponse>(&response.body)
            .map_err(|err| LlmError::Parse(err.to_string()))?;
        let text = Self::extract_text(parsed)?;
        Ok(AssistantOutput { text })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}
