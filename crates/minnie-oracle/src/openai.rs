//! OpenAI chat-completions provider

use crate::provider::{FandomOracle, OracleError, OracleResult};
use minnie_domain::Fandom;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 500;
const TEMPERATURE: f32 = 0.7;

pub struct OpenAiOracle {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl OpenAiOracle {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: OPENAI_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

fn system_prompt(fandom: &Fandom) -> String {
    format!(
        "You are a knowledgeable expert on music fandoms, fan culture, and artist communities.\n\
         Focus on providing accurate, respectful information about \"{}\", which is the fanbase of \"{}\".\n\
         Include relevant information about the fandom's history, notable moments, traditions, online presence, and community values.\n\
         Keep your answers concise (under 250 words), informative, and engaging.\n\
         If you don't have specific information about this fandom, provide general insights about similar fan communities while being transparent about limitations.\n\
         Do not make up false information or fabricate specific events that didn't happen.",
        fandom.fanbase, fandom.artist
    )
}

/// Map an upstream failure onto the oracle error taxonomy. Quota
/// exhaustion arrives either as HTTP 429 or as an `insufficient_quota`
/// error code in the body.
pub fn classify_failure(status: u16, body: &str) -> OracleError {
    let parsed: Option<ApiErrorBody> = serde_json::from_str(body).ok();
    let (message, code) = parsed
        .and_then(|b| b.error)
        .map(|e| (e.message, e.code))
        .unwrap_or_else(|| (body.to_string(), None));

    let quota_coded = code.as_deref() == Some("insufficient_quota")
        || message.to_lowercase().contains("quota");
    if status == 429 || quota_coded {
        return OracleError::QuotaExceeded(message);
    }
    if status == 401 {
        return OracleError::AuthFailed(message);
    }
    OracleError::RequestFailed(format!("{}: {}", status, message))
}

#[async_trait::async_trait]
impl FandomOracle for OpenAiOracle {
    fn name(&self) -> &str {
        "openai"
    }

    async fn ask(&self, fandom: &Fandom, question: &str) -> OracleResult<String> {
        debug!(
            "asking about {} ({}): {}",
            fandom.fanbase, fandom.artist, question
        );

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: system_prompt(fandom),
                },
                ChatMessage {
                    role: "user".into(),
                    content: question.to_string(),
                },
            ],
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("openai error {}: {}", status, error_text);
            return Err(classify_failure(status.as_u16(), &error_text));
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| OracleError::InvalidResponse("no choices in response".into()))
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: Option<ApiError>,
}

#[derive(Deserialize)]
struct ApiError {
    message: String,
    code: Option<String>,
}
