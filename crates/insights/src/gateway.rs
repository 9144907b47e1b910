use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::context::ContextBuilder;
use crate::error::{InsightError, Result};
use crate::models::HealthInsights;
use crate::traits::InsightGenerator;

const DEFAULT_BASE_URL: &str = "https://ai.gateway.lovable.dev";
const DEFAULT_MODEL: &str = "google/gemini-2.5-flash";

/// Connection settings for the OpenAI-compatible AI gateway.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl GatewayConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tools: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_choice: Option<serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Vec<ToolCall>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct FunctionCall {
    /// Arguments arrive as a JSON-encoded string, per the chat-completions
    /// tool-call convention.
    arguments: String,
}

/// Client for the external AI gateway. One outbound call per invocation; no
/// retry, no caching. Constructing it without a credential fails immediately,
/// so a missing key can never reach the network layer.
pub struct GatewayClient {
    client: Client,
    config: GatewayConfig,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(InsightError::MissingCredential);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self { client, config })
    }

    async fn chat(&self, request: &ChatRequest<'_>) -> Result<ChatResponse> {
        tracing::info!(
            "Sending request to AI gateway (model: {}, tools: {})",
            self.config.model,
            request.tools.is_some()
        );

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.config.base_url))
            .bearer_auth(&self.config.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("AI gateway error ({}): {}", status, error_text);
            return Err(status_error(status.as_u16()));
        }

        response.json::<ChatResponse>().await.map_err(|e| {
            InsightError::MalformedResponse(format!("invalid completion payload: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl InsightGenerator for GatewayClient {
    async fn generate_insights(&self, context: &str) -> Result<HealthInsights> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: ContextBuilder::system_prompt(),
                },
                ChatMessage {
                    role: "user",
                    content: context,
                },
            ],
            tools: Some(json!([insights_tool()])),
            tool_choice: Some(json!({
                "type": "function",
                "function": { "name": "generate_health_insights" }
            })),
        };

        let response = self.chat(&request).await?;
        extract_insights(response)
    }

    async fn generate_text(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            tools: None,
            tool_choice: None,
        };

        let response = self.chat(&request).await?;
        extract_text(response)
    }
}

fn status_error(code: u16) -> InsightError {
    match code {
        429 => InsightError::RateLimited,
        402 => InsightError::QuotaExhausted,
        code => InsightError::UpstreamStatus(code),
    }
}

/// The structured output schema forced on the model for the primary path.
fn insights_tool() -> serde_json::Value {
    json!({
        "type": "function",
        "function": {
            "name": "generate_health_insights",
            "description": "Generate personalized health insights and recommendations",
            "parameters": {
                "type": "object",
                "properties": {
                    "risk_level": {
                        "type": "string",
                        "enum": ["Low", "Medium", "High"],
                        "description": "Current health risk level"
                    },
                    "risk_explanation": {
                        "type": "string",
                        "description": "Brief explanation of the risk level (1-2 sentences)"
                    },
                    "risk_factors": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "factor": { "type": "string" },
                                "status": {
                                    "type": "string",
                                    "enum": ["positive", "warning", "negative"]
                                }
                            },
                            "required": ["factor", "status"]
                        },
                        "description": "3-4 specific risk factors or positive indicators"
                    },
                    "recommendations": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": { "type": "string" },
                                "description": { "type": "string" },
                                "priority": {
                                    "type": "string",
                                    "enum": ["low", "medium", "high"]
                                }
                            },
                            "required": ["title", "description", "priority"]
                        },
                        "description": "3-4 actionable recommendations"
                    }
                },
                "required": [
                    "risk_level",
                    "risk_explanation",
                    "risk_factors",
                    "recommendations"
                ]
            }
        }
    })
}

fn extract_insights(response: ChatResponse) -> Result<HealthInsights> {
    let call = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.tool_calls)
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| InsightError::MalformedResponse("no tool call in completion".to_string()))?;

    serde_json::from_str(&call.function.arguments).map_err(|e| {
        InsightError::MalformedResponse(format!("tool arguments did not match schema: {}", e))
    })
}

fn extract_text(response: ChatResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.is_empty())
        .ok_or_else(|| InsightError::MalformedResponse("no content in completion".to_string()))
}
