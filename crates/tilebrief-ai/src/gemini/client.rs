//! Gemini API client struct, request building, and response parsing.

use serde_json::{json, Value};

use crate::tools::to_gemini_tool;
use crate::{
    AiError, AiResponse, GroundingSource, Message, Part, Role, TokenUsage, ToolCall,
    ToolDefinition,
};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.api_base, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, messages: &[Message], tools: &[ToolDefinition]) -> Value {
        let mut contents = Vec::new();

        for msg in messages {
            let role = match msg.role {
                Role::User | Role::Tool => "user",
                Role::Assistant => "model",
                Role::System => continue, // handled via systemInstruction
            };
            let parts: Vec<Value> = msg.parts.iter().map(part_to_json).collect();
            contents.push(json!({
                "role": role,
                "parts": parts,
            }));
        }

        let mut body = json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(system) = messages.iter().find(|m| m.role == Role::System) {
            body["systemInstruction"] = json!({
                "parts": [{ "text": system.text() }]
            });
        }

        let mut tool_entries = Vec::new();
        if !tools.is_empty() {
            let tool_defs: Vec<_> = tools.iter().map(to_gemini_tool).collect();
            tool_entries.push(json!({ "functionDeclarations": tool_defs }));
        }
        if self.config.google_search {
            tool_entries.push(json!({ "googleSearch": {} }));
        }
        if !tool_entries.is_empty() {
            body["tools"] = Value::Array(tool_entries);
        }

        body
    }

    /// Parse a Gemini response.
    pub(crate) fn parse_response(&self, json: Value) -> Result<AiResponse, AiError> {
        let candidates = json["candidates"].as_array().ok_or_else(|| {
            match json["promptFeedback"]["blockReason"].as_str() {
                Some(reason) => AiError::ApiError(format!("prompt blocked: {reason}")),
                None => AiError::ParseError("no candidates in response".to_string()),
            }
        })?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        let parts = first["content"]["parts"]
            .as_array()
            .cloned()
            .unwrap_or_default();

        let mut content = String::new();
        let mut tool_calls = Vec::new();

        for part in &parts {
            // Thought summaries are not part of the answer.
            if part["thought"].as_bool() == Some(true) {
                continue;
            }
            if let Some(text) = part["text"].as_str() {
                content.push_str(text);
            }
            if let Some(fc) = part.get("functionCall") {
                tool_calls.push(ToolCall {
                    id: fc["id"]
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                    name: fc["name"].as_str().unwrap_or("").to_string(),
                    arguments: fc["args"].clone(),
                });
            }
        }

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(AiResponse {
            content,
            tool_calls,
            usage,
            sources: parse_grounding_sources(&first["groundingMetadata"]),
        })
    }
}

fn part_to_json(part: &Part) -> Value {
    match part {
        Part::Text(text) => json!({ "text": text }),
        Part::FunctionCall(call) => json!({
            "functionCall": {
                "name": call.name,
                "args": call.arguments,
            }
        }),
        Part::FunctionResponse(result) => json!({
            "functionResponse": {
                "name": result.name,
                "response": result.response,
            }
        }),
    }
}

/// Web citations from `groundingMetadata.groundingChunks`, in order.
///
/// Chunks without a web reference or with an empty uri are skipped; a
/// missing title falls back to the uri.
pub(crate) fn parse_grounding_sources(metadata: &Value) -> Vec<GroundingSource> {
    let Some(chunks) = metadata["groundingChunks"].as_array() else {
        return Vec::new();
    };

    chunks
        .iter()
        .filter_map(|chunk| {
            let web = chunk.get("web")?;
            let uri = web["uri"].as_str().filter(|u| !u.is_empty())?;
            let title = web["title"]
                .as_str()
                .filter(|t| !t.is_empty())
                .unwrap_or(uri);
            Some(GroundingSource {
                uri: uri.to_string(),
                title: title.to_string(),
            })
        })
        .collect()
}
