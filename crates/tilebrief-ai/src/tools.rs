//! The project context tool.
//!
//! The model calls `contextProjectTool` to report the running project
//! brief. There is nothing to execute: the argument is read back and the
//! call is acknowledged.

use crate::{ToolCall, ToolDefinition, ToolResult};

/// Name under which the context tool is declared.
pub const CONTEXT_TOOL_NAME: &str = "contextProjectTool";

/// Declaration of the project context tool.
pub fn context_project_tool() -> ToolDefinition {
    ToolDefinition {
        name: CONTEXT_TOOL_NAME.to_string(),
        description: "Creates and continuously updates the single, holistic context for the \
                      entire project. On the first turn, establish the project's core goal. \
                      On subsequent turns, integrate the user's new request to refine and \
                      expand the existing project context, maintaining a coherent brief."
            .to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {
                "context": {
                    "type": "string",
                    "description": "A concise summary of the project's global purpose and \
                                    what it is about, updated with the latest user input."
                }
            },
            "required": ["context"]
        }),
    }
}

/// Tools declared for a conversation in the given mode.
pub fn tools_for_mode(use_context_tool: bool) -> Vec<ToolDefinition> {
    if use_context_tool {
        vec![context_project_tool()]
    } else {
        Vec::new()
    }
}

pub fn is_context_call(call: &ToolCall) -> bool {
    call.name == CONTEXT_TOOL_NAME
}

/// The `context` argument of a context tool call.
///
/// `None` for other tools, a missing or non-string argument, or an empty
/// string.
pub fn extract_context(call: &ToolCall) -> Option<String> {
    if !is_context_call(call) {
        return None;
    }
    call.arguments
        .get("context")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Acknowledgement sent back after a context tool call.
pub fn context_tool_ack() -> ToolResult {
    ToolResult {
        name: CONTEXT_TOOL_NAME.to_string(),
        response: serde_json::json!({ "success": true }),
    }
}

/// Convert a tool definition to the Gemini API format.
pub fn to_gemini_tool(tool: &ToolDefinition) -> serde_json::Value {
    serde_json::json!({
        "name": tool.name,
        "description": tool.description,
        "parameters": tool.parameters,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(name: &str, arguments: serde_json::Value) -> ToolCall {
        ToolCall {
            id: "id".into(),
            name: name.into(),
            arguments,
        }
    }

    #[test]
    fn declaration_requires_string_context() {
        let tool = context_project_tool();
        assert_eq!(tool.name, "contextProjectTool");
        assert_eq!(tool.parameters["required"], json!(["context"]));
        assert_eq!(tool.parameters["properties"]["context"]["type"], "string");
        assert!(tool.description.contains("first turn"));
    }

    #[test]
    fn tools_for_mode_toggles_declaration() {
        assert_eq!(tools_for_mode(true).len(), 1);
        assert!(tools_for_mode(false).is_empty());
    }

    #[test]
    fn extracts_string_context() {
        let c = call(CONTEXT_TOOL_NAME, json!({ "context": "Trip planning for Lisbon" }));
        assert_eq!(extract_context(&c).as_deref(), Some("Trip planning for Lisbon"));
    }

    #[test]
    fn ignores_other_tools() {
        let c = call("otherTool", json!({ "context": "x" }));
        assert!(!is_context_call(&c));
        assert_eq!(extract_context(&c), None);
    }

    #[test]
    fn ignores_malformed_arguments() {
        assert_eq!(extract_context(&call(CONTEXT_TOOL_NAME, json!({}))), None);
        assert_eq!(
            extract_context(&call(CONTEXT_TOOL_NAME, json!({ "context": 42 }))),
            None
        );
        assert_eq!(
            extract_context(&call(CONTEXT_TOOL_NAME, json!({ "context": "" }))),
            None
        );
        assert_eq!(
            extract_context(&call(CONTEXT_TOOL_NAME, serde_json::Value::Null)),
            None
        );
    }

    #[test]
    fn ack_reports_success() {
        let ack = context_tool_ack();
        assert_eq!(ack.name, CONTEXT_TOOL_NAME);
        assert_eq!(ack.response, json!({ "success": true }));
    }

    #[test]
    fn gemini_format_uses_parameters_key() {
        let v = to_gemini_tool(&context_project_tool());
        assert_eq!(v["name"], CONTEXT_TOOL_NAME);
        assert!(v.get("parameters").is_some());
    }
}
