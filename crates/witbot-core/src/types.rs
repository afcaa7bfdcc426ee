//! Wire types for the upstream vendor APIs.
//!
//! Every provider in the registry speaks one of two JSON dialects: the
//! OpenAI-style `/chat/completions` envelope or the newer `/responses`
//! envelope. Both request and response bodies are modeled here as typed
//! structs so format errors surface at compile time instead of runtime.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────

/// A single conversational turn sent to a vendor.
///
/// The router only ever sends two turns per call: the persona system
/// prompt followed by the user's question.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "role")]
pub enum ChatMessage {
    #[serde(rename = "system")]
    System { content: String },

    #[serde(rename = "user")]
    User { content: String },
}

impl ChatMessage {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        ChatMessage::System {
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        ChatMessage::User {
            content: content.into(),
        }
    }
}

// ─────────────────────────────────────────────
// Request bodies
// ─────────────────────────────────────────────

/// Request body for an OpenAI-compatible `/chat/completions` endpoint.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Request body for the `/responses` endpoint dialect.
///
/// Same turns, different field name (`input`), and no response-length
/// ceiling — that API manages its own.
#[derive(Debug, Serialize)]
pub struct ResponsesRequest {
    pub model: String,
    pub input: Vec<ChatMessage>,
    pub temperature: f64,
}

// ─────────────────────────────────────────────
// Response envelopes
// ─────────────────────────────────────────────

/// `/chat/completions` response — the answer lives at
/// `choices[0].message.content`.
#[derive(Debug, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<CompletionChoice>,
}

/// A single choice in a completion response.
#[derive(Debug, Deserialize)]
pub struct CompletionChoice {
    pub message: ChoiceMessage,
}

/// The assistant message within a completion choice.
#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl CompletionResponse {
    /// Extract the generated text, if the vendor produced any.
    pub fn answer_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|text| !text.is_empty())
    }
}

/// `/responses` response — a top-level `output` sequence where an entry of
/// type `"message"` carries a content entry of type `"output_text"`.
#[derive(Debug, Deserialize)]
pub struct ResponsesResponse {
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// One entry in the `output` sequence.
#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(rename = "type")]
    pub item_type: String,
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

/// One content entry within an output item.
#[derive(Debug, Deserialize)]
pub struct OutputContent {
    #[serde(rename = "type")]
    pub content_type: String,
    #[serde(default)]
    pub text: Option<String>,
}

impl ResponsesResponse {
    /// Extract the generated text, if the vendor produced any.
    pub fn answer_text(self) -> Option<String> {
        self.output
            .into_iter()
            .find(|item| item.item_type == "message")?
            .content
            .into_iter()
            .find(|content| content.content_type == "output_text")?
            .text
            .filter(|text| !text.is_empty())
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── Message serialization ──

    #[test]
    fn system_message_serialization() {
        let msg = ChatMessage::system("You are a highly formal AI assistant.");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "You are a highly formal AI assistant.");
    }

    #[test]
    fn user_message_serialization() {
        let msg = ChatMessage::user("What is gravity?");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "What is gravity?");
    }

    #[test]
    fn message_round_trip() {
        let messages = vec![
            ChatMessage::system("Be formal. Be funny."),
            ChatMessage::user("Hello"),
        ];

        let json_str = serde_json::to_string(&messages).unwrap();
        let deserialized: Vec<ChatMessage> = serde_json::from_str(&json_str).unwrap();

        assert_eq!(messages, deserialized);
    }

    // ── Request bodies ──

    #[test]
    fn completion_request_serialization() {
        let request = CompletionRequest {
            model: "llama-3.1-8b-instant".to_string(),
            messages: vec![
                ChatMessage::system("persona"),
                ChatMessage::user("question"),
            ],
            temperature: 0.8,
            max_tokens: 2000,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["temperature"], 0.8);
        assert_eq!(json["max_tokens"], 2000);
    }

    #[test]
    fn responses_request_uses_input_field() {
        let request = ResponsesRequest {
            model: "llama-3.1-8b-instant".to_string(),
            input: vec![ChatMessage::user("hi")],
            temperature: 0.8,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert!(json.get("input").is_some());
        assert!(json.get("messages").is_none());
        assert!(json.get("max_tokens").is_none());
    }

    // ── Completion response parsing ──

    #[test]
    fn completion_answer_text() {
        let body = json!({
            "choices": [{
                "message": { "content": "Gravity is..." }
            }]
        });

        let resp: CompletionResponse = serde_json::from_value(body).unwrap();
        assert_eq!(resp.answer_text().as_deref(), Some("Gravity is..."));
    }

    #[test]
    fn completion_empty_choices() {
        let body = json!({ "choices": [] });
        let resp: CompletionResponse = serde_json::from_value(body).unwrap();
        assert!(resp.answer_text().is_none());
    }

    #[test]
    fn completion_missing_content() {
        let body = json!({
            "choices": [{ "message": {} }]
        });

        let resp: CompletionResponse = serde_json::from_value(body).unwrap();
        assert!(resp.answer_text().is_none());
    }

    #[test]
    fn completion_empty_content_is_absent() {
        let body = json!({
            "choices": [{ "message": { "content": "" } }]
        });

        let resp: CompletionResponse = serde_json::from_value(body).unwrap();
        assert!(resp.answer_text().is_none());
    }

    #[test]
    fn completion_missing_choices_key() {
        let resp: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.answer_text().is_none());
    }

    // ── Responses response parsing ──

    #[test]
    fn responses_answer_text() {
        let body = json!({
            "output": [
                { "type": "reasoning", "content": [] },
                {
                    "type": "message",
                    "content": [
                        { "type": "refusal", "text": "nope" },
                        { "type": "output_text", "text": "A most excellent question!" }
                    ]
                }
            ]
        });

        let resp: ResponsesResponse = serde_json::from_value(body).unwrap();
        assert_eq!(
            resp.answer_text().as_deref(),
            Some("A most excellent question!")
        );
    }

    #[test]
    fn responses_no_message_item() {
        let body = json!({
            "output": [{ "type": "reasoning", "content": [] }]
        });

        let resp: ResponsesResponse = serde_json::from_value(body).unwrap();
        assert!(resp.answer_text().is_none());
    }

    #[test]
    fn responses_no_output_text_entry() {
        let body = json!({
            "output": [{
                "type": "message",
                "content": [{ "type": "refusal", "text": "no" }]
            }]
        });

        let resp: ResponsesResponse = serde_json::from_value(body).unwrap();
        assert!(resp.answer_text().is_none());
    }

    #[test]
    fn responses_missing_output_key() {
        let resp: ResponsesResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.answer_text().is_none());
    }
}
