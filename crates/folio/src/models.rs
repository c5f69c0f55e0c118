use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::DEFAULT_MAX_SPEAK_WORDS;

/// Outbound body for the respond endpoint. Built once per call, never reused.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    pub account_id: i64,
    pub mode: String,
    pub max_speak_words: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
}

impl ChatRequest {
    pub fn new(query: impl Into<String>, account_id: i64, max_speak_words: u32) -> Self {
        Self {
            query: query.into(),
            account_id,
            mode: "voice".to_string(),
            max_speak_words,
            thread_id: None,
        }
    }

    /// Request with the default word budget for the speakable summary.
    pub fn voice(query: impl Into<String>, account_id: i64) -> Self {
        Self::new(query, account_id, DEFAULT_MAX_SPEAK_WORDS)
    }
}

/// A citation backing an answer. No identity beyond its URL and position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    pub url: String,
    /// ISO-8601 date string, as sent by the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// A suggested follow-up question offered alongside an answer.
///
/// `args` keeps backend insertion order (serde_json `preserve_order`), which
/// matters when the arguments are rendered into a follow-up query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Map<String, Value>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Telemetry {
    pub latency_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

/// A complete assistant reply. Atomic: created fresh from each successful
/// call, replaced wholesale by the next one, never merged or streamed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceResponse {
    #[serde(rename = "speakText")]
    pub speak_text: String,
    #[serde(rename = "answerText")]
    pub answer_text: String,
    pub sources: Vec<Source>,
    pub actions: Vec<Action>,
    #[serde(default)]
    pub telemetry: Option<Telemetry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use serde_json::json;

    #[test]
    fn test_chat_request_serialization() -> Result<()> {
        let request = ChatRequest::voice("What moved today?", 1);
        let value = serde_json::to_value(&request)?;

        assert_eq!(
            value,
            json!({
                "query": "What moved today?",
                "account_id": 1,
                "mode": "voice",
                "max_speak_words": 100
            })
        );
        // thread_id is omitted entirely while unset
        assert!(value.get("thread_id").is_none());

        Ok(())
    }

    #[test]
    fn test_voice_response_round_trip() -> Result<()> {
        let body = json!({
            "speakText": "Tech led the gains.",
            "answerText": "Technology stocks led today's gains.",
            "sources": [{
                "title": "Market wrap",
                "publisher": "Newswire",
                "url": "https://example.com/wrap",
                "published_at": "2025-06-02"
            }],
            "actions": [{
                "id": "top_movers",
                "label": "Top movers",
                "args": {"period": "1d"}
            }],
            "telemetry": {"latency_ms": 412.0, "model": "gpt-4o"}
        });

        let response: VoiceResponse = serde_json::from_value(body.clone())?;
        assert_eq!(response.speak_text, "Tech led the gains.");
        assert_eq!(response.sources[0].publisher.as_deref(), Some("Newswire"));
        assert_eq!(response.actions[0].id, "top_movers");
        assert_eq!(response.telemetry.as_ref().unwrap().latency_ms, 412.0);
        assert!(response.telemetry.as_ref().unwrap().tools.is_none());

        // Keys must round-trip in the backend's casing
        let reserialized = serde_json::to_value(&response)?;
        assert_eq!(reserialized, body);

        Ok(())
    }

    #[test]
    fn test_voice_response_with_null_telemetry() -> Result<()> {
        let response: VoiceResponse = serde_json::from_value(json!({
            "speakText": "x",
            "answerText": "y",
            "sources": [],
            "actions": [],
            "telemetry": null
        }))?;

        assert!(response.telemetry.is_none());
        assert!(response.sources.is_empty());
        assert!(response.actions.is_empty());

        Ok(())
    }
}
