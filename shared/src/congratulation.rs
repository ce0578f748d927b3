use serde::{Deserialize, Serialize};

use crate::constants::{GEMINI_API_BASE_URL, MAX_MESSAGE_WORDS};

/// Prompt sent to the text model for a winner.
pub fn build_prompt(user_name: &str, prize_label: &str, store_name: &str) -> String {
    format!(
        "Hãy viết một lời chúc mừng ngắn gọn, vui vẻ, hài hước và nhiệt huyết (dưới {} từ) bằng tiếng Việt.\n\
         Người nhận: {} (Chủ cửa hàng: {}).\n\
         Giải thưởng vừa trúng: \"{}\".\n\
         Tông giọng: Marketing, sôi động, khích lệ.\n\
         Không dùng hashtag.",
        MAX_MESSAGE_WORDS, user_name, store_name, prize_label
    )
}

pub fn generate_content_url(model: &str, api_key: &str) -> String {
    format!("{}/{}:generateContent?key={}", GEMINI_API_BASE_URL, model, api_key)
}

// Used when no API key is configured
pub fn no_client_message(user_name: &str, prize_label: &str, store_name: &str) -> String {
    format!("Chúc mừng {} từ cửa hàng {}! Bạn đã trúng {}.", user_name, store_name, prize_label)
}

pub fn empty_response_message(prize_label: &str) -> String {
    format!("Chúc mừng bạn đã trúng {}!", prize_label)
}

pub fn request_failed_message(user_name: &str, prize_label: &str) -> String {
    format!("Chúc mừng {}! Bạn thật may mắn khi trúng {}.", user_name, prize_label)
}

/// How the call to the text model went.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageOutcome {
    NoClient,
    Failed(String),
    Generated(Option<String>),
}

/// Always yields something to show the winner, whatever happened remotely.
pub fn resolve_message(
    outcome: &MessageOutcome,
    user_name: &str,
    prize_label: &str,
    store_name: &str,
) -> String {
    match outcome {
        MessageOutcome::NoClient => no_client_message(user_name, prize_label, store_name),
        MessageOutcome::Failed(_) => request_failed_message(user_name, prize_label),
        MessageOutcome::Generated(Some(text)) if !text.trim().is_empty() => text.trim().to_string(),
        MessageOutcome::Generated(_) => empty_response_message(prize_label),
    }
}

// === Gemini generateContent wire types ===

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: Some(prompt) }],
                role: Some("user".to_string()),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }
}
