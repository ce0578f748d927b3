use gloo_net::http::Request;
use log::{error, warn};
use shared::congratulation::{
    build_prompt, generate_content_url, resolve_message, GenerateContentRequest,
    GenerateContentResponse, MessageOutcome,
};

use crate::config::{get_gemini_api_key, get_gemini_model};

/// Asks the text model for a congratulation line. Never fails: every error
/// path falls back to a canned message.
pub async fn generate_congratulation_message(
    user_name: &str,
    prize_label: &str,
    store_name: &str,
) -> String {
    let outcome = match get_gemini_api_key() {
        None => {
            warn!("GEMINI_API_KEY not set, using the canned congratulation");
            MessageOutcome::NoClient
        }
        Some(api_key) => {
            let prompt = build_prompt(user_name, prize_label, store_name);
            match request_message(&api_key, prompt).await {
                Ok(text) => MessageOutcome::Generated(text),
                Err(e) => {
                    error!("Error generating message: {}", e);
                    MessageOutcome::Failed(e)
                }
            }
        }
    };

    resolve_message(&outcome, user_name, prize_label, store_name)
}

async fn request_message(api_key: &str, prompt: String) -> Result<Option<String>, String> {
    let body = GenerateContentRequest::from_prompt(prompt);

    let response = Request::post(&generate_content_url(get_gemini_model(), api_key))
        .header("Content-Type", "application/json")
        .json(&body)
        .map_err(|e| format!("Failed to build request: {:?}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {:?}", e))?;

    if !response.ok() {
        return Err(format!("Error status: {}", response.status()));
    }

    let parsed = response
        .json::<GenerateContentResponse>()
        .await
        .map_err(|e| format!("Error parsing response: {:?}", e))?;

    Ok(parsed.text())
}
