//! Mentor chat — prepends the tone prompt and forwards the whole history.
//!
//! No windowing: every turn resends the full conversation, so cost grows with
//! conversation length.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::mentor::tone::Tone;
use crate::models::chat::ChatMessage;

/// Token ceiling for a mentor reply, above the analyzer's.
pub const MENTOR_MAX_TOKENS: u32 = 4096;

/// The message list sent upstream: the tone's system prompt, then the history in order.
pub fn build_conversation(tone: Tone, history: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut messages = Vec::with_capacity(history.len() + 1);
    messages.push(ChatMessage::system(tone.system_prompt()));
    messages.extend_from_slice(history);
    messages
}

pub async fn mentor_reply(
    llm: &LlmClient,
    tone: Tone,
    history: &[ChatMessage],
) -> Result<String, AppError> {
    info!(
        "Mentor chat: tone={}, {} messages in history",
        tone.key(),
        history.len()
    );
    let messages = build_conversation(tone, history);
    Ok(llm.complete(&messages, MENTOR_MAX_TOKENS).await?)
}
