// Prompt constants and builders for the profile analyzer.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::analysis::classifier::ProfileType;
use crate::llm_client::prompts::PLAIN_SECTIONS_INSTRUCTION;
use crate::models::chat::ChatMessage;

pub const LINKEDIN_SYSTEM: &str = "You are an expert LinkedIn profile analyst and career \
    coach who has reviewed thousands of profiles for recruiters at top companies. \
    You judge headline clarity, experience storytelling, quantified impact, skills \
    endorsements and network signals. Be specific, honest and constructive.";

pub const GITHUB_SYSTEM: &str = "You are a senior engineering hiring manager who evaluates \
    GitHub profiles. You judge repository quality, code organization, documentation, \
    testing practices, contribution consistency and open-source involvement. \
    Be specific, honest and constructive.";

pub const PORTFOLIO_SYSTEM: &str = "You are a seasoned portfolio reviewer for design and \
    engineering roles. You judge project selection, case-study depth, visual \
    presentation, clarity of personal role and evidence of outcomes. \
    Be specific, honest and constructive.";

/// Analysis instruction template. Replace `{label}`, `{link}` and `{format}` before sending.
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this {label} profile: {link}

Start with a short Summary of the profile in 2-3 sentences.

Then provide:
1. An overall score out of 100 (format: "Score: X/100")
2. Key strengths (3-5 items)
3. Gaps and weaknesses (3-5 items)
4. Actionable recommendations (3-5 items)
5. A benchmark of how this profile compares to top professionals in the field

{format}"#;

/// Persona system prompt for a profile type. `Portfolio` is the default arm.
pub fn system_prompt(profile_type: ProfileType) -> &'static str {
    match profile_type {
        ProfileType::Linkedin => LINKEDIN_SYSTEM,
        ProfileType::Github => GITHUB_SYSTEM,
        ProfileType::Portfolio => PORTFOLIO_SYSTEM,
    }
}

pub fn analysis_prompt(profile_type: ProfileType, link: &str) -> String {
    ANALYSIS_PROMPT_TEMPLATE
        .replace("{label}", profile_type.label())
        .replace("{link}", link)
        .replace("{format}", PLAIN_SECTIONS_INSTRUCTION)
}

/// The full system + user message pair sent to the gateway.
pub fn build_messages(profile_type: ProfileType, link: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(system_prompt(profile_type)),
        ChatMessage::user(analysis_prompt(profile_type, link)),
    ]
}
