// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.

/// Asks for plain-text sections the heading scanner in `analysis::parser` can find.
pub const PLAIN_SECTIONS_INSTRUCTION: &str = "\
    Format your answer as plain text. Start each section on its own line with the \
    section name followed by a colon (for example `Strengths:`), put one item per line \
    starting with `- `, and leave a blank line between sections. \
    Do NOT use tables or JSON.";
