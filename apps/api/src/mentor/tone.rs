//! Tone presets — maps a tone key to the mentor's system prompt.
//!
//! Unknown keys resolve to `Balanced` with a warning; they are never rejected.

use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tone {
    Chill,
    Corporate,
    Hustle,
    #[default]
    Balanced,
}

pub const CHILL_PROMPT: &str = "You are a laid-back career mentor. Keep things relaxed and \
    friendly, use casual language, and remind people that careers are a marathon, not a \
    sprint. Give practical advice without pressure, and keep answers short and encouraging.";

pub const CORPORATE_PROMPT: &str = "You are a polished corporate career advisor. Communicate \
    in a professional, structured manner. Focus on leadership presence, stakeholder \
    management, promotion paths and measurable outcomes. Use clear headings or numbered \
    steps when giving advice.";

pub const HUSTLE_PROMPT: &str = "You are a high-energy startup mentor who lives for the grind. \
    Be direct, bold and motivating. Push for rapid skill building, shipping side projects, \
    networking aggressively and taking smart risks. Every answer ends with one concrete \
    action to take today.";

pub const BALANCED_PROMPT: &str = "You are a thoughtful career mentor who balances ambition \
    with well-being. Give honest, practical guidance on skills, job search and growth, \
    acknowledge trade-offs, and tailor advice to the person's situation. Be warm but \
    specific.";

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Chill, Tone::Corporate, Tone::Hustle, Tone::Balanced];

    pub fn key(&self) -> &'static str {
        match self {
            Tone::Chill => "chill",
            Tone::Corporate => "corporate",
            Tone::Hustle => "hustle",
            Tone::Balanced => "balanced",
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            Tone::Chill => CHILL_PROMPT,
            Tone::Corporate => CORPORATE_PROMPT,
            Tone::Hustle => HUSTLE_PROMPT,
            Tone::Balanced => BALANCED_PROMPT,
        }
    }

    /// Exact, case-insensitive lookup.
    pub fn from_key(key: &str) -> Option<Tone> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.key().eq_ignore_ascii_case(key.trim()))
    }

    /// Resolves an optional request key. Missing or unknown keys become `Balanced`.
    pub fn resolve(key: Option<&str>) -> Tone {
        match key {
            None => Tone::default(),
            Some(key) => Tone::from_key(key).unwrap_or_else(|| {
                warn!("Unknown mentor tone {key:?}, falling back to balanced");
                Tone::default()
            }),
        }
    }
}
