//! Link classifier — decides which kind of profile a submitted URL points at.

use serde::{Deserialize, Serialize};

/// The kind of profile behind a link. Anything unrecognized is a portfolio.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileType {
    Linkedin,
    Github,
    #[default]
    Portfolio,
}

impl ProfileType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileType::Linkedin => "linkedin",
            ProfileType::Github => "github",
            ProfileType::Portfolio => "portfolio",
        }
    }

    /// Human-facing name used inside prompts.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileType::Linkedin => "LinkedIn",
            ProfileType::Github => "GitHub",
            ProfileType::Portfolio => "portfolio",
        }
    }
}

/// Classifies a link by case-insensitive substring match.
///
/// `linkedin.com` is checked before `github.com`. Malformed URLs are not an
/// error here; they simply fall through to `Portfolio`.
pub fn classify_link(link: &str) -> ProfileType {
    let lowered = link.to_lowercase();
    if lowered.contains("linkedin.com") {
        ProfileType::Linkedin
    } else if lowered.contains("github.com") {
        ProfileType::Github
    } else {
        ProfileType::Portfolio
    }
}
