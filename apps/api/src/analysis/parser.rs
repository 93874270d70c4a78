//! Response parser — segments the model's free-text analysis into sections.
//!
//! The gateway enforces no schema, so this is best-effort. Each section is found
//! by heading keyword and then captured line by line:
//!
//! - prose sections (`summary`, `benchmark`) run until a blank line or a
//!   numbered-list line;
//! - list sections collect up to `MAX_LIST_ITEMS` lines with bullet markers
//!   stripped, ending at the first blank line after an item.
//!
//! Capture also ends when another section's heading shows up. Sections that are
//! never found fall back to fixed placeholders.

use serde::{Deserialize, Serialize};

pub const TEXT_PLACEHOLDER: &str = "Analysis in progress...";
pub const LIST_PLACEHOLDER: &str = "Comprehensive analysis provided in full feedback";
pub const MAX_LIST_ITEMS: usize = 5;

/// Longest heading title (in words) still treated as a heading rather than prose.
const MAX_HEADING_WORDS: usize = 6;

/// Heuristically segmented view of the model's answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredFeedback {
    pub summary: String,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub recommendations: Vec<String>,
    pub benchmark: String,
    pub full_analysis: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Summary,
    Strengths,
    Weaknesses,
    Recommendations,
    Benchmark,
}

impl Section {
    const ALL: [Section; 5] = [
        Section::Summary,
        Section::Strengths,
        Section::Weaknesses,
        Section::Recommendations,
        Section::Benchmark,
    ];

    fn keywords(self) -> &'static [&'static str] {
        match self {
            Section::Summary => &["summary", "overview"],
            Section::Strengths => &["strength"],
            Section::Weaknesses => &["weakness", "gap", "improvement"],
            Section::Recommendations => &["recommendation", "suggestion", "next step", "action item"],
            Section::Benchmark => &["benchmark", "comparison"],
        }
    }

    /// Whether `title` opens with one of this section's keywords.
    fn opens(self, title: &str) -> bool {
        self.keywords().iter().any(|kw| title.starts_with(kw))
    }

    fn is_prose(self) -> bool {
        matches!(self, Section::Summary | Section::Benchmark)
    }

    /// Section named by a lowercased heading title. When several keywords
    /// appear, the one closest to the start wins ("Recommendations for improvement").
    fn for_title(title: &str) -> Option<Section> {
        Section::ALL
            .iter()
            .filter_map(|&section| {
                section
                    .keywords()
                    .iter()
                    .filter_map(|kw| title.find(kw))
                    .min()
                    .map(|pos| (pos, section))
            })
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, section)| section)
    }
}

/// A line that looks like a section heading: `Strengths:`, `## Benchmark`,
/// `**Summary**`, `2. Weaknesses:`, `Summary: text on the same line`.
#[derive(Debug, PartialEq)]
struct Heading<'a> {
    title: String,
    inline: &'a str,
    numbered: bool,
    emphasized: bool,
}

impl Heading<'_> {
    /// Section this heading names. A plain numbered line such as
    /// `2. Close testing gaps: add CI` is a list item, so it only names a section
    /// when emphasized or when its title opens with the keyword (`2. Weaknesses:`).
    fn section(&self) -> Option<Section> {
        let section = Section::for_title(&self.title)?;
        if self.numbered && !self.emphasized && !section.opens(&self.title) {
            return None;
        }
        Some(section)
    }
}

fn is_bullet_item(line: &str) -> bool {
    line.starts_with('-') || line.starts_with('•') || line.starts_with("* ")
}

/// Byte length of a leading `N.` / `N)` marker followed by whitespace or end of line.
fn numbered_prefix_len(line: &str) -> Option<usize> {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &line[digits..];
    let marker = rest.chars().next()?;
    if marker != '.' && marker != ')' {
        return None;
    }
    match rest[1..].chars().next() {
        None => Some(digits + 1),
        Some(c) if c.is_whitespace() => Some(digits + 1),
        _ => None,
    }
}

fn starts_numbered(line: &str) -> bool {
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    digits > 0 && line[digits..].starts_with('.')
}

fn parse_heading(line: &str) -> Option<Heading<'_>> {
    let line = line.trim();
    if line.is_empty() || is_bullet_item(line) {
        return None;
    }

    let markdown = line.starts_with('#');
    let mut body = line.trim_start_matches('#').trim_start();
    let numbered = numbered_prefix_len(body);
    if let Some(len) = numbered {
        body = body[len..].trim_start();
    }
    let bold = body.starts_with("**") || body.starts_with("__");

    let (title, inline, had_colon) = match body.split_once(':') {
        Some((title, inline)) => (title, inline, true),
        None => (body, "", false),
    };

    let is_marker = |c: char| c == '*' || c == '_' || c.is_whitespace();
    let title = title.trim_matches(is_marker);
    let inline = inline.trim_matches(is_marker);

    if title.is_empty() || title.split_whitespace().count() > MAX_HEADING_WORDS {
        return None;
    }
    if !(had_colon || markdown || bold) {
        return None;
    }

    Some(Heading {
        title: title.to_lowercase(),
        inline,
        numbered: numbered.is_some(),
        emphasized: markdown || bold,
    })
}

/// Finds where `section` starts: the first heading naming it, or failing that the
/// first non-item line mentioning one of its keywords.
fn locate<'a>(lines: &[&'a str], section: Section) -> Option<(usize, &'a str)> {
    let by_heading = lines.iter().copied().enumerate().find_map(|(idx, line)| {
        parse_heading(line)
            .filter(|h| h.section() == Some(section))
            .map(|h| (idx, h.inline))
    });
    if by_heading.is_some() {
        return by_heading;
    }

    lines.iter().copied().enumerate().find_map(|(idx, line)| {
        let trimmed = line.trim();
        let lowered = trimmed.to_lowercase();
        let mentions = section.keywords().iter().any(|kw| lowered.contains(kw));
        if !mentions || is_bullet_item(trimmed) {
            return None;
        }
        if let Some(len) = numbered_prefix_len(&lowered) {
            if !section.opens(lowered[len..].trim_start()) {
                return None;
            }
        }
        let inline = trimmed.split_once(':').map(|(_, rest)| rest.trim()).unwrap_or("");
        Some((idx, inline))
    })
}

fn strip_bullet(line: &str) -> &str {
    let line = line.trim();
    if let Some(rest) = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('•'))
        .or_else(|| line.strip_prefix("* "))
    {
        return rest.trim();
    }
    match numbered_prefix_len(line) {
        Some(len) => line[len..].trim(),
        None => line,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingHeading,
    AwaitingContent,
    Capturing,
}

/// Runs the heading scan for one section and returns its captured lines.
fn scan<'a>(lines: &[&'a str], section: Section) -> Vec<&'a str> {
    let mut state = ScanState::SeekingHeading;
    let mut captured: Vec<&'a str> = Vec::new();

    let Some((start, inline)) = locate(lines, section) else {
        return captured;
    };

    for (idx, raw) in lines.iter().copied().enumerate() {
        let line = raw.trim();
        match state {
            ScanState::SeekingHeading => {
                if idx == start {
                    if inline.is_empty() {
                        state = ScanState::AwaitingContent;
                    } else {
                        captured.push(inline);
                        state = ScanState::Capturing;
                    }
                }
            }
            ScanState::AwaitingContent | ScanState::Capturing => {
                if line.is_empty() {
                    if state == ScanState::Capturing {
                        break;
                    }
                    continue;
                }
                let other_heading = parse_heading(line)
                    .and_then(|h| h.section())
                    .is_some_and(|s| s != section);
                if other_heading || (section.is_prose() && starts_numbered(line)) {
                    break;
                }
                let item = if section.is_prose() { line } else { strip_bullet(line) };
                if item.is_empty() {
                    continue;
                }
                captured.push(item);
                state = ScanState::Capturing;
                if !section.is_prose() && captured.len() >= MAX_LIST_ITEMS {
                    break;
                }
            }
        }
    }

    captured
}

fn prose(lines: &[&str], section: Section) -> String {
    let captured = scan(lines, section);
    if captured.is_empty() {
        TEXT_PLACEHOLDER.to_string()
    } else {
        captured.join(" ")
    }
}

fn list(lines: &[&str], section: Section) -> Vec<String> {
    let captured = scan(lines, section);
    if captured.is_empty() {
        vec![LIST_PLACEHOLDER.to_string()]
    } else {
        captured.into_iter().map(str::to_string).collect()
    }
}

/// Segments a free-text analysis into `StructuredFeedback`. Never fails.
pub fn parse_feedback(text: &str) -> StructuredFeedback {
    let lines: Vec<&str> = text.lines().collect();

    StructuredFeedback {
        summary: prose(&lines, Section::Summary),
        strengths: list(&lines, Section::Strengths),
        weaknesses: list(&lines, Section::Weaknesses),
        recommendations: list(&lines, Section::Recommendations),
        benchmark: prose(&lines, Section::Benchmark),
        full_analysis: text.to_string(),
    }
}
