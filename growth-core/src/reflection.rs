//! The Daily Reflections form and its editor template.
//!
//! The template is plain Markdown with one `##` section per question:
//!
//! ```text
//! ## What did you learn today?
//!
//! ## What challenges did you face?
//!
//! ## What were your successes?
//! ```
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const LEARNED_PROMPT: &str = "What did you learn today?";
pub const CHALLENGES_PROMPT: &str = "What challenges did you face?";
pub const SUCCESSES_PROMPT: &str = "What were your successes?";

static SECTION_HEADING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^##[ \t]+(.+?)[ \t]*$").unwrap());

/// Values submitted through the reflection form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReflectionInput {
    pub date: NaiveDate,
    pub reflection: String,
    pub challenges: String,
    pub successes: String,
}

impl ReflectionInput {
    pub fn is_blank(&self) -> bool {
        self.reflection.trim().is_empty()
            && self.challenges.trim().is_empty()
            && self.successes.trim().is_empty()
    }
}

/// Empty template handed to the editor.
pub fn reflection_template() -> String {
    format!("## {LEARNED_PROMPT}\n\n\n## {CHALLENGES_PROMPT}\n\n\n## {SUCCESSES_PROMPT}\n\n")
}

/// Reads an edited template back into a [`ReflectionInput`].
///
/// Each field takes the trimmed text under its heading. Headings are matched
/// ignoring case; unknown headings and text before the first heading are
/// dropped. A missing section leaves its field empty.
pub fn parse_reflection_template(date: NaiveDate, text: &str) -> ReflectionInput {
    let mut input = ReflectionInput {
        date,
        reflection: String::new(),
        challenges: String::new(),
        successes: String::new(),
    };

    let headings: Vec<_> = SECTION_HEADING.captures_iter(text).collect();
    for (i, caps) in headings.iter().enumerate() {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        let start = whole.end();
        let end = headings
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map(|m| m.start())
            .unwrap_or(text.len());
        let body = text[start..end].trim().to_string();

        let title = caps[1].trim();
        if title.eq_ignore_ascii_case(LEARNED_PROMPT) {
            input.reflection = body;
        } else if title.eq_ignore_ascii_case(CHALLENGES_PROMPT) {
            input.challenges = body;
        } else if title.eq_ignore_ascii_case(SUCCESSES_PROMPT) {
            input.successes = body;
        }
    }
    input
}
