// SPDX-License-Identifier: MPL-2.0
//! Recommendation reasons.
//!
//! The recommender explains each suggestion in English, joining highlights
//! with `"; "`. [`rewrite`] localizes such text by recognising the known
//! phrasings; [`Reason`] is the structured form of one highlight.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

pub const MATCHED_SKILLS_KEY: &str = "matchedSkills";
pub const CAREER_ALIGNS_KEY: &str = "careerAligns";
pub const KEY_SUBJECTS_KEY: &str = "keySubjects";
pub const STRONG_SIMILARITY_KEY: &str = "strongSimilarity";

/// Separator between highlights in a backend reason.
pub const HIGHLIGHT_SEPARATOR: &str = "; ";

const CAREER_MARKER: &str = "Career aspiration closely aligns";
const SIMILARITY_MARKER: &str = "Strong textual similarity";
const KEY_SUBJECTS_PREFIX: &str = "Key subjects: ";

static MATCHED_SKILLS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Matched ([0-9]+) of your skills with the major's curriculum")
        .expect("matched skills pattern is valid")
});

static KEY_SUBJECTS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Key subjects: (.+)").expect("key subjects pattern is valid"));

/// Rewrites English reason text through `translate(key, params)`.
///
/// Rules run in order on the progressively rewritten text:
/// skill matches are replaced in place, a career-alignment mention replaces
/// the whole text, `Key subjects: ...` is replaced up to the end of the line
/// (subjects kept verbatim), and a textual-similarity mention replaces the
/// whole text. Text no rule touched is returned as is.
pub fn rewrite<F>(text: &str, translate: F) -> String
where
    F: Fn(&str, &[(&str, &str)]) -> String,
{
    let mut translated = MATCHED_SKILLS
        .replace_all(text, |caps: &Captures<'_>| {
            translate(MATCHED_SKILLS_KEY, &[("count", &caps[1])])
        })
        .into_owned();

    if translated.contains(CAREER_MARKER) {
        translated = translate(CAREER_ALIGNS_KEY, &[]);
    }

    translated = KEY_SUBJECTS
        .replace_all(&translated, |caps: &Captures<'_>| {
            translate(KEY_SUBJECTS_KEY, &[("subjects", &caps[1])])
        })
        .into_owned();

    if translated.contains(SIMILARITY_MARKER) {
        translated = translate(STRONG_SIMILARITY_KEY, &[]);
    }

    if translated == text {
        text.to_string()
    } else {
        translated
    }
}

/// One highlight of a recommendation, as the backend could emit it directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    SkillMatch { count: u32 },
    CareerAlignment,
    KeySubjects { subjects: String },
    TextualSimilarity,
    /// Anything not recognised; shown unchanged in every locale.
    Custom { text: String },
}

impl Reason {
    /// Classifies a single English highlight.
    pub fn parse(highlight: &str) -> Self {
        if let Some(caps) = MATCHED_SKILLS.captures(highlight) {
            let whole = caps.get(0).map(|m| m.as_str().len()) == Some(highlight.len());
            if let (true, Ok(count)) = (whole, caps[1].parse::<u32>()) {
                return Reason::SkillMatch { count };
            }
        }
        if highlight.contains(CAREER_MARKER) {
            return Reason::CareerAlignment;
        }
        if let Some(subjects) = highlight.strip_prefix(KEY_SUBJECTS_PREFIX) {
            return Reason::KeySubjects {
                subjects: subjects.to_string(),
            };
        }
        if highlight.contains(SIMILARITY_MARKER) {
            return Reason::TextualSimilarity;
        }
        Reason::Custom {
            text: highlight.to_string(),
        }
    }

    /// Splits a backend reason into its highlights. Empty pieces are dropped.
    pub fn split(text: &str) -> Vec<Self> {
        text.split(HIGHLIGHT_SEPARATOR)
            .map(str::trim)
            .filter(|piece| !piece.is_empty())
            .map(Self::parse)
            .collect()
    }

    /// Renders through `translate(key, params)`; custom text passes through.
    pub fn render<F>(&self, translate: F) -> String
    where
        F: Fn(&str, &[(&str, &str)]) -> String,
    {
        match self {
            Reason::SkillMatch { count } => {
                translate(MATCHED_SKILLS_KEY, &[("count", &count.to_string())])
            }
            Reason::CareerAlignment => translate(CAREER_ALIGNS_KEY, &[]),
            Reason::KeySubjects { subjects } => {
                translate(KEY_SUBJECTS_KEY, &[("subjects", subjects.as_str())])
            }
            Reason::TextualSimilarity => translate(STRONG_SIMILARITY_KEY, &[]),
            Reason::Custom { text } => text.clone(),
        }
    }
}
