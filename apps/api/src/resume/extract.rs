//! Field extractors for raw resume text.
//!
//! Every extractor is optional by construction: a field that cannot be located comes
//! back as `None` or an empty list, never as an error.

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::resume::vocabulary::EducationKeyword;

const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";
/// (123) 456-7890, 123-456-7890, 123.456.7890, +1 123 456 7890
const PHONE_PATTERN: &str = r"(?:^|[^\w+])((?:\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4})\b";

/// Max education mentions kept with surrounding context.
const MAX_EDUCATION_MENTIONS: usize = 3;
/// Characters of context kept on each side of an education mention.
const EDUCATION_CONTEXT_RADIUS: usize = 50;

/// First lines that are document headers rather than a name.
const HEADER_LINES: &[&str] = &["resume", "résumé", "curriculum vitae", "cv"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationMention {
    pub keyword: String,
    pub matched: String,
    pub context: String,
}

/// Wraps regex alternatives in non-word boundaries.
///
/// `\b` does not work for entries ending in symbols (`C++`, `C#`), so the boundary is
/// any non-word character, and `+`/`#` may not follow the match.
fn bounded(alternatives: &str) -> String {
    format!(r"(?i)(?:^|[^\w])({alternatives})(?:[^\w+#]|$)")
}

pub struct ContactExtractor {
    email: Regex,
    phone: Regex,
}

impl ContactExtractor {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            email: Regex::new(EMAIL_PATTERN)?,
            phone: Regex::new(PHONE_PATTERN)?,
        })
    }

    pub fn extract(&self, text: &str) -> ContactInfo {
        ContactInfo {
            name: extract_name(text),
            email: self.extract_email(text),
            phone: self.extract_phone(text),
        }
    }

    pub fn extract_email(&self, text: &str) -> Option<String> {
        self.email.find(text).map(|m| m.as_str().to_string())
    }

    pub fn extract_phone(&self, text: &str) -> Option<String> {
        self.phone
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// Best-effort name: the first non-header line, if it reads like 2–4 capitalised words.
pub fn extract_name(text: &str) -> Option<String> {
    let line = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .find(|l| !HEADER_LINES.contains(&l.to_lowercase().as_str()))?;

    let words: Vec<&str> = line.split_whitespace().collect();
    if !(2..=4).contains(&words.len()) || line.chars().count() > 60 {
        return None;
    }

    let looks_like_name = words.iter().all(|w| {
        w.chars().next().is_some_and(char::is_uppercase)
            && w
                .chars()
                .all(|c| c.is_alphabetic() || matches!(c, '-' | '\'' | '.'))
    });

    looks_like_name.then(|| words.join(" "))
}

/// Vocabulary-ordered skill detection.
pub struct SkillMatcher {
    entries: Vec<(String, Regex)>,
}

impl SkillMatcher {
    pub fn new(skills: &[String]) -> Result<Self, regex::Error> {
        let entries = skills
            .iter()
            .map(|s| Ok((s.clone(), Regex::new(&bounded(&regex::escape(s)))?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { entries })
    }

    /// Returns every vocabulary skill present in `text`, once each, in vocabulary order.
    pub fn detect(&self, text: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn vocabulary(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }
}

pub struct EducationMatcher {
    entries: Vec<(&'static str, Regex)>,
}

impl EducationMatcher {
    pub fn new(keywords: &[EducationKeyword]) -> Result<Self, regex::Error> {
        let entries = keywords
            .iter()
            .map(|k| Ok((k.label, Regex::new(&bounded(&k.patterns.join("|")))?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { entries })
    }

    /// Keyword labels found, in table order.
    pub fn detect(&self, text: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(label, _)| label.to_string())
            .collect()
    }

    /// Up to three mentions in text order, each with its surrounding context.
    pub fn mentions(&self, text: &str) -> Vec<EducationMention> {
        let mut found: Vec<(usize, EducationMention)> = Vec::new();
        for (label, re) in &self.entries {
            for caps in re.captures_iter(text) {
                let Some(m) = caps.get(1) else { continue };
                found.push((
                    m.start(),
                    EducationMention {
                        keyword: label.to_string(),
                        matched: m.as_str().to_string(),
                        context: context_window(text, m.start(), m.end(), EDUCATION_CONTEXT_RADIUS),
                    },
                ));
            }
        }
        found.sort_by_key(|(start, _)| *start);
        found
            .into_iter()
            .take(MAX_EDUCATION_MENTIONS)
            .map(|(_, mention)| mention)
            .collect()
    }
}

/// Counts distinct action verbs present in the text.
pub struct VerbMatcher {
    verbs: Vec<Regex>,
}

impl VerbMatcher {
    pub fn new(verbs: &[String]) -> Result<Self, regex::Error> {
        let verbs = verbs
            .iter()
            .map(|v| Regex::new(&bounded(&regex::escape(v))))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { verbs })
    }

    pub fn count_distinct(&self, text: &str) -> usize {
        self.verbs.iter().filter(|re| re.is_match(text)).count()
    }
}

/// Slices `radius` bytes around a match (widened to char boundaries), whitespace collapsed.
fn context_window(text: &str, start: usize, end: usize, radius: usize) -> String {
    let mut from = start.saturating_sub(radius);
    while !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + radius).min(text.len());
    while !text.is_char_boundary(to) {
        to += 1;
    }
    text[from..to].split_whitespace().collect::<Vec<_>>().join(" ")
}
