//! Resume analysis: raw document text in, `ResumeAnalysis` out.
//!
//! Pure and deterministic. The analyzer owns its compiled vocabulary and is shared
//! across requests behind an `Arc`.

use serde::{Deserialize, Serialize};

use crate::resume::extract::{
    ContactExtractor, ContactInfo, EducationMatcher, EducationMention, SkillMatcher, VerbMatcher,
};
use crate::resume::scoring::{build_suggestions, evaluate_checks, total_score, CheckResult, ResumeFacts};
use crate::resume::vocabulary::ResumeVocabulary;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeAnalysis {
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub education_details: Vec<EducationMention>,
    pub word_count: usize,
    /// 0 – 100
    pub score: u32,
    pub score_breakdown: Vec<CheckResult>,
    pub suggestions: Vec<String>,
}

pub struct ResumeAnalyzer {
    contact: ContactExtractor,
    skills: SkillMatcher,
    education: EducationMatcher,
    verbs: VerbMatcher,
}

impl ResumeAnalyzer {
    pub fn new(vocabulary: &ResumeVocabulary) -> Result<Self, regex::Error> {
        Ok(Self {
            contact: ContactExtractor::new()?,
            skills: SkillMatcher::new(&vocabulary.skills)?,
            education: EducationMatcher::new(&vocabulary.education)?,
            verbs: VerbMatcher::new(&vocabulary.action_verbs)?,
        })
    }

    pub fn analyze(&self, raw_text: &str) -> ResumeAnalysis {
        let contact = self.contact.extract(raw_text);
        let skills = self.skills.detect(raw_text);
        let education = self.education.detect(raw_text);
        let education_details = self.education.mentions(raw_text);
        let word_count = raw_text.split_whitespace().count();

        let facts = ResumeFacts {
            has_email: contact.email.is_some(),
            has_phone: contact.phone.is_some(),
            skill_count: skills.len(),
            education_count: education.len(),
            action_verb_count: self.verbs.count_distinct(raw_text),
            word_count,
        };
        let score_breakdown = evaluate_checks(&facts);
        let score = total_score(&score_breakdown);
        let suggestions = build_suggestions(&score_breakdown, &facts, score);

        ResumeAnalysis {
            contact,
            skills,
            education,
            education_details,
            word_count,
            score,
            score_breakdown,
            suggestions,
        }
    }

    /// The reference skill list, in reporting order.
    pub fn skill_vocabulary(&self) -> Vec<&str> {
        self.skills.vocabulary()
    }
}
