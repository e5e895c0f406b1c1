//! ATS compatibility scoring.
//!
//! Weight table (max points per check, sums to 100):
//!
//! | check        | full            | partial                 |
//! |--------------|-----------------|-------------------------|
//! | email        | 10              |                         |
//! | phone        | 10              |                         |
//! | skills       | 30 (>= 8)       | 20 (>= 5), 10 (>= 3)    |
//! | education    | 20              |                         |
//! | action verbs | 20 (>= 4)       | 12 (>= 2), 6 (>= 1)     |
//! | length       | 10 (>= 200 w)   | 5 (>= 100 words)        |

use serde::{Deserialize, Serialize};

pub const EMAIL_POINTS: u32 = 10;
pub const PHONE_POINTS: u32 = 10;
pub const EDUCATION_POINTS: u32 = 20;

/// (minimum count, points), highest tier first.
pub const SKILL_TIERS: &[(usize, u32)] = &[(8, 30), (5, 20), (3, 10)];
pub const ACTION_VERB_TIERS: &[(usize, u32)] = &[(4, 20), (2, 12), (1, 6)];
pub const LENGTH_TIERS: &[(usize, u32)] = &[(200, 10), (100, 5)];

pub const MAX_SCORE: u32 = 100;

/// A check emits a suggestion once it misses at least this many points.
pub const SUGGESTION_MIN_SHORTFALL: u32 = 8;

pub const EXCELLENT_SCORE: u32 = 85;
pub const GOOD_SCORE: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsCheck {
    Email,
    Phone,
    Skills,
    Education,
    ActionVerbs,
    Length,
}

/// Points earned by one check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: AtsCheck,
    pub points: u32,
    pub max_points: u32,
}

impl CheckResult {
    pub fn shortfall(&self) -> u32 {
        self.max_points - self.points
    }
}

/// Counts the scorer needs; produced by the analyzer from extracted fields.
#[derive(Debug, Clone, Default)]
pub struct ResumeFacts {
    pub has_email: bool,
    pub has_phone: bool,
    pub skill_count: usize,
    pub education_count: usize,
    pub action_verb_count: usize,
    pub word_count: usize,
}

fn tier_points(count: usize, tiers: &[(usize, u32)]) -> u32 {
    tiers
        .iter()
        .find(|(min, _)| count >= *min)
        .map(|(_, points)| *points)
        .unwrap_or(0)
}

fn tier_max(tiers: &[(usize, u32)]) -> u32 {
    tiers.first().map(|(_, points)| *points).unwrap_or(0)
}

fn flag_points(present: bool, points: u32) -> u32 {
    if present {
        points
    } else {
        0
    }
}

/// Evaluates every check, in the order suggestions are reported.
pub fn evaluate_checks(facts: &ResumeFacts) -> Vec<CheckResult> {
    vec![
        CheckResult {
            check: AtsCheck::Email,
            points: flag_points(facts.has_email, EMAIL_POINTS),
            max_points: EMAIL_POINTS,
        },
        CheckResult {
            check: AtsCheck::Phone,
            points: flag_points(facts.has_phone, PHONE_POINTS),
            max_points: PHONE_POINTS,
        },
        CheckResult {
            check: AtsCheck::Skills,
            points: tier_points(facts.skill_count, SKILL_TIERS),
            max_points: tier_max(SKILL_TIERS),
        },
        CheckResult {
            check: AtsCheck::Education,
            points: flag_points(facts.education_count > 0, EDUCATION_POINTS),
            max_points: EDUCATION_POINTS,
        },
        CheckResult {
            check: AtsCheck::ActionVerbs,
            points: tier_points(facts.action_verb_count, ACTION_VERB_TIERS),
            max_points: tier_max(ACTION_VERB_TIERS),
        },
        CheckResult {
            check: AtsCheck::Length,
            points: tier_points(facts.word_count, LENGTH_TIERS),
            max_points: tier_max(LENGTH_TIERS),
        },
    ]
}

pub fn total_score(checks: &[CheckResult]) -> u32 {
    checks.iter().map(|c| c.points).sum::<u32>().min(MAX_SCORE)
}

/// One suggestion per check missing at least `SUGGESTION_MIN_SHORTFALL` points,
/// followed by a score-band remark for good and excellent resumes.
pub fn build_suggestions(checks: &[CheckResult], facts: &ResumeFacts, score: u32) -> Vec<String> {
    let mut suggestions: Vec<String> = checks
        .iter()
        .filter(|c| c.shortfall() >= SUGGESTION_MIN_SHORTFALL)
        .map(|c| suggestion_for(c.check, facts))
        .collect();

    if score >= EXCELLENT_SCORE {
        suggestions.push("Excellent ATS score. Your resume is well optimized.".to_string());
    } else if score >= GOOD_SCORE {
        suggestions.push(
            "Good score. Add quantifiable achievements to strengthen each role.".to_string(),
        );
        suggestions
            .push("Mirror industry-specific keywords from the job descriptions you target.".to_string());
    }

    suggestions
}

fn suggestion_for(check: AtsCheck, facts: &ResumeFacts) -> String {
    match check {
        AtsCheck::Email => "Add a professional email address to the contact section.".to_string(),
        AtsCheck::Phone => "Include a phone number so recruiters can reach you.".to_string(),
        AtsCheck::Skills => format!(
            "Add more relevant skills (currently {}, aim for 8-12).",
            facts.skill_count
        ),
        AtsCheck::Education => "Include your education background (degree and institution).".to_string(),
        AtsCheck::ActionVerbs => format!(
            "Describe work experience with action verbs such as developed, led, managed (found {}).",
            facts.action_verb_count
        ),
        AtsCheck::Length => format!(
            "Expand your resume: {} words is short, aim for at least 200.",
            facts.word_count
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_facts() -> ResumeFacts {
        ResumeFacts {
            has_email: true,
            has_phone: true,
            skill_count: 10,
            education_count: 2,
            action_verb_count: 5,
            word_count: 450,
        }
    }

    #[test]
    fn test_weights_sum_to_max_score() {
        let max: u32 = evaluate_checks(&ResumeFacts::default())
            .iter()
            .map(|c| c.max_points)
            .sum();
        assert_eq!(max, MAX_SCORE);
    }

    #[test]
    fn test_all_checks_satisfied_scores_100() {
        let checks = evaluate_checks(&complete_facts());
        assert_eq!(total_score(&checks), 100);
    }

    #[test]
    fn test_no_checks_satisfied_scores_0() {
        let checks = evaluate_checks(&ResumeFacts::default());
        assert_eq!(total_score(&checks), 0);
    }

    #[test]
    fn test_skill_tiers() {
        assert_eq!(tier_points(2, SKILL_TIERS), 0);
        assert_eq!(tier_points(3, SKILL_TIERS), 10);
        assert_eq!(tier_points(5, SKILL_TIERS), 20);
        assert_eq!(tier_points(7, SKILL_TIERS), 20);
        assert_eq!(tier_points(8, SKILL_TIERS), 30);
    }

    #[test]
    fn test_empty_facts_emit_every_check_suggestion_in_order() {
        let facts = ResumeFacts::default();
        let checks = evaluate_checks(&facts);
        let suggestions = build_suggestions(&checks, &facts, total_score(&checks));
        assert_eq!(suggestions.len(), 6);
        assert!(suggestions[0].contains("email"));
        assert!(suggestions[1].contains("phone"));
        assert!(suggestions[2].contains("currently 0"));
        assert!(suggestions[3].contains("education"));
        assert!(suggestions[4].contains("action verbs"));
        assert!(suggestions[5].contains("0 words"));
    }

    #[test]
    fn test_small_shortfall_is_not_reported() {
        let facts = ResumeFacts {
            word_count: 150,
            ..complete_facts()
        };
        let checks = evaluate_checks(&facts);
        let score = total_score(&checks);
        assert_eq!(score, 95);
        let suggestions = build_suggestions(&checks, &facts, score);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].starts_with("Excellent"));
    }

    #[test]
    fn test_good_band_adds_two_remarks() {
        let facts = ResumeFacts {
            has_phone: false,
            skill_count: 5,
            ..complete_facts()
        };
        let checks = evaluate_checks(&facts);
        let score = total_score(&checks);
        assert_eq!(score, 80);
        let suggestions = build_suggestions(&checks, &facts, score);
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[0].contains("phone"));
        assert!(suggestions[1].contains("currently 5"));
        assert!(suggestions[2].starts_with("Good score"));
    }
}
