//! Hiring-type classifier: active hiring vs. pipeline/evergreen postings.
//!
//! Algorithm:
//! 1. Run each signal extractor over the posting (requisition ID, location blast,
//!    posting age, specificity, hiring-intent wording, resume-harvesting red flags).
//! 2. Each triggered signal adds weight to `active_score` or `passive_score`
//!    (independent accumulators) and records exactly one insight.
//! 3. Verdict: a gap greater than `VERDICT_MARGIN` in either direction decides;
//!    anything closer is Uncertain/Mixed.
//! 4. Confidence comes from the absolute gap: >= 9 High, >= 5 Medium, else Low.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::hiring::signals::{
    posting_age_days, LocationDetector, LocationSignal, PhraseSet, RequisitionDetector,
    RequisitionId, RequisitionKind, SpecificityDetector, SpecificitySignal,
};
use crate::hiring::strategy::{application_strategy, explanation};
use crate::hiring::vocabulary::HiringVocabulary;

// Passive (pipeline) weights
pub const GENERIC_REQ_ID_WEIGHT: u32 = 2;
pub const LOCATION_BLAST_WEIGHT: u32 = 4;
pub const LOCATION_BLAST_MIN_CITIES: usize = 5;
/// (minimum age in days, weight), stalest first.
/// A blast plus the stalest tier alone reaches `HIGH_CONFIDENCE_GAP`.
pub const STALE_AGE_TIERS: &[(i64, u32)] = &[(180, 5), (90, 3), (45, 2)];
pub const BOILERPLATE_PHRASE_WEIGHT: u32 = 2;
pub const BOILERPLATE_CAP: u32 = 6;
pub const RED_FLAG_PHRASE_WEIGHT: u32 = 1;
pub const RED_FLAG_CAP: u32 = 4;

// Active weights
pub const SPECIFIC_REQ_ID_WEIGHT: u32 = 2;
pub const SINGLE_LOCATION_WEIGHT: u32 = 1;
pub const FRESH_MAX_AGE_DAYS: i64 = 14;
pub const FRESH_POSTING_WEIGHT: u32 = 2;
pub const HIRING_MANAGER_WEIGHT: u32 = 3;
pub const SALARY_RANGE_WEIGHT: u32 = 3;
pub const TEAM_NAME_WEIGHT: u32 = 2;
pub const START_DATE_WEIGHT: u32 = 2;
pub const PROJECT_DETAILS_WEIGHT: u32 = 1;
pub const HIRING_INTENT_PHRASE_WEIGHT: u32 = 2;
pub const HIRING_INTENT_CAP: u32 = 6;

// Verdict policy
pub const VERDICT_MARGIN: u32 = 4;
pub const HIGH_CONFIDENCE_GAP: u32 = 9;
pub const MEDIUM_CONFIDENCE_GAP: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HiringType {
    #[serde(rename = "Active Hiring")]
    Active,
    #[serde(rename = "Pipeline/Evergreen")]
    Pipeline,
    #[serde(rename = "Uncertain/Mixed")]
    Uncertain,
}

impl HiringType {
    pub fn as_str(self) -> &'static str {
        match self {
            HiringType::Active => "Active Hiring",
            HiringType::Pipeline => "Pipeline/Evergreen",
            HiringType::Uncertain => "Uncertain/Mixed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub fn as_str(self) -> &'static str {
        match self {
            Confidence::Low => "Low",
            Confidence::Medium => "Medium",
            Confidence::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Info,
    Positive,
}

impl Severity {
    pub fn marker(self) -> &'static str {
        match self {
            Severity::Warning => "[!]",
            Severity::Info => "[i]",
            Severity::Positive => "[+]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPostingAnalysis {
    pub hiring_type: HiringType,
    pub confidence: Confidence,
    pub explanation: String,
    pub active_score: u32,
    pub passive_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posting_age_days: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requisition_id: Option<RequisitionId>,
    pub cities_mentioned: Vec<String>,
    pub insights: Vec<String>,
    pub application_strategy: Vec<String>,
}

/// Running totals while signals are evaluated.
#[derive(Debug, Default)]
struct Tally {
    active: u32,
    passive: u32,
    insights: Vec<String>,
}

impl Tally {
    fn active(&mut self, weight: u32, severity: Severity, message: String) {
        self.active += weight;
        self.note(severity, message);
    }

    fn passive(&mut self, weight: u32, severity: Severity, message: String) {
        self.passive += weight;
        self.note(severity, message);
    }

    fn note(&mut self, severity: Severity, message: String) {
        self.insights.push(format!("{} {}", severity.marker(), message));
    }
}

pub struct HiringClassifier {
    requisition: RequisitionDetector,
    location: LocationDetector,
    specificity: SpecificityDetector,
    hiring_intent: PhraseSet,
    red_flags: PhraseSet,
}

impl HiringClassifier {
    pub fn new(vocabulary: &HiringVocabulary) -> Result<Self, regex::Error> {
        Ok(Self {
            requisition: RequisitionDetector::new(&vocabulary.generic_req_terms)?,
            location: LocationDetector::new(&vocabulary.cities, &vocabulary.multi_location_phrases)?,
            specificity: SpecificityDetector::new(vocabulary)?,
            hiring_intent: PhraseSet::new(&vocabulary.hiring_intent_phrases)?,
            red_flags: PhraseSet::new(&vocabulary.red_flag_phrases)?,
        })
    }

    /// Classifies a posting, measuring its age against today's UTC date.
    pub fn classify(&self, description: &str, posted_date: Option<NaiveDate>) -> JobPostingAnalysis {
        self.classify_as_of(description, posted_date, Utc::now().date_naive())
    }

    /// Classifies a posting with an explicit reference date.
    pub fn classify_as_of(
        &self,
        description: &str,
        posted_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> JobPostingAnalysis {
        let mut tally = Tally::default();

        let requisition_id = self.requisition.detect(description);
        if let Some(req) = &requisition_id {
            score_requisition(&mut tally, req);
        }

        let location = self.location.detect(description);
        score_location(&mut tally, &location);

        let age = posted_date.and_then(|posted| posting_age_days(posted, today));
        if let Some(days) = age {
            score_age(&mut tally, days);
        }

        score_specificity(&mut tally, &self.specificity.detect(description, today));

        score_hiring_intent(&mut tally, &self.hiring_intent.matches(description));

        score_red_flags(&mut tally, &self.red_flags.matches(description));

        let hiring_type = verdict(tally.active, tally.passive);
        JobPostingAnalysis {
            hiring_type,
            confidence: confidence(tally.active, tally.passive),
            explanation: explanation(hiring_type).to_string(),
            active_score: tally.active,
            passive_score: tally.passive,
            posting_age_days: age,
            requisition_id,
            cities_mentioned: location.cities,
            insights: tally.insights,
            application_strategy: application_strategy(hiring_type)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

fn score_requisition(tally: &mut Tally, req: &RequisitionId) {
    let id = &req.id;
    match &req.kind {
        RequisitionKind::Specific => tally.active(
            SPECIFIC_REQ_ID_WEIGHT,
            Severity::Positive,
            format!("Requisition ID '{id}' looks like a specific, tracked opening"),
        ),
        RequisitionKind::GenericTerm(term) => tally.passive(
            GENERIC_REQ_ID_WEIGHT,
            Severity::Warning,
            format!("Requisition ID '{id}' contains the evergreen term '{term}'"),
        ),
        RequisitionKind::BareYear(year) => tally.passive(
            GENERIC_REQ_ID_WEIGHT,
            Severity::Warning,
            format!("Requisition ID '{id}' is only tagged with the year {year}, no specific number"),
        ),
        RequisitionKind::TooShort => tally.passive(
            GENERIC_REQ_ID_WEIGHT,
            Severity::Warning,
            format!(
                "Requisition ID '{id}' is suspiciously short ({} characters)",
                id.chars().count()
            ),
        ),
    }
}

fn score_location(tally: &mut Tally, location: &LocationSignal) {
    let city_count = location.cities.len();
    let phrases = &location.multi_location_phrases;

    if city_count >= LOCATION_BLAST_MIN_CITIES || !phrases.is_empty() {
        let mut message = format!("Location blast: {city_count} distinct cities mentioned");
        if city_count > 0 {
            message.push_str(&format!(" ({})", location.cities.join(", ")));
        }
        if !phrases.is_empty() {
            message.push_str(&format!(
                " and {} multi-location phrase(s): {}",
                phrases.len(),
                quoted(phrases)
            ));
        }
        tally.passive(LOCATION_BLAST_WEIGHT, Severity::Warning, message);
    } else if city_count == 1 {
        tally.active(
            SINGLE_LOCATION_WEIGHT,
            Severity::Info,
            format!("Single named location: {}", location.cities[0]),
        );
    }
}

fn score_age(tally: &mut Tally, days: i64) {
    if let Some((min_days, weight)) = STALE_AGE_TIERS.iter().find(|(min, _)| days >= *min) {
        tally.passive(
            *weight,
            Severity::Warning,
            format!("Posting is {days} days old (older than {min_days} days, likely stale)"),
        );
    } else if days < FRESH_MAX_AGE_DAYS {
        tally.active(
            FRESH_POSTING_WEIGHT,
            Severity::Positive,
            format!("Posting is {days} days old (fresh)"),
        );
    }
}

fn score_specificity(tally: &mut Tally, signal: &SpecificitySignal) {
    if signal.has_specifics() {
        let mut weight = 0;
        let mut details = Vec::new();
        if let Some(manager) = &signal.hiring_manager {
            weight += HIRING_MANAGER_WEIGHT;
            details.push(format!("hiring manager '{manager}'"));
        }
        if let Some(salary) = &signal.salary_range {
            weight += SALARY_RANGE_WEIGHT;
            details.push(format!("salary '{salary}'"));
        }
        if let Some(team) = &signal.team {
            weight += TEAM_NAME_WEIGHT;
            details.push(format!("team '{team}'"));
        }
        if let Some(start) = &signal.start_date {
            weight += START_DATE_WEIGHT;
            details.push(format!("start date '{start}'"));
        }
        if let Some(project) = &signal.project_details {
            weight += PROJECT_DETAILS_WEIGHT;
            details.push(format!("project details '{project}'"));
        }
        tally.active(
            weight,
            Severity::Positive,
            format!("Specific details: {}", details.join(", ")),
        );
    } else if !signal.boilerplate.is_empty() {
        let weight = (signal.boilerplate.len() as u32 * BOILERPLATE_PHRASE_WEIGHT).min(BOILERPLATE_CAP);
        tally.passive(
            weight,
            Severity::Warning,
            format!(
                "No named manager, salary range, team or start date; generic talent-pool wording: {}",
                quoted(&signal.boilerplate)
            ),
        );
    }
}

fn score_hiring_intent(tally: &mut Tally, phrases: &[String]) {
    if phrases.is_empty() {
        return;
    }
    let weight = (phrases.len() as u32 * HIRING_INTENT_PHRASE_WEIGHT).min(HIRING_INTENT_CAP);
    tally.active(
        weight,
        Severity::Info,
        format!("Hiring-intent wording: {}", quoted(phrases)),
    );
}

fn score_red_flags(tally: &mut Tally, phrases: &[String]) {
    if phrases.is_empty() {
        return;
    }
    let weight = (phrases.len() as u32 * RED_FLAG_PHRASE_WEIGHT).min(RED_FLAG_CAP);
    tally.passive(
        weight,
        Severity::Warning,
        format!("Resume-harvesting red flags: {}", quoted(phrases)),
    );
}

fn quoted(items: &[String]) -> String {
    items
        .iter()
        .map(|s| format!("\"{s}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn verdict(active: u32, passive: u32) -> HiringType {
    if passive > active && passive - active > VERDICT_MARGIN {
        HiringType::Pipeline
    } else if active > passive && active - passive > VERDICT_MARGIN {
        HiringType::Active
    } else {
        HiringType::Uncertain
    }
}

pub fn confidence(active: u32, passive: u32) -> Confidence {
    let gap = active.abs_diff(passive);
    if gap >= HIGH_CONFIDENCE_GAP {
        Confidence::High
    } else if gap >= MEDIUM_CONFIDENCE_GAP {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
