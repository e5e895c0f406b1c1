//! Signal extractors for job-posting text.
//!
//! Each extractor reports raw evidence only. Weighting happens in the classifier.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::hiring::vocabulary::HiringVocabulary;

/// Either a bare `REQ-2024-0452` / `JOB_1234` token (group 1) or the token after a
/// requisition label (group 2).
const REQUISITION_PATTERN: &str = r"(?i)\b((?:req|job)[-_][A-Z0-9][A-Z0-9_-]*)|\b(?:requisition|req|job|reference|ref)\b\.?\s*(?:id\b|#|number\b|no\b\.?)?\s*[:#]?\s*([A-Z0-9][A-Z0-9_-]*)";

const MANAGER_PATTERN: &str = r"(?:(?i:reporting|reports)\s+(?i:directly\s+)?(?i:to)\s+|(?i:hiring\s+manager)\s*(?:[:\-]|is)?\s*)([A-Z][a-z]+(?:\s+[A-Z][a-z]+)?)";

const SALARY_PATTERN: &str = r"(?i)(?:\b(?:salary|pay|compensation)\s+range\s*(?:of|:)?\s*)?(?:\$\s?\d[\d,]*(?:\.\d+)?\s*k?\s*(?:-|–|to)\s*\$?\s?\d[\d,]*(?:\.\d+)?\s*k?|\b\d{2,3}k\s*(?:-|–|to)\s*\d{2,3}k\b)|\b(?:salary|pay|compensation)\s+range\s*(?:of|:)?\s*\$?\s?\d[\d,]*k?";

const START_DATE_PATTERN: &str = r"(?i)\b(?:start date|expected start|target start|starting|start)\s*(?::|on|by|in)?\s*(?:(?P<mname>jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\.?\s+(?P<mday>\d{1,2})(?:st|nd|rd|th)?(?:,?\s*(?P<myear>\d{4}))?|(?P<iso>\d{4}-\d{2}-\d{2})|(?P<nmonth>\d{1,2})/(?P<nday>\d{1,2})(?:/(?P<nyear>\d{2,4}))?)|\b(?P<immediate>immediate start|start immediately|starting immediately)\b";

const PROJECT_PATTERN: &str =
    r"(?i)\b(?:tech(?:nology)? stack|tools we use|working on|current projects?)\b";

/// A start date counts as concrete when it falls within this many days from today.
pub const NEAR_TERM_START_DAYS: i64 = 90;

const MONTHS: &[&str] = &[
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Case-insensitive, word-bounded phrase lookup that reports hits in table order.
pub struct PhraseSet {
    entries: Vec<(String, Regex)>,
}

impl PhraseSet {
    pub fn new(phrases: &[String]) -> Result<Self, regex::Error> {
        let entries = phrases
            .iter()
            .map(|p| Ok((p.clone(), Regex::new(&format!(r"(?i)\b{}\b", regex::escape(p)))?)))
            .collect::<Result<Vec<_>, regex::Error>>()?;
        Ok(Self { entries })
    }

    /// Distinct phrases present in `text`, in table order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(phrase, _)| phrase.clone())
            .collect()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Requisition ID
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RequisitionKind {
    Specific,
    /// Contains an evergreen-style term such as EVERGREEN or POOL.
    GenericTerm(String),
    /// Only digits are a trailing year, e.g. `ENG-2024`.
    BareYear(String),
    /// Four characters or fewer.
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequisitionId {
    pub id: String,
    pub kind: RequisitionKind,
}

pub struct RequisitionDetector {
    pattern: Regex,
    generic_terms: Vec<String>,
}

impl RequisitionDetector {
    pub fn new(generic_terms: &[String]) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(REQUISITION_PATTERN)?,
            generic_terms: generic_terms.iter().map(|t| t.to_uppercase()).collect(),
        })
    }

    /// First token after a requisition keyword that reads like an identifier.
    pub fn detect(&self, text: &str) -> Option<RequisitionId> {
        self.pattern
            .captures_iter(text)
            .filter_map(|caps| caps.get(1).or_else(|| caps.get(2)))
            .map(|m| m.as_str())
            .find(|token| self.looks_like_id(token))
            .map(|id| RequisitionId {
                id: id.to_string(),
                kind: self.classify(id),
            })
    }

    fn looks_like_id(&self, token: &str) -> bool {
        let has_digit = token.chars().any(|c| c.is_ascii_digit());
        let has_lower = token.chars().any(|c| c.is_lowercase());
        let has_separator = token.contains(['-', '_']);
        has_digit || (!has_lower && (has_separator || self.generic_term_in(token).is_some()))
    }

    fn generic_term_in(&self, token: &str) -> Option<&str> {
        let upper = token.to_uppercase();
        self.generic_terms
            .iter()
            .find(|term| upper.contains(term.as_str()))
            .map(String::as_str)
    }

    fn classify(&self, id: &str) -> RequisitionKind {
        if let Some(term) = self.generic_term_in(id) {
            return RequisitionKind::GenericTerm(term.to_string());
        }
        if let Some(year) = bare_year(id) {
            return RequisitionKind::BareYear(year.to_string());
        }
        if id.chars().count() <= 4 && id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return RequisitionKind::TooShort;
        }
        RequisitionKind::Specific
    }
}

/// The trailing year of an ID whose only numeric segment is that year.
fn bare_year(id: &str) -> Option<&str> {
    let numeric: Vec<&str> = id
        .split(['-', '_'])
        .filter(|seg| seg.chars().any(|c| c.is_ascii_digit()))
        .collect();
    let last = id.split(['-', '_']).last()?;
    let is_year = last.len() == 4
        && last.chars().all(|c| c.is_ascii_digit())
        && (last.starts_with("19") || last.starts_with("20"));
    (numeric.len() == 1 && is_year).then_some(last)
}

// ────────────────────────────────────────────────────────────────────────────
// Location blast
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSignal {
    /// Distinct gazetteer cities, in gazetteer order.
    pub cities: Vec<String>,
    pub multi_location_phrases: Vec<String>,
}

pub struct LocationDetector {
    cities: PhraseSet,
    phrases: PhraseSet,
}

impl LocationDetector {
    pub fn new(cities: &[String], phrases: &[String]) -> Result<Self, regex::Error> {
        Ok(Self {
            cities: PhraseSet::new(cities)?,
            phrases: PhraseSet::new(phrases)?,
        })
    }

    pub fn detect(&self, text: &str) -> LocationSignal {
        LocationSignal {
            cities: self.cities.matches(text),
            multi_location_phrases: self.phrases.matches(text),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Posting age
// ────────────────────────────────────────────────────────────────────────────

/// Parses `YYYY-MM-DD`, RFC 3339 timestamps, or naive `YYYY-MM-DDTHH:MM:SS`.
pub fn parse_posted_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}

/// Whole days between posting and `today`. `None` for dates in the future.
pub fn posting_age_days(posted: NaiveDate, today: NaiveDate) -> Option<i64> {
    let days = (today - posted).num_days();
    (days >= 0).then_some(days)
}

// ────────────────────────────────────────────────────────────────────────────
// Specificity
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecificitySignal {
    pub hiring_manager: Option<String>,
    pub salary_range: Option<String>,
    pub team: Option<String>,
    /// Only set for a date within `NEAR_TERM_START_DAYS` or an immediate start.
    pub start_date: Option<String>,
    pub project_details: Option<String>,
    /// Only populated when none of the specific details above were found.
    pub boilerplate: Vec<String>,
}

impl SpecificitySignal {
    pub fn has_specifics(&self) -> bool {
        self.hiring_manager.is_some()
            || self.salary_range.is_some()
            || self.team.is_some()
            || self.start_date.is_some()
            || self.project_details.is_some()
    }
}

pub struct SpecificityDetector {
    manager: Regex,
    salary: Regex,
    team: Regex,
    start_date: Regex,
    project: Regex,
    boilerplate: PhraseSet,
    /// Lowercase first words that mark a role or department, not a person.
    role_words: Vec<String>,
}

impl SpecificityDetector {
    pub fn new(vocabulary: &HiringVocabulary) -> Result<Self, regex::Error> {
        let departments = vocabulary
            .departments
            .iter()
            .map(|d| regex::escape(d))
            .collect::<Vec<_>>()
            .join("|");
        let role_words = vocabulary
            .departments
            .iter()
            .filter_map(|d| d.split_whitespace().next())
            .chain(vocabulary.title_words.iter().map(String::as_str))
            .map(str::to_lowercase)
            .collect();
        Ok(Self {
            manager: Regex::new(MANAGER_PATTERN)?,
            salary: Regex::new(SALARY_PATTERN)?,
            team: Regex::new(&format!(
                r"(?i)\b(?:{departments})\s+(?:team|department|group|org(?:anization)?)\b"
            ))?,
            start_date: Regex::new(START_DATE_PATTERN)?,
            project: Regex::new(PROJECT_PATTERN)?,
            boilerplate: PhraseSet::new(&vocabulary.boilerplate_phrases)?,
            role_words,
        })
    }

    pub fn detect(&self, text: &str, today: NaiveDate) -> SpecificitySignal {
        let mut signal = SpecificitySignal {
            hiring_manager: self.hiring_manager(text),
            salary_range: first_match(&self.salary, text),
            team: first_match(&self.team, text),
            start_date: self.near_term_start(text, today),
            project_details: first_match(&self.project, text),
            boilerplate: Vec::new(),
        };
        if !signal.has_specifics() {
            signal.boilerplate = self.boilerplate.matches(text);
        }
        signal
    }

    /// First captured name that does not open with a department or title word.
    fn hiring_manager(&self, text: &str) -> Option<String> {
        self.manager
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .find(|name| {
                name.split_whitespace()
                    .next()
                    .is_some_and(|first| !self.role_words.contains(&first.to_lowercase()))
            })
            .map(str::to_string)
    }

    fn near_term_start(&self, text: &str, today: NaiveDate) -> Option<String> {
        self.start_date
            .captures_iter(text)
            .find(|caps| {
                resolve_start_date(caps, today).is_some_and(|date| {
                    (0..=NEAR_TERM_START_DAYS).contains(&(date - today).num_days())
                })
            })
            .and_then(|caps| caps.get(0))
            .map(|m| m.as_str().trim().to_string())
    }
}

/// Calendar date of a start-date match. Immediate starts resolve to `today`; a date
/// without a year is the next occurrence on or after `today`.
fn resolve_start_date(caps: &Captures<'_>, today: NaiveDate) -> Option<NaiveDate> {
    if caps.name("immediate").is_some() {
        return Some(today);
    }
    if let Some(iso) = caps.name("iso") {
        return NaiveDate::parse_from_str(iso.as_str(), "%Y-%m-%d").ok();
    }
    let (month, day, year) = match caps.name("mname") {
        Some(name) => {
            let name = name.as_str().to_lowercase();
            let month = MONTHS.iter().position(|m| *m == name)? as u32 + 1;
            (month, caps.name("mday")?, caps.name("myear"))
        }
        None => (
            caps.name("nmonth")?.as_str().parse::<u32>().ok()?,
            caps.name("nday")?,
            caps.name("nyear"),
        ),
    };
    let day = day.as_str().parse::<u32>().ok()?;
    match year {
        Some(year) => {
            let year = year.as_str().parse::<i32>().ok()?;
            let year = if year < 100 { 2000 + year } else { year };
            NaiveDate::from_ymd_opt(year, month, day)
        }
        None => match NaiveDate::from_ymd_opt(today.year(), month, day) {
            Some(date) if date >= today => Some(date),
            _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
        },
    }
}

fn first_match(re: &Regex, text: &str) -> Option<String> {
    re.find(text).map(|m| m.as_str().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hiring::vocabulary::{
        DEFAULT_CITIES, DEFAULT_GENERIC_REQ_TERMS, DEFAULT_MULTI_LOCATION_PHRASES,
    };

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn req() -> RequisitionDetector {
        RequisitionDetector::new(&owned(DEFAULT_GENERIC_REQ_TERMS)).unwrap()
    }

    fn specificity() -> SpecificityDetector {
        SpecificityDetector::new(&HiringVocabulary::default()).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 20).unwrap()
    }

    #[test]
    fn test_specific_requisition_id() {
        let found = req().detect("Requisition ID: REQ-2024-ML-1847").unwrap();
        assert_eq!(found.id, "REQ-2024-ML-1847");
        assert_eq!(found.kind, RequisitionKind::Specific);
    }

    #[test]
    fn test_evergreen_requisition_id() {
        let found = req().detect("Requisition: EVERGREEN_ENG_2024").unwrap();
        assert_eq!(found.kind, RequisitionKind::GenericTerm("EVERGREEN".to_string()));
    }

    #[test]
    fn test_bare_year_requisition_id() {
        let found = req().detect("Job ID: ENG-2024").unwrap();
        assert_eq!(found.kind, RequisitionKind::BareYear("2024".to_string()));
    }

    #[test]
    fn test_short_requisition_id() {
        let found = req().detect("Ref #: A12").unwrap();
        assert_eq!(found.kind, RequisitionKind::TooShort);
    }

    #[test]
    fn test_unlabelled_requisition_token() {
        let found = req().detect("REQ-2024-0452 Senior Backend Engineer").unwrap();
        assert_eq!(found.id, "REQ-2024-0452");
        assert_eq!(found.kind, RequisitionKind::Specific);

        let found = req().detect("Posting JOB-1234, apply below").unwrap();
        assert_eq!(found.id, "JOB-1234");
    }

    #[test]
    fn test_lowercase_job_compound_is_not_an_id() {
        assert_eq!(req().detect("A job-ready portfolio and job_seekers welcome"), None);
    }

    #[test]
    fn test_prose_after_job_keyword_is_not_an_id() {
        assert_eq!(req().detect("Job description: Full-time role. Job Type: Permanent"), None);
        assert_eq!(req().detect("Our requirements are simple"), None);
    }

    #[test]
    fn test_bare_year_helper() {
        assert_eq!(bare_year("ENG_2024"), Some("2024"));
        assert_eq!(bare_year("REQ-2024-0452"), None);
        assert_eq!(bare_year("R-1847"), None);
    }

    #[test]
    fn test_location_counts_distinct_cities() {
        let d = LocationDetector::new(&owned(DEFAULT_CITIES), &owned(DEFAULT_MULTI_LOCATION_PHRASES))
            .unwrap();
        let s = d.detect("Chicago, Boston, chicago, Miami. Offices nationwide.");
        assert_eq!(s.cities, vec!["Chicago", "Boston", "Miami"]);
        assert_eq!(s.multi_location_phrases, vec!["nationwide"]);
    }

    #[test]
    fn test_parse_posted_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2024, 2, 15);
        assert_eq!(parse_posted_date("2024-02-15"), expected);
        assert_eq!(parse_posted_date("2024-02-15T09:30:00Z"), expected);
        assert_eq!(parse_posted_date("2024-02-15T09:30:00"), expected);
        assert_eq!(parse_posted_date("last tuesday"), None);
        assert_eq!(parse_posted_date("2024-13-40"), None);
    }

    #[test]
    fn test_future_posting_has_no_age() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let tomorrow = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        assert_eq!(posting_age_days(tomorrow, today), None);
        assert_eq!(posting_age_days(today, today), Some(0));
    }

    #[test]
    fn test_specific_details_detected() {
        let s = specificity().detect(
            "Join our Data Science team, reporting directly to Sarah Chen. \
             Salary range: $140,000 - $180,000. Start date: March 15, 2024.",
            today(),
        );
        assert_eq!(s.hiring_manager.as_deref(), Some("Sarah Chen"));
        assert_eq!(
            s.salary_range.as_deref(),
            Some("Salary range: $140,000 - $180,000")
        );
        assert_eq!(s.team.as_deref(), Some("Data Science team"));
        assert_eq!(s.start_date.as_deref(), Some("Start date: March 15, 2024"));
        assert!(s.boilerplate.is_empty());
    }

    #[test]
    fn test_lowercase_after_reporting_to_is_not_a_manager() {
        assert_eq!(specificity().detect("reporting to the VP", today()).hiring_manager, None);
    }

    #[test]
    fn test_competitive_salary_is_not_a_range() {
        assert_eq!(specificity().detect("Competitive salary and benefits", today()).salary_range, None);
    }

    #[test]
    fn test_k_range_salary() {
        let s = specificity().detect("Pay: 120k-150k DOE", today());
        assert_eq!(s.salary_range.as_deref(), Some("120k-150k"));
    }

    #[test]
    fn test_boilerplate_only_without_specifics() {
        let vague = specificity().detect("Join our talent community and submit your resume.", today());
        assert_eq!(vague.boilerplate, vec!["talent community", "submit your resume"]);

        let specific =
            specificity().detect("Join our talent community. Hiring manager: Dana Smith.", today());
        assert!(specific.boilerplate.is_empty());
    }

    #[test]
    fn test_past_start_date_is_not_specific() {
        let s = specificity().detect("Talent pool. Start date: January 5, 2019", today());
        assert_eq!(s.start_date, None);
        assert!(!s.has_specifics());
        assert_eq!(s.boilerplate, vec!["talent pool"]);
    }

    #[test]
    fn test_distant_start_date_is_not_specific() {
        let s = specificity().detect("Start date: 2025-01-10", today());
        assert_eq!(s.start_date, None);
    }

    #[test]
    fn test_near_term_start_forms() {
        assert_eq!(
            specificity().detect("Immediate start for the right person", today()).start_date.as_deref(),
            Some("Immediate start")
        );
        assert_eq!(
            specificity().detect("Start date: 3/1/2024", today()).start_date.as_deref(),
            Some("Start date: 3/1/2024")
        );
        // No year: the next March 4th after 2024-02-20.
        assert_eq!(
            specificity().detect("Starting Mar 4th", today()).start_date.as_deref(),
            Some("Starting Mar 4th")
        );
    }

    #[test]
    fn test_yearless_start_date_rolls_forward() {
        let re = Regex::new(START_DATE_PATTERN).unwrap();
        let caps = re.captures("start date: January 10").unwrap();
        assert_eq!(
            resolve_start_date(&caps, today()),
            NaiveDate::from_ymd_opt(2025, 1, 10)
        );
    }

    #[test]
    fn test_role_after_reports_to_is_not_a_manager() {
        assert_eq!(
            specificity().detect("This role reports to Engineering Leadership.", today()).hiring_manager,
            None
        );
        assert_eq!(
            specificity()
                .detect("Reports to Senior Management, reporting to Maria Lopez.", today())
                .hiring_manager
                .as_deref(),
            Some("Maria Lopez")
        );
    }

    #[test]
    fn test_project_details_count_as_specific() {
        let s = specificity().detect("Our tech stack is Rust and Postgres. Join our talent pool.", today());
        assert_eq!(s.project_details.as_deref(), Some("tech stack"));
        assert!(s.has_specifics());
        assert!(s.boilerplate.is_empty());
    }
}
