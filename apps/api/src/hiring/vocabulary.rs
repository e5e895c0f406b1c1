//! Reference tables for the hiring-type classifier.

/// Gazetteer of large US cities used to count location mentions.
pub const DEFAULT_CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
    "Dallas",
    "San Jose",
    "Austin",
    "Jacksonville",
    "Fort Worth",
    "Columbus",
    "Charlotte",
    "San Francisco",
    "Indianapolis",
    "Seattle",
    "Denver",
    "Washington",
    "Boston",
    "El Paso",
    "Nashville",
    "Detroit",
    "Oklahoma City",
    "Portland",
    "Las Vegas",
    "Memphis",
    "Louisville",
    "Baltimore",
    "Milwaukee",
    "Albuquerque",
    "Tucson",
    "Fresno",
    "Mesa",
    "Sacramento",
    "Atlanta",
    "Kansas City",
    "Colorado Springs",
    "Omaha",
    "Raleigh",
    "Miami",
    "Long Beach",
    "Virginia Beach",
    "Oakland",
    "Minneapolis",
    "Tulsa",
    "Tampa",
    "Arlington",
    "New Orleans",
];

pub const DEFAULT_MULTI_LOCATION_PHRASES: &[&str] = &[
    "multiple locations",
    "various locations",
    "multiple offices",
    "all locations",
    "several locations",
    "nationwide",
    "remote - us",
    "remote - global",
];

/// Generic talent-pool wording. Only counted when a posting has no specific details.
pub const DEFAULT_BOILERPLATE_PHRASES: &[&str] = &[
    "talent community",
    "talent pool",
    "talent pipeline",
    "future opportunities",
    "future openings",
    "future consideration",
    "always looking",
    "always hiring",
    "ongoing need",
    "continuous recruitment",
    "rolling basis",
    "general interest",
    "expression of interest",
    "submit your resume",
    "keep you in mind",
    "various positions",
    "multiple roles",
];

/// Wording that signals a concrete, funded opening.
pub const DEFAULT_HIRING_INTENT_PHRASES: &[&str] = &[
    "apply now",
    "now hiring",
    "urgently hiring",
    "urgent hiring",
    "hiring immediately",
    "open position",
    "approved headcount",
    "funded position",
    "backfill",
    "interview schedule",
    "interviews this week",
];

/// Resume-harvesting red flags: generic contact routes, vague pay and vague team wording.
pub const DEFAULT_RED_FLAG_PHRASES: &[&str] = &[
    // generic contact
    "email resume to",
    "send resume to",
    "forward cv to",
    "jobs@",
    "careers@",
    "hr@",
    "recruiting@",
    // vague benefits
    "competitive salary",
    "competitive compensation",
    "market rate",
    "commensurate with experience",
    "to be discussed",
    "tbd",
    "negotiable",
    // no team info
    "growing company",
    "dynamic team",
    "talented team",
    "innovative company",
];

/// Requisition-ID fragments typical of evergreen requisitions.
pub const DEFAULT_GENERIC_REQ_TERMS: &[&str] =
    &["EVERGREEN", "POOL", "PIPELINE", "GENERIC", "GENERAL", "TALENT"];

/// Departments recognised when followed by "team", "department", "group" or "org".
pub const DEFAULT_DEPARTMENTS: &[&str] = &[
    "engineering",
    "marketing",
    "sales",
    "operations",
    "product",
    "design",
    "data science",
    "data",
    "finance",
    "platform",
    "infrastructure",
    "security",
    "machine learning",
    "research",
    "customer success",
];

/// Leading words that make a "reports to X" capture a role rather than a person.
pub const DEFAULT_TITLE_WORDS: &[&str] = &[
    "leadership",
    "management",
    "director",
    "head",
    "chief",
    "vice",
    "vp",
    "senior",
    "lead",
    "principal",
    "manager",
    "executive",
    "our",
    "the",
    "team",
];

#[derive(Debug, Clone)]
pub struct HiringVocabulary {
    pub cities: Vec<String>,
    pub multi_location_phrases: Vec<String>,
    pub boilerplate_phrases: Vec<String>,
    pub hiring_intent_phrases: Vec<String>,
    pub red_flag_phrases: Vec<String>,
    pub generic_req_terms: Vec<String>,
    pub departments: Vec<String>,
    pub title_words: Vec<String>,
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for HiringVocabulary {
    fn default() -> Self {
        Self {
            cities: owned(DEFAULT_CITIES),
            multi_location_phrases: owned(DEFAULT_MULTI_LOCATION_PHRASES),
            boilerplate_phrases: owned(DEFAULT_BOILERPLATE_PHRASES),
            hiring_intent_phrases: owned(DEFAULT_HIRING_INTENT_PHRASES),
            red_flag_phrases: owned(DEFAULT_RED_FLAG_PHRASES),
            generic_req_terms: owned(DEFAULT_GENERIC_REQ_TERMS),
            departments: owned(DEFAULT_DEPARTMENTS),
            title_words: owned(DEFAULT_TITLE_WORDS),
        }
    }
}
