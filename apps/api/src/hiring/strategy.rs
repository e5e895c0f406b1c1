//! Fixed advice and explanation tables, keyed by verdict.

use crate::hiring::classifier::HiringType;

const ACTIVE_STRATEGY: &[&str] = &[
    "Apply quickly: this is a time-sensitive opportunity.",
    "Tailor your resume to the exact requirements in the posting.",
    "Expect a standard interview process with a defined timeline.",
    "Competition is high, so make your differentiators obvious.",
    "Follow up within one week if you hear nothing back.",
];

const PIPELINE_STRATEGY: &[&str] = &[
    "Set expectations for a slow response or none at all.",
    "Network with current employees instead of relying on the application.",
    "Look for concrete, active roles at this company.",
    "Consider reaching out directly to hiring managers.",
    "This may be resume harvesting, so apply selectively.",
];

const UNCERTAIN_STRATEGY: &[&str] = &[
    "Check the company's careers page for the same role.",
    "Ask the recruiter whether the role is actively being filled.",
    "Prepare for both structured and exploratory interviews.",
    "Weigh the time investment before a heavily tailored application.",
];

pub fn application_strategy(hiring_type: HiringType) -> &'static [&'static str] {
    match hiring_type {
        HiringType::Active => ACTIVE_STRATEGY,
        HiringType::Pipeline => PIPELINE_STRATEGY,
        HiringType::Uncertain => UNCERTAIN_STRATEGY,
    }
}

pub fn explanation(hiring_type: HiringType) -> &'static str {
    match hiring_type {
        HiringType::Active => {
            "This looks like a real, funded position with an immediate need. The company is \
             likely screening candidates now for a specific vacancy, so expect a structured \
             process and faster responses."
        }
        HiringType::Pipeline => {
            "This looks like a talent pipeline or evergreen requisition. The company is \
             collecting resumes for future openings rather than filling an immediate vacancy, \
             so responses may be slow or never arrive."
        }
        HiringType::Uncertain => {
            "This posting shows conflicting or too few signals. It may be a real role with a \
             thin description, or a semi-active pipeline."
        }
    }
}
