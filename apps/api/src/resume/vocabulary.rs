//! Reference tables used by the resume analyzer.
//!
//! The tables are plain data. `ResumeAnalyzer::new` compiles them into matchers once,
//! so tests can construct analyzers over small custom vocabularies.

use serde::Serialize;

/// The 53 skills tracked by default, in the order results are reported.
pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "SQL",
    "R",
    "Go",
    "Rust",
    "Scala",
    "React",
    "Vue",
    "Angular",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring",
    "TensorFlow",
    "PyTorch",
    "scikit-learn",
    "Pandas",
    "NumPy",
    "Keras",
    "OpenCV",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Jenkins",
    "Terraform",
    "Ansible",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Cassandra",
    "Elasticsearch",
    "Machine Learning",
    "Deep Learning",
    "NLP",
    "Computer Vision",
    "Data Science",
    "REST API",
    "GraphQL",
    "Microservices",
    "Agile",
    "Scrum",
    "Git",
    "CI/CD",
];

/// Verbs that signal described work experience.
pub const DEFAULT_ACTION_VERBS: &[&str] = &[
    "experience",
    "worked",
    "developed",
    "managed",
    "led",
    "designed",
    "built",
    "implemented",
    "launched",
    "delivered",
    "created",
    "improved",
];

/// A degree or institution keyword and the regex alternatives that detect it.
#[derive(Debug, Clone, Serialize)]
pub struct EducationKeyword {
    pub label: &'static str,
    /// Case-insensitive alternatives, already regex syntax.
    pub patterns: &'static [&'static str],
}

pub const DEFAULT_EDUCATION: &[EducationKeyword] = &[
    EducationKeyword {
        label: "Associate",
        patterns: &[r"associate'?s?\s+(?:degree|of)", r"a\.a\.", r"a\.s\."],
    },
    EducationKeyword {
        label: "Bachelor",
        patterns: &[r"bachelor'?s?", r"b\.sc\.?", r"b\.s\.", r"b\.a\.", r"b\.tech"],
    },
    EducationKeyword {
        label: "Master",
        patterns: &[r"master'?s?", r"m\.sc\.?", r"m\.s\.", r"m\.a\.", r"m\.tech"],
    },
    EducationKeyword {
        label: "MBA",
        patterns: &[r"mba"],
    },
    EducationKeyword {
        label: "PhD",
        patterns: &[r"ph\.?\s?d\.?", r"doctorate"],
    },
    EducationKeyword {
        label: "University",
        patterns: &[r"university"],
    },
    EducationKeyword {
        label: "College",
        patterns: &[r"college"],
    },
];

/// Everything the resume analyzer looks up against.
#[derive(Debug, Clone)]
pub struct ResumeVocabulary {
    pub skills: Vec<String>,
    pub education: Vec<EducationKeyword>,
    pub action_verbs: Vec<String>,
}

impl Default for ResumeVocabulary {
    fn default() -> Self {
        Self {
            skills: DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect(),
            education: DEFAULT_EDUCATION.to_vec(),
            action_verbs: DEFAULT_ACTION_VERBS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
