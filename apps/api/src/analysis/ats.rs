//! ATS quick score — unweighted word overlap between a résumé and a short job
//! role description, plus a projects-section check against a role keyword table.
//!
//! Algorithm:
//! 1. Clean both texts: normalize, split on whitespace, keep words longer than 3 chars.
//! 2. Role keywords = distinct cleaned words of the job role, first-occurrence order.
//! 3. score = matched / total × 100 (rounded to 2 places), 0 when there are no keywords.
//! 4. project_score = share of the role table's keywords found in the projects section.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::normalize::{normalize, tokenize};
use crate::analysis::report::round_to;

/// Words of this length or shorter carry no signal ("and", "the", "with").
const MIN_WORD_LEN: usize = 4;

static PROJECTS_SECTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:projects|project experience)([\s\S]+?)(?:experience|skills|education|$)")
        .expect("static pattern compiles")
});

/// Role families with the keywords a projects section is expected to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    Developer,
    Designer,
    Manager,
    Engineer,
}

impl Role {
    const ALL: [Role; 4] = [Role::Developer, Role::Designer, Role::Manager, Role::Engineer];

    fn name(self) -> &'static str {
        match self {
            Role::Developer => "developer",
            Role::Designer => "designer",
            Role::Manager => "manager",
            Role::Engineer => "engineer",
        }
    }

    /// Keywords in normalized form, so "node.js" is stored as "nodejs".
    fn keywords(self) -> &'static [&'static str] {
        match self {
            Role::Developer => &[
                "react",
                "javascript",
                "nodejs",
                "html",
                "css",
                "express",
                "python",
                "kotlin",
            ],
            Role::Designer => &["photoshop", "illustrator", "uiux", "figma", "adobe"],
            Role::Manager => &["project management", "scrum", "agile", "kanban", "jira"],
            Role::Engineer => &["python", "science", "data", "kanban", "jira"],
        }
    }

    /// Picks the first role named as a whole word in `job_role`; developer otherwise.
    pub fn detect(job_role: &str) -> Role {
        let normalized = normalize(job_role);
        let role = tokenize(&normalized)
            .find_map(|word| Role::ALL.into_iter().find(|role| role.name() == word))
            .unwrap_or_default();
        role
    }
}

/// Quick-score result returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsReport {
    pub score: f64, // 0 – 100
    pub total_keywords: usize,
    pub missing_keywords: Vec<String>,
    pub project_score: f64, // 0 – 100
    pub role: Role,
}

pub fn quick_score(resume: &str, job_role: &str) -> AtsReport {
    let resume_words: HashSet<String> = clean_words(resume).into_iter().collect();

    let mut seen = HashSet::new();
    let role_keywords: Vec<String> = clean_words(job_role)
        .into_iter()
        .filter(|w| seen.insert(w.clone()))
        .collect();

    let missing_keywords: Vec<String> = role_keywords
        .iter()
        .filter(|w| !resume_words.contains(*w))
        .cloned()
        .collect();

    let total_keywords = role_keywords.len();
    let score = if total_keywords > 0 {
        let matched = total_keywords - missing_keywords.len();
        round_to(matched as f64 / total_keywords as f64 * 100.0, 2)
    } else {
        0.0
    };

    let role = Role::detect(job_role);
    let project_score = extract_projects_section(resume)
        .map(|section| score_projects(section, role))
        .unwrap_or(0.0);

    AtsReport {
        score,
        total_keywords,
        missing_keywords,
        project_score,
        role,
    }
}

/// Normalized words longer than three characters, in text order.
pub fn clean_words(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    tokenize(&normalized)
        .filter(|w| w.len() >= MIN_WORD_LEN)
        .map(String::from)
        .collect()
}

/// Text between the first projects heading and the next experience, skills or
/// education heading (or the end of the text).
pub fn extract_projects_section(text: &str) -> Option<&str> {
    PROJECTS_SECTION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .filter(|section| !section.trim().is_empty())
}

fn score_projects(section: &str, role: Role) -> f64 {
    let normalized = normalize(section);
    let words: HashSet<&str> = tokenize(&normalized).collect();
    let keywords = role.keywords();

    let matched = keywords
        .iter()
        .filter(|kw| {
            if kw.contains(' ') {
                normalized.contains(*kw)
            } else {
                words.contains(*kw)
            }
        })
        .count();

    round_to(matched as f64 / keywords.len() as f64 * 100.0, 2)
}
