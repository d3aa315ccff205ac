//! Reference data: word lists, stopwords and shared patterns
//!
//! Skills, schools and courses are data, loadable from configured list
//! files with built-in defaults; section header synonyms and the job-type
//! phrase list are closed and compiled in. The date, email and phone
//! patterns used across the pipeline live here so every consumer compiles
//! them once.

use crate::config::Config;
use crate::error::{CvParserError, Result};
use crate::extract::sections::SectionKind;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

const MONTHS_SHORT: &str =
    "(jan)|(feb)|(mar)|(apr)|(may)|(jun)|(jul)|(aug)|(sep)|(oct)|(nov)|(dec)";
const MONTHS_LONG: &str = "(january)|(february)|(march)|(april)|(may)|(june)|(july)|(august)|(september)|(october)|(november)|(december)";
const YEAR: &str = r"(((20|19)(\d{2})))";
const DAY: &str = "(0[1-9]|1[0-9]|2[0-9]|3[0-1])";
/// Up to two arbitrary characters between date components.
const DATE_SEP: &str = r"[-/\s\S]{0,2}";

fn date_pattern() -> String {
    let month = format!("({}|{}|0[1-9]|1[0-2])", MONTHS_SHORT, MONTHS_LONG);
    format!(
        "({m}{sep}{y}|{y}{sep}{m}|{d}{sep}{m}{sep}{y}|{m}{d}{y}|{y})",
        m = month,
        d = DAY,
        y = YEAR,
        sep = DATE_SEP
    )
}

/// Date or date range. Case-insensitive; the range arm precedes the single
/// arm so at equal start positions a full range wins.
pub static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    let date = date_pattern();
    Regex::new(&format!(r"(?i)({d}[-\s\S]{{0,8}}{d}|{d})", d = date))
        .expect("date range pattern")
});

pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("email pattern")
});

pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\+?\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}\b")
        .expect("phone pattern")
});

/// Header synonyms per résumé section. First document-order hit per
/// category wins during detection.
pub fn section_synonyms() -> [(SectionKind, &'static [&'static str]); 3] {
    [
        (
            SectionKind::Skills,
            &["SKILLS", "PROFESSIONAL SKILLS", "TECH SKILLS", "TECHNICAL SKILLS"],
        ),
        (SectionKind::Education, &["EDUCATION", "SCHOOL", "SCHOOLS"]),
        (
            SectionKind::Experience,
            &["EXPERIENCES", "CAREER", "EXPERIENCE"],
        ),
    ]
}

/// Closed list of job-type phrases for opportunity matching.
pub const OPPORTUNITY_PHRASES: [&str; 10] = [
    "full time",
    "part time",
    "temporary",
    "contract",
    "internship",
    "seasonal",
    "co founder",
    "freelance",
    "per diem",
    "reserve",
];

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your", "yours",
        "yourself", "yourselves", "he", "him", "his", "himself", "she", "her", "hers", "herself",
        "it", "its", "itself", "they", "them", "their", "theirs", "themselves", "what", "which",
        "who", "whom", "this", "that", "these", "those", "am", "is", "are", "was", "were", "be",
        "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
        "the", "and", "but", "if", "or", "because", "as", "until", "while", "of", "at", "by",
        "for", "with", "about", "against", "between", "into", "through", "during", "before",
        "after", "above", "below", "to", "from", "up", "down", "in", "out", "on", "off", "over",
        "under", "again", "further", "then", "once", "here", "there", "when", "where", "why",
        "how", "all", "any", "both", "each", "few", "more", "most", "other", "some", "such",
        "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s", "t", "can",
        "will", "just", "don", "should", "now",
    ]
    .into_iter()
    .collect()
});

/// English stopword set used for experience token filtering and opportunity
/// surface filtering.
pub fn stop_words() -> &'static HashSet<&'static str> {
    &STOP_WORDS
}

/// Strip structural punctuation from a list entry: brackets, braces,
/// parentheses, hyphens and backslashes become spaces; carets, question
/// marks, ampersands and quotes are removed. Whitespace is collapsed.
pub fn clean_entry(raw: &str) -> String {
    let mut cleaned = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' | '(' | ')' | '{' | '}' | '[' | ']' | '-' => cleaned.push(' '),
            '^' | '?' | '&' | '"' | '\'' => {}
            _ => cleaned.push(c),
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word lists the extractors match against.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    /// Skill phrases, lowercased.
    pub skills: Vec<String>,
    /// Institution names, case kept as written.
    pub schools: Vec<String>,
    /// Degree and course names, case kept as written.
    pub courses: Vec<String>,
    /// Job-type phrases.
    pub opportunities: Vec<String>,
}

impl ReferenceData {
    /// Built-in lists, used when the configuration points at no files.
    pub fn builtin() -> Self {
        Self {
            skills: builtin_skills().iter().map(|s| clean_entry(s)).collect(),
            schools: builtin_schools().iter().map(|s| clean_entry(s)).collect(),
            courses: builtin_courses().iter().map(|s| clean_entry(s)).collect(),
            opportunities: OPPORTUNITY_PHRASES.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Built-in lists with any configured list file loaded over them.
    pub fn load(config: &Config) -> Result<Self> {
        let mut data = Self::builtin();
        if let Some(path) = &config.data.skills_file {
            data.skills = read_list(path, true)?;
        }
        if let Some(path) = &config.data.schools_file {
            data.schools = read_list(path, false)?;
        }
        if let Some(path) = &config.data.courses_file {
            data.courses = read_list(path, false)?;
        }
        Ok(data)
    }
}

/// One entry per non-empty line, cleaned of structural punctuation and
/// deduplicated keeping first occurrence. Skills are lowercased; school and
/// course names keep their case.
fn read_list(path: &Path, lowercase: bool) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CvParserError::ReferenceData(format!("{}: {}", path.display(), e)))?;
    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for line in content.lines() {
        let mut entry = clean_entry(line.trim());
        if lowercase {
            entry = entry.to_lowercase();
        }
        if entry.is_empty() || !seen.insert(entry.clone()) {
            continue;
        }
        entries.push(entry);
    }
    Ok(entries)
}

fn builtin_skills() -> Vec<&'static str> {
    vec![
        // Programming languages
        "rust", "python", "javascript", "typescript", "java", "c++", "c#", "go", "ruby", "php",
        "swift", "kotlin", "scala", "r", "matlab",
        // Web
        "react", "vue", "angular", "html", "css", "node.js", "django", "flask", "rails",
        // Infrastructure
        "docker", "kubernetes", "aws", "azure", "gcp", "terraform", "jenkins", "git", "linux",
        "devops", "microservices", "rest", "graphql", "ci/cd",
        // Databases
        "sql", "postgresql", "mysql", "mongodb", "sqlite", "redis", "elasticsearch",
        // Data science
        "machine learning", "deep learning", "natural language processing", "computer vision",
        "data analysis", "tensorflow", "pytorch", "pandas", "numpy", "spark",
        // Soft skills
        "leadership", "communication", "teamwork", "problem solving", "critical thinking",
        "project management", "time management", "collaboration", "mentoring",
    ]
}

fn builtin_schools() -> Vec<&'static str> {
    vec![
        "Massachusetts Institute of Technology",
        "Stanford University",
        "Harvard University",
        "University of Oxford",
        "University of Cambridge",
        "Imperial College London",
        "California Institute of Technology",
        "Carnegie Mellon University",
        "University of Toronto",
        "University of California Berkeley",
        "Georgia Institute of Technology",
        "University of Michigan",
        "University of Washington",
        "Cornell University",
        "Princeton University",
        "Columbia University",
        "New York University",
        "University of Texas at Austin",
        "University of Edinburgh",
        "Technical University of Munich",
        "National University of Singapore",
        "University of Melbourne",
        "University of Cape Town",
        "University of Lagos",
        "University of Nairobi",
        "University of Ghana",
        "Kwame Nkrumah University of Science and Technology",
        "Ashesi University",
        "Makerere University",
        "Cairo University",
    ]
}

fn builtin_courses() -> Vec<&'static str> {
    vec![
        "Computer Science",
        "Computer Engineering",
        "Software Engineering",
        "Information Technology",
        "Electrical Engineering",
        "Mechanical Engineering",
        "Civil Engineering",
        "Mathematics",
        "Statistics",
        "Physics",
        "Chemistry",
        "Biology",
        "Economics",
        "Business Administration",
        "Accounting",
        "Finance",
        "Marketing",
        "Data Science",
        "Artificial Intelligence",
        "Cybersecurity",
        "B.Sc",
        "BSc",
        "M.Sc",
        "MSc",
        "MBA",
        "B.Tech",
        "M.Tech",
        "Bachelor of Science",
        "Bachelor of Arts",
        "Master of Science",
        "Master of Arts",
        "Doctor of Philosophy",
    ]
}
