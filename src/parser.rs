//! Résumé parsing pipeline
//!
//! One `ResumeParser` holds the engine, the optional custom entity model
//! and the reference lists, and turns extracted plain text into a
//! `ResumeData` record. Fields follow first-write-wins: each is populated
//! once and never overwritten, and the model pass runs first so its labels
//! take precedence over the rule-based extractors.

use crate::engine::{EntityModel, HeuristicEngine, NlpEngine, NoEntityModel};
use crate::error::Result;
use crate::extract::education::SchoolEntry;
use crate::extract::experience::ExperienceRecord;
use crate::extract::sections::SectionKind;
use crate::extract::{contact, education, experience, opportunities, sections, skills};
use crate::merge;
use crate::reference::ReferenceData;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Structured parse result. Field order fixes the serialized key order.
/// Scalar fields serialize only when found; collections are always present
/// and empty when nothing matched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default)]
    pub mobile_numbers: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<SchoolEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub college_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graduation_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub degree: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<String>>,
    #[serde(default)]
    pub experience: ExperienceRecord,
    #[serde(default)]
    pub opportunities: Vec<String>,
}

impl ResumeData {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Extraction pipeline over one document at a time.
pub struct ResumeParser {
    engine: Arc<dyn NlpEngine>,
    model: Arc<dyn EntityModel>,
    reference: ReferenceData,
}

impl ResumeParser {
    pub fn new(
        engine: Arc<dyn NlpEngine>,
        model: Arc<dyn EntityModel>,
        reference: ReferenceData,
    ) -> Self {
        Self {
            engine,
            model,
            reference,
        }
    }

    /// Built-in heuristic engine, no custom model.
    pub fn with_defaults(reference: ReferenceData) -> Self {
        Self::new(Arc::new(HeuristicEngine::new()), Arc::new(NoEntityModel), reference)
    }

    pub fn parse(&self, text: &str) -> Result<ResumeData> {
        info!(
            "parsing document ({} bytes) with {} engine, {} model",
            text.len(),
            self.engine.name(),
            self.model.name()
        );
        let stream = self.engine.analyze(text);
        let labeled = self.model.label_entities(text);
        let detected = sections::detect_sections(&stream)?;
        debug!(
            "detected sections: {:?}",
            detected.iter().map(|s| s.section).collect::<Vec<_>>()
        );

        let mut data = ResumeData::default();

        // Model labels land first and win under first-write-wins.
        merge::apply_model_fields(&mut data, &labeled);

        if data.name.is_none() {
            data.name = contact::extract_name(&stream);
        }
        if data.email.is_none() {
            data.email = contact::extract_email(text);
        }
        if data.mobile_numbers.is_empty() {
            data.mobile_numbers = contact::extract_mobile_numbers(text);
        }

        let rule_skills = match sections::content_span(SectionKind::Skills, &detected) {
            Some((start, end)) => {
                // Overlapping headers can invert the raw boundaries; clamp
                // so the span stays well-formed and reads as empty.
                let end = end.unwrap_or(stream.len()).max(start);
                skills::extract_skills(&stream, start..end, &self.reference.skills)?
            }
            None => Vec::new(),
        };
        data.skills = merge::merge_skills(rule_skills, &labeled);

        if data.education.is_empty() {
            if let Some((start, end)) = sections::content_span(SectionKind::Education, &detected)
            {
                let end = end.unwrap_or(stream.len()).max(start);
                let section_text = stream.span_text(start, end);
                data.education =
                    education::extract_education(self.engine.as_ref(), section_text, &self.reference)?;
            }
        }

        if data.experience.is_empty() {
            data.experience = experience::extract_experience(self.engine.as_ref(), text);
        }

        if data.opportunities.is_empty() {
            data.opportunities =
                opportunities::extract_opportunities(&stream, &self.reference.opportunities)?;
        }

        debug!(
            "parsed: {} skills, {} education entries, {} experience sentences",
            data.skills.len(),
            data.education.len(),
            data.experience.sentences.len()
        );
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::JsonEntityModel;

    const SAMPLE: &str = "\
Ama Serwaa Mensah
ama.mensah@example.com
555-123-4567

SKILLS
Python, SQL and machine learning

EDUCATION
Ashesi University
B.Sc Computer Science
Jan 2015 - Jun 2018

EXPERIENCE
Work Experience Turntabl Accra
Open to full time roles
";

    #[test]
    fn test_full_parse_with_defaults() {
        let parser = ResumeParser::with_defaults(ReferenceData::builtin());
        let data = parser.parse(SAMPLE).unwrap();

        assert_eq!(data.name.as_deref(), Some("Ama Serwaa Mensah"));
        assert_eq!(data.email.as_deref(), Some("ama.mensah@example.com"));
        assert_eq!(data.mobile_numbers, vec!["5551234567"]);
        assert_eq!(data.skills, vec!["Python", "SQL", "machine learning"]);
        assert_eq!(data.education.len(), 1);
        assert_eq!(data.education[0].name, "Ashesi University");
        assert_eq!(data.education[0].course, "B.Sc");
        assert_eq!(
            data.education[0].date.as_deref(),
            Some("Jan 2015 - Jun 2018")
        );
        assert!(data
            .experience
            .sentences
            .iter()
            .any(|s| s.contains("Turntabl")));
        assert_eq!(data.opportunities, vec!["full time"]);
        // Model-only fields stay absent without a model.
        assert!(data.designation.is_none());
        assert!(data.degree.is_none());
    }

    #[test]
    fn test_model_name_takes_precedence() {
        let model = JsonEntityModel::from_json(
            r#"{"Name": ["Kofi Annan"], "Designation": ["Data Engineer"], "Skills": ["terraform"]}"#,
        )
        .unwrap();
        let parser = ResumeParser::new(
            Arc::new(HeuristicEngine::new()),
            Arc::new(model),
            ReferenceData::builtin(),
        );
        let data = parser.parse(SAMPLE).unwrap();
        assert_eq!(data.name.as_deref(), Some("Kofi Annan"));
        assert_eq!(data.designation.as_deref(), Some("Data Engineer"));
        // Model skills union with the rule-based matches.
        assert!(data.skills.contains(&"terraform".to_string()));
        assert!(data.skills.contains(&"Python".to_string()));
    }

    #[test]
    fn test_no_sections_still_extracts_contact_fields() {
        let parser = ResumeParser::with_defaults(ReferenceData::builtin());
        let data = parser
            .parse("Ama Mensah reachable at ama@example.com")
            .unwrap();
        assert_eq!(data.name.as_deref(), Some("Ama Mensah"));
        assert_eq!(data.email.as_deref(), Some("ama@example.com"));
        assert!(data.skills.is_empty());
        assert!(data.education.is_empty());
    }

    #[test]
    fn test_serialized_key_order_and_absent_keys() {
        let parser = ResumeParser::with_defaults(ReferenceData::builtin());
        let data = parser.parse(SAMPLE).unwrap();
        let json = data.to_json().unwrap();
        let name_at = json.find("\"name\"").unwrap();
        let skills_at = json.find("\"skills\"").unwrap();
        let education_at = json.find("\"education\"").unwrap();
        let experience_at = json.find("\"experience\"").unwrap();
        assert!(name_at < skills_at);
        assert!(skills_at < education_at);
        assert!(education_at < experience_at);
        // Fields never found serialize as absent keys.
        assert!(!json.contains("\"designation\""));
        assert!(!json.contains("\"companies\""));
    }

    #[test]
    fn test_round_trip() {
        let parser = ResumeParser::with_defaults(ReferenceData::builtin());
        let data = parser.parse(SAMPLE).unwrap();
        let back: ResumeData = serde_json::from_str(&data.to_json().unwrap()).unwrap();
        assert_eq!(back, data);
    }
}
