//! Custom entity model seam
//!
//! The trained résumé model is an external collaborator; this crate consumes
//! its output as fragments of document text grouped under a closed label
//! set. `JsonEntityModel` adapts the serialized form the model service
//! emits, `NoEntityModel` stands in when no model is configured.

use crate::error::{CvParserError, Result};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;

/// Labels the custom model can emit. The set is closed: fragments under any
/// other label are dropped at the adapter boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Name,
    Designation,
    Skills,
    CollegeName,
    GraduationYear,
    Degree,
    CompaniesWorkedAt,
}

impl EntityLabel {
    pub const ALL: [EntityLabel; 7] = [
        EntityLabel::Name,
        EntityLabel::Designation,
        EntityLabel::Skills,
        EntityLabel::CollegeName,
        EntityLabel::GraduationYear,
        EntityLabel::Degree,
        EntityLabel::CompaniesWorkedAt,
    ];

    /// Label name as the model output spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityLabel::Name => "Name",
            EntityLabel::Designation => "Designation",
            EntityLabel::Skills => "Skills",
            EntityLabel::CollegeName => "College Name",
            EntityLabel::GraduationYear => "Graduation Year",
            EntityLabel::Degree => "Degree",
            EntityLabel::CompaniesWorkedAt => "Companies worked at",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|label| label.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity fragments grouped by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledEntities {
    groups: HashMap<EntityLabel, Vec<String>>,
}

impl LabeledEntities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: EntityLabel, fragment: impl Into<String>) {
        self.groups.entry(label).or_default().push(fragment.into());
    }

    /// All fragments for `label`, empty when the model produced none.
    pub fn fragments(&self, label: EntityLabel) -> &[String] {
        self.groups.get(&label).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First non-blank fragment for `label`, whitespace-trimmed.
    pub fn first(&self, label: EntityLabel) -> Option<&str> {
        self.fragments(label)
            .iter()
            .map(|f| f.trim())
            .find(|f| !f.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }

    /// Build from the wire form, dropping unknown labels.
    pub fn from_wire_map(map: HashMap<String, Vec<String>>) -> Self {
        let mut entities = Self::new();
        for (name, fragments) in map {
            if let Some(label) = EntityLabel::from_wire(&name) {
                entities.groups.entry(label).or_default().extend(fragments);
            }
        }
        entities
    }
}

/// Custom entity model collaborator.
pub trait EntityModel: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Label the document text. Labels the model has nothing for simply do
    /// not appear in the result.
    fn label_entities(&self, text: &str) -> LabeledEntities;
}

/// Stand-in used when no custom model is configured; labels nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEntityModel;

impl EntityModel for NoEntityModel {
    fn name(&self) -> &str {
        "none"
    }

    fn label_entities(&self, _text: &str) -> LabeledEntities {
        LabeledEntities::new()
    }
}

/// Adapter over the model service's serialized output for one document: a
/// JSON object mapping label names to the text fragments tagged with that
/// label.
#[derive(Debug)]
pub struct JsonEntityModel {
    entities: LabeledEntities,
}

impl JsonEntityModel {
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let wire: HashMap<String, Vec<String>> = serde_json::from_str(raw)
            .map_err(|e| CvParserError::ModelOutput(format!("invalid label map: {}", e)))?;
        Ok(Self {
            entities: LabeledEntities::from_wire_map(wire),
        })
    }
}

impl EntityModel for JsonEntityModel {
    fn name(&self) -> &str {
        "json"
    }

    /// The adapter holds precomputed output, so the text is not re-labeled.
    fn label_entities(&self, _text: &str) -> LabeledEntities {
        self.entities.clone()
    }
}
