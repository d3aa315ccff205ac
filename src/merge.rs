//! Merging custom-model labels with rule-based extraction

use crate::engine::{EntityLabel, LabeledEntities};
use crate::parser::ResumeData;
use std::collections::HashSet;

/// Write model-provided fields into `data`. This runs before the
/// rule-based pass, so under first-write-wins the model takes precedence
/// for every field it produced; fields the model has nothing for are left
/// empty for the rules to fill. Each label is guarded independently.
pub fn apply_model_fields(data: &mut ResumeData, model: &LabeledEntities) {
    if data.name.is_none() {
        data.name = model.first(EntityLabel::Name).map(str::to_string);
    }
    if data.designation.is_none() {
        data.designation = model.first(EntityLabel::Designation).map(str::to_string);
    }
    if data.college_name.is_none() {
        data.college_name = model.first(EntityLabel::CollegeName).map(str::to_string);
    }
    if data.graduation_year.is_none() {
        data.graduation_year = model.first(EntityLabel::GraduationYear).map(str::to_string);
    }
    if data.degree.is_none() {
        data.degree = model.first(EntityLabel::Degree).map(str::to_string);
    }
    if data.companies.is_none() {
        let companies: Vec<String> = model
            .fragments(EntityLabel::CompaniesWorkedAt)
            .iter()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .collect();
        if !companies.is_empty() {
            data.companies = Some(companies);
        }
    }
}

/// Union of rule-matched skills and trimmed model skill fragments,
/// deduplicated by exact string and sorted. Replaces the rule-only set.
pub fn merge_skills(rule_skills: Vec<String>, model: &LabeledEntities) -> Vec<String> {
    let mut set: HashSet<String> = rule_skills.into_iter().collect();
    for fragment in model.fragments(EntityLabel::Skills) {
        let trimmed = fragment.trim();
        if !trimmed.is_empty() {
            set.insert(trimmed.to_string());
        }
    }
    let mut merged: Vec<String> = set.into_iter().collect();
    merged.sort();
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with(pairs: &[(EntityLabel, &str)]) -> LabeledEntities {
        let mut model = LabeledEntities::new();
        for (label, fragment) in pairs {
            model.insert(*label, *fragment);
        }
        model
    }

    #[test]
    fn test_model_fields_fill_empty_record() {
        let mut data = ResumeData::default();
        let model = model_with(&[
            (EntityLabel::Name, "Ama Mensah"),
            (EntityLabel::Designation, "Software Engineer"),
            (EntityLabel::Degree, "B.Sc Computer Science"),
        ]);
        apply_model_fields(&mut data, &model);
        assert_eq!(data.name.as_deref(), Some("Ama Mensah"));
        assert_eq!(data.designation.as_deref(), Some("Software Engineer"));
        assert_eq!(data.degree.as_deref(), Some("B.Sc Computer Science"));
        // Labels the model never produced stay empty.
        assert!(data.college_name.is_none());
        assert!(data.graduation_year.is_none());
        assert!(data.companies.is_none());
    }

    #[test]
    fn test_absent_label_leaves_field_for_rules() {
        let mut data = ResumeData::default();
        apply_model_fields(&mut data, &LabeledEntities::new());
        assert!(data.name.is_none());
        data.name = Some("Rule Based".to_string());
        // A later model application must not overwrite.
        apply_model_fields(
            &mut data,
            &model_with(&[(EntityLabel::Name, "Model Name")]),
        );
        assert_eq!(data.name.as_deref(), Some("Rule Based"));
    }

    #[test]
    fn test_companies_collects_all_fragments() {
        let mut data = ResumeData::default();
        let mut model = LabeledEntities::new();
        model.insert(EntityLabel::CompaniesWorkedAt, " Turntabl ");
        model.insert(EntityLabel::CompaniesWorkedAt, "");
        model.insert(EntityLabel::CompaniesWorkedAt, "MTN Ghana");
        apply_model_fields(&mut data, &model);
        assert_eq!(
            data.companies,
            Some(vec!["Turntabl".to_string(), "MTN Ghana".to_string()])
        );
    }

    #[test]
    fn test_skills_union_dedupes_exact_strings() {
        let model = model_with(&[
            (EntityLabel::Skills, " python "),
            (EntityLabel::Skills, "kubernetes"),
        ]);
        let merged = merge_skills(vec!["python".to_string(), "sql".to_string()], &model);
        assert_eq!(merged, vec!["kubernetes", "python", "sql"]);
    }

    #[test]
    fn test_skills_union_without_model() {
        let merged = merge_skills(vec!["sql".to_string()], &LabeledEntities::new());
        assert_eq!(merged, vec!["sql"]);
    }
}
