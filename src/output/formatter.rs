//! Output formatters for parse results

use crate::config::OutputFormat;
use crate::error::Result;
use crate::parser::ResumeData;
use colored::{Color, Colorize};

/// Renders a parsed résumé record in one output format.
pub trait OutputFormatter {
    fn format_record(&self, data: &ResumeData) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors.
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON formatter for downstream tooling.
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for saved reports.
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.color(Color::Blue).bold())
        } else {
            format!("\n{}\n", title)
        }
    }

    fn field(&self, label: &str, value: &str) -> String {
        format!("{} {}\n", self.colorize(&format!("{}:", label), Color::Green), value)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_record(&self, data: &ResumeData) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.header("RESUME EXTRACTION"));
        if let Some(name) = &data.name {
            output.push_str(&self.field("Name", name));
        }
        if let Some(designation) = &data.designation {
            output.push_str(&self.field("Designation", designation));
        }
        if let Some(email) = &data.email {
            output.push_str(&self.field("Email", email));
        }
        if !data.mobile_numbers.is_empty() {
            output.push_str(&self.field("Mobile", &data.mobile_numbers.join(", ")));
        }

        output.push_str(&self.header(&format!("Skills ({})", data.skills.len())));
        for skill in &data.skills {
            output.push_str(&format!("  - {}\n", skill));
        }

        output.push_str(&self.header(&format!("Education ({})", data.education.len())));
        for entry in &data.education {
            let mut line = format!("  - {}", self.colorize(&entry.name, Color::Cyan));
            if !entry.course.is_empty() {
                line.push_str(&format!(", {}", entry.course));
            }
            if let Some(date) = &entry.date {
                line.push_str(&format!(" ({})", date));
            }
            line.push('\n');
            output.push_str(&line);
        }
        if let Some(college) = &data.college_name {
            output.push_str(&self.field("College", college));
        }
        if let Some(year) = &data.graduation_year {
            output.push_str(&self.field("Graduation", year));
        }
        if let Some(degree) = &data.degree {
            output.push_str(&self.field("Degree", degree));
        }

        if let Some(companies) = &data.companies {
            output.push_str(&self.header(&format!("Companies ({})", companies.len())));
            for company in companies {
                output.push_str(&format!("  - {}\n", company));
            }
        }

        output.push_str(&self.header(&format!(
            "Experience ({})",
            data.experience.sentences.len()
        )));
        for sentence in &data.experience.sentences {
            output.push_str(&format!("  - {}\n", sentence.trim()));
        }

        if !data.opportunities.is_empty() {
            output.push_str(&self.header("Opportunities"));
            output.push_str(&format!("  {}\n", data.opportunities.join(", ")));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_record(&self, data: &ResumeData) -> Result<String> {
        if self.pretty {
            data.to_json_pretty()
        } else {
            data.to_json()
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_record(&self, data: &ResumeData) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume Extraction\n\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str("## Contact\n\n");
        if let Some(name) = &data.name {
            output.push_str(&format!("- **Name**: {}\n", name));
        }
        if let Some(designation) = &data.designation {
            output.push_str(&format!("- **Designation**: {}\n", designation));
        }
        if let Some(email) = &data.email {
            output.push_str(&format!("- **Email**: {}\n", email));
        }
        for number in &data.mobile_numbers {
            output.push_str(&format!("- **Mobile**: {}\n", number));
        }
        output.push('\n');

        output.push_str("## Skills\n\n");
        for skill in &data.skills {
            output.push_str(&format!("- {}\n", skill));
        }
        output.push('\n');

        output.push_str("## Education\n\n");
        for entry in &data.education {
            let mut line = format!("- {}", entry.name);
            if !entry.course.is_empty() {
                line.push_str(&format!(", {}", entry.course));
            }
            if let Some(date) = &entry.date {
                line.push_str(&format!(" ({})", date));
            }
            line.push('\n');
            output.push_str(&line);
        }
        if let Some(degree) = &data.degree {
            output.push_str(&format!("- Degree: {}\n", degree));
        }
        if let Some(college) = &data.college_name {
            output.push_str(&format!("- College: {}\n", college));
        }
        if let Some(year) = &data.graduation_year {
            output.push_str(&format!("- Graduation: {}\n", year));
        }
        output.push('\n');

        if let Some(companies) = &data.companies {
            output.push_str("## Companies\n\n");
            for company in companies {
                output.push_str(&format!("- {}\n", company));
            }
            output.push('\n');
        }

        output.push_str("## Experience\n\n");
        for sentence in &data.experience.sentences {
            output.push_str(&format!("- {}\n", sentence.trim()));
        }
        output.push('\n');

        output.push_str("## Opportunities\n\n");
        for opportunity in &data.opportunities {
            output.push_str(&format!("- {}\n", opportunity));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Render `data` in the requested format.
pub fn format_output(data: &ResumeData, format: OutputFormat, use_colors: bool, pretty_json: bool) -> Result<String> {
    match format {
        OutputFormat::Console => ConsoleFormatter::new(use_colors).format_record(data),
        OutputFormat::Json => JsonFormatter::new(pretty_json).format_record(data),
        OutputFormat::Markdown => MarkdownFormatter::new().format_record(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::education::SchoolEntry;
    use crate::extract::experience::ExperienceRecord;

    fn sample() -> ResumeData {
        ResumeData {
            name: Some("Ama Mensah".to_string()),
            email: Some("ama@example.com".to_string()),
            mobile_numbers: vec!["5551234567".to_string()],
            skills: vec!["python".to_string(), "sql".to_string()],
            education: vec![SchoolEntry {
                name: "Ashesi University".to_string(),
                course: "B.Sc".to_string(),
                date: Some("2014 - 2018".to_string()),
            }],
            experience: ExperienceRecord {
                sentences: vec![" Turntabl Accra".to_string()],
            },
            opportunities: vec!["full time".to_string()],
            ..ResumeData::default()
        }
    }

    #[test]
    fn test_console_plain_lists_fields() {
        let rendered = ConsoleFormatter::new(false).format_record(&sample()).unwrap();
        assert!(rendered.contains("Name: Ama Mensah"));
        assert!(rendered.contains("Skills (2)"));
        assert!(rendered.contains("  - python"));
        assert!(rendered.contains("Ashesi University, B.Sc (2014 - 2018)"));
        assert!(rendered.contains("full time"));
    }

    #[test]
    fn test_console_skips_absent_fields() {
        let rendered = ConsoleFormatter::new(false)
            .format_record(&ResumeData::default())
            .unwrap();
        assert!(!rendered.contains("Name:"));
        assert!(!rendered.contains("Designation:"));
        assert!(rendered.contains("Skills (0)"));
    }

    #[test]
    fn test_json_output_is_valid() {
        let rendered = JsonFormatter::new(false).format_record(&sample()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["name"], "Ama Mensah");
        assert_eq!(value["skills"][0], "python");
        assert!(value.get("designation").is_none());
    }

    #[test]
    fn test_markdown_sections() {
        let rendered = MarkdownFormatter::new().format_record(&sample()).unwrap();
        assert!(rendered.contains("# Resume Extraction"));
        assert!(rendered.contains("## Skills"));
        assert!(rendered.contains("- **Email**: ama@example.com"));
        assert!(rendered.contains("- Ashesi University, B.Sc (2014 - 2018)"));
    }

    #[test]
    fn test_format_output_dispatch() {
        let data = sample();
        for format in [OutputFormat::Console, OutputFormat::Json, OutputFormat::Markdown] {
            let rendered = format_output(&data, format, false, false).unwrap();
            assert!(rendered.contains("python"));
        }
    }
}
