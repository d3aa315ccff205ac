//! Résumé file type detection

use std::path::Path;

/// Input formats the extraction layer handles. Word-processor and image
/// formats go through external text extraction before reaching the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => FileType::Unknown,
        }
    }

    /// Extensions accepted by the parse and batch commands.
    pub fn supported_extensions() -> &'static [&'static str] {
        &["pdf", "txt", "md"]
    }

    pub fn is_supported(path: &Path) -> bool {
        Self::from_path(path) != FileType::Unknown
    }
}
