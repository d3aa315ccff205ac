//! Per-field extractors over the analyzed document
//!
//! Section-scoped extractors (skills, education) receive their token span
//! from the section resolver; document-wide extractors (contact,
//! experience, opportunities) run over the full stream.

pub mod contact;
pub mod education;
pub mod experience;
pub mod opportunities;
pub mod sections;
pub mod skills;

pub use education::SchoolEntry;
pub use experience::ExperienceRecord;
pub use sections::{SectionKind, SectionMatch};
