//! CV parser library

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod extract;
pub mod input;
pub mod merge;
pub mod output;
pub mod parser;
pub mod reference;

pub use error::{CvParserError, Result};
pub use config::Config;
pub use parser::{ResumeData, ResumeParser};
