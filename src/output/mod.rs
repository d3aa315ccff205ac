//! Output rendering for parse results

pub mod formatter;

pub use formatter::{format_output, ConsoleFormatter, JsonFormatter, MarkdownFormatter, OutputFormatter};
