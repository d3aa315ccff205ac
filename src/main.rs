//! CV parser: rule-based resume field extraction tool

mod cli;
mod config;
mod engine;
mod error;
mod extract;
mod input;
mod merge;
mod output;
mod parser;
mod reference;

use clap::Parser;
use cli::{Cli, Commands, ConfigAction};
use config::Config;
use engine::{EntityModel, HeuristicEngine, JsonEntityModel, NoEntityModel};
use error::{CvParserError, Result};
use indicatif::{ProgressBar, ProgressStyle};
use input::{FileType, InputManager};
use log::{error, info, warn};
use parser::ResumeParser;
use reference::ReferenceData;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Parse {
            file,
            model_output,
            output,
            save,
        } => {
            cli::validate_file_extension(&file, FileType::supported_extensions())
                .map_err(CvParserError::InvalidInput)?;
            let output_format =
                cli::parse_output_format(&output).map_err(CvParserError::InvalidInput)?;

            info!("Parsing resume: {}", file.display());

            let mut input_manager =
                InputManager::new().with_cache(config.parsing.enable_caching);
            let text = input_manager.extract_text(&file).await?;

            let model: Arc<dyn EntityModel> = match &model_output {
                Some(path) => {
                    info!("Loading entity model output: {}", path.display());
                    Arc::new(JsonEntityModel::from_path(path)?)
                }
                None => Arc::new(NoEntityModel),
            };

            let reference = ReferenceData::load(&config)?;
            let resume_parser =
                ResumeParser::new(Arc::new(HeuristicEngine::new()), model, reference);
            let data = resume_parser.parse(&text)?;

            let rendered = output::formatter::format_output(
                &data,
                output_format,
                config.output.color_output,
                config.output.pretty_json,
            )?;

            match save {
                Some(path) => {
                    tokio::fs::write(&path, rendered).await?;
                    println!("💾 Saved output to: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Batch { dir, out } => {
            let files = collect_supported_files(&dir).await?;
            if files.is_empty() {
                println!("No supported resume files found in: {}", dir.display());
                return Ok(());
            }

            tokio::fs::create_dir_all(&out).await?;

            let reference = ReferenceData::load(&config)?;
            let resume_parser = ResumeParser::with_defaults(reference);
            let mut input_manager =
                InputManager::new().with_cache(config.parsing.enable_caching);

            println!("📂 Parsing {} resume files from {}", files.len(), dir.display());
            let progress = ProgressBar::new(files.len() as u64);
            progress.set_style(
                ProgressStyle::default_bar()
                    .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .expect("progress bar template"),
            );

            let mut parsed = 0usize;
            let mut failed = 0usize;
            for file in &files {
                progress.set_message(
                    file.file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default(),
                );
                match parse_one(&mut input_manager, &resume_parser, file).await {
                    Ok(data) => {
                        let target = out
                            .join(file.file_stem().unwrap_or_default())
                            .with_extension("json");
                        tokio::fs::write(&target, data.to_json_pretty()?).await?;
                        parsed += 1;
                    }
                    Err(e) => {
                        warn!("Skipping {}: {}", file.display(), e);
                        failed += 1;
                    }
                }
                progress.inc(1);
            }
            progress.finish_and_clear();

            println!("✅ Parsed {} files, {} failed", parsed, failed);
            println!("📁 Records written to: {}", out.display());
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration file: {}", Config::config_path().display());
                let rendered = toml::to_string_pretty(&config).map_err(|e| {
                    CvParserError::Configuration(format!("Failed to render config: {}", e))
                })?;
                println!("{}", rendered);
            }
            Some(ConfigAction::Reset) => {
                Config::default().save()?;
                println!("✅ Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

async fn parse_one(
    input_manager: &mut InputManager,
    resume_parser: &ResumeParser,
    file: &Path,
) -> Result<parser::ResumeData> {
    let text = input_manager.extract_text(file).await?;
    resume_parser.parse(&text)
}

async fn collect_supported_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.is_file() && FileType::is_supported(&path) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
