mod analyze;
mod cli;
mod config;
mod error;
mod input;
mod report;
mod scan;
mod types;

use crate::analyze::Analyzer;
use crate::error::Result;
use crate::input::Source;
use crate::report::text::ExportHeader;
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

const EMPTY_INPUT_NOTICE: &str = "no result: input is empty";

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn below(overall: f32, fail_under: Option<f32>) -> bool {
    fail_under.is_some_and(|threshold| overall < threshold)
}

fn run(cli: cli::Cli) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(&cwd, cli.config.as_deref())?;
    let limits = loaded.input_limits();
    let analyzer = Analyzer::new(loaded.settings());
    tracing::debug!(lead_words = analyzer.settings().lead_words, "analyzer ready");

    match cli.command {
        cli::Commands::Score(cmd) => {
            let source = Source::resolve(cmd.source.input.as_deref(), cmd.source.text.as_deref());
            let text = input::read_source(&source, &limits)?;
            let Some(result) = analyzer.analyze(&text) else {
                println!("{EMPTY_INPUT_NOTICE}");
                return Ok(exit_code::SUCCESS);
            };

            let format = match cmd.format {
                cli::ReportFormat::Text => report::OutputFormat::Text,
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
            };
            let rendered = report::render(&result, &ExportHeader::new(&text), format)?;

            match &cmd.output {
                Some(path) => {
                    std::fs::write(path, &rendered)?;
                    tracing::info!(path = %path.display(), "report written");
                    println!("report written to {}", path.display());
                }
                None => println!("{rendered}"),
            }

            if below(result.overall, cmd.fail_under) {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Gaps(args) => {
            let source = Source::resolve(args.input.as_deref(), args.text.as_deref());
            let text = input::read_source(&source, &limits)?;
            let Some(result) = analyzer.analyze(&text) else {
                println!("{EMPTY_INPUT_NOTICE}");
                return Ok(exit_code::SUCCESS);
            };

            if result.missing.is_empty() {
                println!("gaps: none detected");
                return Ok(exit_code::SUCCESS);
            }

            println!(
                "gaps: showing {} of {} for {}",
                result.missing.len(),
                result.gap_count(),
                source.describe()
            );
            for finding in &result.missing {
                println!("[{}] {}", finding.section.title(), finding.issue);
                println!("  {}", finding.why);
            }
            Ok(exit_code::WARNINGS)
        }
        cli::Commands::Suggest(args) => {
            let source = Source::resolve(args.input.as_deref(), args.text.as_deref());
            let text = input::read_source(&source, &limits)?;
            let Some(result) = analyzer.analyze(&text) else {
                println!("{EMPTY_INPUT_NOTICE}");
                return Ok(exit_code::SUCCESS);
            };

            if result.quick_wins.is_empty() {
                println!("suggest: no quick wins");
                return Ok(exit_code::SUCCESS);
            }

            println!("quick wins:");
            for win in &result.quick_wins {
                println!("- {} [{}]", win.title, win.id);
                println!("  {}", win.hint);
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Batch(cmd) => {
            if !cmd.dir.exists() {
                return Err(error::ReadinessError::InputNotFound(
                    cmd.dir.display().to_string(),
                ));
            }

            let files = scan::filesystem::list_copy_files(&cmd.dir)?;
            if files.is_empty() {
                println!("batch: no .txt or .md files under {}", cmd.dir.display());
                return Ok(exit_code::SUCCESS);
            }

            let mut blocking = false;
            let mut failed = false;
            for path in &files {
                let text = match input::read_source(&Source::File(path), &limits) {
                    Ok(text) => text,
                    Err(e) => {
                        tracing::warn!(
                            path = %path.display(),
                            error = %e,
                            "skipping unreadable file"
                        );
                        println!("   -  {:<22}  {}  {}", "error", e, path.display());
                        failed = true;
                        continue;
                    }
                };
                match analyzer.analyze(&text) {
                    Some(result) => {
                        println!(
                            "{:>4.1}  {:<22}  {} gaps  {}",
                            result.overall,
                            result.band.label(),
                            result.gap_count(),
                            path.display()
                        );
                        blocking |= below(result.overall, cmd.fail_under);
                    }
                    None => println!("   -  {:<22}  -       {}", "empty", path.display()),
                }
            }

            if failed {
                Ok(exit_code::RUNTIME_FAILURE)
            } else if blocking {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
    }
}

fn main() {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
