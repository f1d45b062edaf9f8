mod aggregate;
mod cli;
mod config;
mod error;
mod report;
mod scale;
mod transcript;
mod types;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::{CgpaError, Result};
use crate::types::config::CgpaConfig;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(
    flag: Option<cli::ReportFormat>,
    config: Option<&CgpaConfig>,
) -> report::OutputFormat {
    if let Some(format) = flag {
        return match format {
            cli::ReportFormat::Text => report::OutputFormat::Text,
            cli::ReportFormat::Md => report::OutputFormat::Md,
            cli::ReportFormat::Json => report::OutputFormat::Json,
        };
    }
    match config.and_then(|config| config.report.format) {
        None | Some(types::config::ReportFormat::Text) => report::OutputFormat::Text,
        Some(types::config::ReportFormat::Md) => report::OutputFormat::Md,
        Some(types::config::ReportFormat::Json) => report::OutputFormat::Json,
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Compute(cmd) => {
            let transcript = transcript::load::load_transcript(&cmd.file)?;
            tracing::debug!(semesters = transcript.semesters.len(), "transcript loaded");

            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(&cwd)?;
            let format = output_format(cmd.format, loaded.as_ref());

            let summary = aggregate::aggregate(&transcript);
            let has_exclusions = summary.has_exclusions();
            let no_data = summary.contributing == 0;
            if !summary.skips.is_empty() {
                tracing::info!(
                    skipped = summary.skips.len(),
                    "subjects excluded from the aggregate"
                );
            }

            let report = report::CgpaReport::new(summary);
            let rendered = report::render(&report, format)?;
            println!("{rendered}");

            if no_data {
                tracing::warn!("no semester contributed a valid SGPA");
                Ok(exit_code::BLOCKING)
            } else if has_exclusions {
                Ok(exit_code::WARNINGS)
            } else {
                Ok(exit_code::SUCCESS)
            }
        }
        cli::Commands::Check(cmd) => {
            let transcript = transcript::load::load_transcript(&cmd.file)?;
            let summary = aggregate::aggregate(&transcript);
            let findings = aggregate::findings::findings(&summary);

            if findings.is_empty() {
                println!("check: no findings");
                println!(
                    "CGPA: {}",
                    report::format_points(aggregate::compute_cgpa(&transcript))
                );
                return Ok(exit_code::SUCCESS);
            }

            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(&cwd)?;
            let strict = cmd.strict || loaded.map(|config| config.check.strict).unwrap_or(false);

            for finding in &findings {
                let level = if finding.blocking { "BLOCKING" } else { "WARN" };
                println!("[{level}] {}: {}", finding.id, finding.title);
                println!("  {}", finding.body);
            }
            println!(
                "CGPA: {}",
                report::format_points(aggregate::compute_cgpa(&transcript))
            );

            if findings.iter().any(|finding| finding.blocking) || strict {
                Ok(exit_code::BLOCKING)
            } else {
                Ok(exit_code::WARNINGS)
            }
        }
        cli::Commands::Scale => {
            println!("Grade scale:");
            for grade in scale::ALL_GRADES {
                println!("  {} = {}", grade, grade.points());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Init(cmd) => {
            if cmd.file.exists() && !cmd.force {
                return Err(CgpaError::AlreadyExists(cmd.file.display().to_string()));
            }
            let rendered = toml::to_string_pretty(&transcript::template())?;
            std::fs::write(&cmd.file, rendered)?;
            println!("Template transcript written to {}.", cmd.file.display());
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
