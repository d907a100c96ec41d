//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use conform::output::OutputMode;

/// conform - Check source artifacts against a declarative checklist
#[derive(Parser, Debug)]
#[command(
    name = "conform",
    version,
    about = "Check source artifacts against a declarative checklist",
    long_about = "Verify that files exist and contain the imports, declarations and\n\
                  identifiers a checklist expects.\n\n\
                  Checks are literal substring matches: nothing is parsed or executed."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate every expectation and report (exit 1 if any failed)
    Run {
        /// Checklist file (default: nearest .conform.toml)
        #[arg(short, long)]
        checklist: Option<PathBuf>,

        /// Resolve targets against this directory instead of the checklist's base_dir
        #[arg(long)]
        base_dir: Option<PathBuf>,

        /// Only evaluate expectations in this group
        #[arg(short, long)]
        group: Option<String>,
    },

    /// List the expectations in a checklist
    List {
        /// Checklist file (default: nearest .conform.toml)
        #[arg(short, long)]
        checklist: Option<PathBuf>,
    },

    /// Check a checklist for malformed expectations
    Validate {
        /// Checklist file (default: nearest .conform.toml)
        #[arg(short, long)]
        checklist: Option<PathBuf>,
    },

    /// Create a .conform.toml in the current directory
    Init {
        /// Template: blank, editor3d
        #[arg(short, long, default_value = "blank")]
        template: String,

        /// Overwrite an existing checklist
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let passed = match cli.command {
        Some(Command::Run {
            checklist,
            base_dir,
            group,
        }) => commands::run(
            checklist.as_deref(),
            base_dir.as_deref(),
            group.as_deref(),
            output_mode,
        )?,
        Some(Command::List { checklist }) => commands::list(checklist.as_deref(), output_mode)?,
        Some(Command::Validate { checklist }) => {
            commands::validate(checklist.as_deref(), output_mode)?
        },
        Some(Command::Init { template, force }) => commands::init(&template, force, output_mode)?,
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": conform::VERSION
                    })
                );
            } else {
                println!("conform v{}", conform::VERSION);
            }
            true
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": conform::VERSION,
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("conform v{}", conform::VERSION);
                println!("\nRun 'conform --help' for usage");
                println!("Run 'conform init' to get started");
            }
            true
        },
    };

    Ok(if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
