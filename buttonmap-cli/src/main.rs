//! buttonmap CLI - button migration analysis

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use buttonmap_core::html::render_html_dashboard;
use buttonmap_core::{config, reference};
use buttonmap_core::{analyze, atomic_write, render_json, render_text};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "buttonmap")]
#[command(about = "Classify legacy buttons into the new size/variant system")]
#[command(version = env!("BUTTONMAP_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a button list and report the result
    Analyze {
        /// Path to buttons JSON (default: from config)
        path: Option<PathBuf>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Output file path (for HTML format, default: from config)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Rewrite the reference page to follow the new size rules
    PatchReference {
        /// Path to buttons JSON (overrides config file)
        #[arg(long)]
        buttons: Option<PathBuf>,

        /// Path to the reference HTML page (overrides config file)
        #[arg(long)]
        reference: Option<PathBuf>,

        /// Report what would change without writing the page
        #[arg(long)]
        dry_run: bool,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate or show the configuration
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Html,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            config: config_path,
        } => {
            let resolved = load_config(&cwd, config_path.as_deref())?;

            // CLI arguments override config file values
            let buttons_path = absolute(&cwd, path.unwrap_or(resolved.buttons));
            if !buttons_path.exists() {
                anyhow::bail!("Path does not exist: {}", buttons_path.display());
            }

            let analysis = analyze(&buttons_path)?;

            match format {
                OutputFormat::Text => {
                    print!("{}", render_text(&analysis));
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&analysis));
                }
                OutputFormat::Html => {
                    let output_path = absolute(&cwd, output.unwrap_or(resolved.output));
                    atomic_write(&output_path, &render_html_dashboard(&analysis))
                        .context("failed to write HTML dashboard")?;
                    println!("HTML dashboard written to {}", output_path.display());
                }
            }
        }
        Commands::PatchReference {
            buttons,
            reference: reference_path,
            dry_run,
            config: config_path,
        } => {
            let resolved = load_config(&cwd, config_path.as_deref())?;
            let buttons_path = absolute(&cwd, buttons.unwrap_or(resolved.buttons));
            let reference_path = absolute(&cwd, reference_path.unwrap_or(resolved.reference));

            let outcome = reference::patch_reference_file(&buttons_path, &reference_path, dry_run)?;

            if outcome.unmatched_buttons() > 0 {
                eprintln!(
                    "warning: reference page has {} button block(s) for {} button(s)",
                    outcome.labels_updated, outcome.button_count
                );
            }

            if dry_run {
                println!(
                    "Dry-run: would update {} with new sizing logic",
                    reference_path.display()
                );
            } else {
                println!(
                    "Successfully updated {} with new sizing logic.",
                    reference_path.display()
                );
            }
            print!("{}", reference::render_summary(&outcome));
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let source = match path {
                    Some(p) => {
                        config::load_config_file(&p)?;
                        Some(p)
                    }
                    None => config::discover_config(&cwd)?.map(|(_, p)| p),
                };
                match source {
                    Some(p) => println!("Config valid: {}", p.display()),
                    None => println!("No config file found; using defaults"),
                }
            }
            ConfigAction::Show { path } => {
                let resolved = config::load_and_resolve(&cwd, path.as_deref())
                    .context("failed to load configuration")?;
                println!("{}", resolved.to_json()?);
            }
        },
    }

    Ok(())
}

/// Load configuration, announcing the file it came from
fn load_config(cwd: &Path, config_path: Option<&Path>) -> anyhow::Result<config::ResolvedConfig> {
    let resolved =
        config::load_and_resolve(cwd, config_path).context("failed to load configuration")?;
    if let Some(path) = &resolved.config_path {
        eprintln!("Using config: {}", path.display());
    }
    Ok(resolved)
}

/// Normalize path to absolute
fn absolute(cwd: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        cwd.join(path)
    } else {
        path
    }
}
