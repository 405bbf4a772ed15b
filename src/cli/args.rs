//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Tallyplate - Minimal string templating with a headless counter widget.
#[derive(Debug, Parser)]
#[command(name = "tallyplate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .tallyplate.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a template file with variables
    Render(RenderArgs),

    /// Run the counter widget (default if no command specified)
    Counter(CounterArgs),

    /// Report nested, unclosed or malformed template syntax
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `render` command.
#[derive(Debug, Clone, clap::Args)]
pub struct RenderArgs {
    /// Template file to render
    pub file: PathBuf,

    /// Name to register the template under (defaults to the file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// Set a variable (repeatable), e.g. -s count=3 -s show=true
    #[arg(short = 's', long = "set", value_name = "NAME=VALUE")]
    pub set: Vec<String>,

    /// JSON object file with variables; --set entries override it
    #[arg(long, value_name = "FILE")]
    pub context: Option<PathBuf>,
}

/// Arguments for the `counter` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CounterArgs {
    /// Number of simulated clicks
    #[arg(long, default_value_t = 0)]
    pub clicks: u32,

    /// Directory containing counter.tpl and button.tpl (overrides config)
    #[arg(long, value_name = "DIR")]
    pub templates: Option<PathBuf>,

    /// Disable the render cache
    #[arg(long)]
    pub no_cache: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Template files to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
