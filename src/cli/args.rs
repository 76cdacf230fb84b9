//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::lint::OutputFormat;

/// exercat - Reconcile exercise catalogs and infer missing entries.
#[derive(Debug, Parser)]
#[command(name = "exercat")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides exercat.yml discovery)
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
    /// Run the full pipeline (default if no command specified)
    Build(BuildArgs),

    /// Merge sources and write the catalog without inference
    Consolidate(ConsolidateArgs),

    /// Complete the existing catalog from its relationships
    Generate(GenerateArgs),

    /// Report source coverage and missing exercises
    Analyze(AnalyzeArgs),

    /// Validate the catalog against its relationships
    Lint(LintArgs),

    /// Show the records inference would produce for exercise ids
    Preview(PreviewArgs),

    /// Print the JSON Schema of the catalog document
    Schema,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Fail if the output is not up to date, without writing
    #[arg(long, conflicts_with = "dry_run")]
    pub check: bool,

    /// Run every stage but skip the write
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `consolidate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConsolidateArgs {
    /// Run every stage but skip the write
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `generate` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct GenerateArgs {
    /// Run every stage but skip the write
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `analyze` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct AnalyzeArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

/// Arguments for the `lint` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct LintArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the `preview` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PreviewArgs {
    /// Exercise ids to infer records for
    #[arg(required = true, value_name = "ID")]
    pub ids: Vec<String>,
}
