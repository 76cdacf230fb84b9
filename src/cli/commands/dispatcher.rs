//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::cli::args::{BuildArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

use super::context::CommandContext;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for progress and diagnostics
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project context.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Get the command context.
    pub fn context(&self) -> &CommandContext {
        &self.context
    }

    /// Dispatch and execute a command.
    ///
    /// Routes the CLI subcommand to the appropriate command implementation
    /// and executes it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = self.context.clone();
        match &cli.command {
            Some(Commands::Build(args)) => super::build::BuildCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Consolidate(args)) => {
                super::consolidate::ConsolidateCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Generate(args)) => {
                super::generate::GenerateCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Analyze(args)) => {
                super::analyze::AnalyzeCommand::new(ctx, args.clone()).execute(ui)
            }
            Some(Commands::Lint(args)) => super::lint::LintCommand::new(ctx, args.clone()).execute(ui),
            Some(Commands::Preview(args)) => {
                super::preview::PreviewCommand::new(args.clone()).execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand::new().execute(ui),
            None => {
                // Default to build with default args
                super::build::BuildCommand::new(ctx, BuildArgs::default()).execute(ui)
            }
        }
    }
}
