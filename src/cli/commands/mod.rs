//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`exercat build`, `exercat lint`)
//! - Shared config loading through [`CommandContext`]
//! - Consistent global flag handling

pub mod analyze;
pub mod build;
pub mod consolidate;
pub mod context;
pub mod dispatcher;
pub mod display;
pub mod generate;
pub mod lint;
pub mod preview;
pub mod schema;

pub use context::CommandContext;
pub use dispatcher::{Command, CommandDispatcher, CommandResult};
