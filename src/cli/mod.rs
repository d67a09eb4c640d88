//! Command-line interface for sitterview.
//!
//! - Argument parsing (`args`)
//! - Command handlers (`commands`)
//! - Table and JSON output (`render`)
//! - Logging and colour setup (`setup`)

pub mod args;
pub mod commands;
pub mod render;
pub mod setup;

pub use args::{Cli, Commands, OutputFormat, PetsArgs, SittersArgs, ViewArgs};
pub use commands::{handle_pets_command, handle_sitters_command};
pub use setup::{configure_color, init_logging};
