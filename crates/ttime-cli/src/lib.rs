//! Time log report CLI library.
//!
//! This crate provides the CLI interface for ttime: argument parsing,
//! configuration, input reading, labels and rendering.

mod cli;
pub mod commands;
mod config;
pub mod input;
pub mod labels;
pub mod render;

pub use cli::{Cli, Commands, ReportArgs};
pub use config::Config;
