//! Campus navigation CLI library.
//!
//! This crate provides the output formatting and logging setup shared by the
//! `campusnav-cli` subcommands.

pub mod logging;
pub mod output;
