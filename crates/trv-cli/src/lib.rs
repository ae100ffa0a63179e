// NOTE: trv Architecture
//
// trv-types   record schema, format errors and range warnings
// trv-engine  parser, aggregates, lookups, JSON/CSV export
// trv (this)  argument parsing, config, presentation
//
// Every command parses the whole input file first. A format error aborts
// the command before any output is produced, so a partial table or export
// never reaches stdout.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod presentation;
mod services;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
