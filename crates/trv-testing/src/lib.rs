//! Testing infrastructure for trv integration tests.
//!
//! - `TestWorld`: isolated temp directory with input files and a CLI runner
//! - `fixtures`: sample track files and inline scenario text
//! - `assertions`: checks over the CLI's JSON output

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::SampleFiles;
pub use world::{CliResult, TestWorld};
