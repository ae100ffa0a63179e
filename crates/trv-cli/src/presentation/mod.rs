//! # Presentation Layer
//!
//! Data flows one way:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! - `view_models/`: serializable data contracts. No engine types leak
//!   through, so `--format json` output stays stable when the engine changes.
//! - `presenters/`: pure functions from engine values to view models.
//! - `views/`: `fmt::Display` layouts for plain output.
//! - `renderers/`: picks JSON or plain, adds the status badge.
//! - `formatters/`: small shared string helpers.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, StatusBadge, StatusLevel};
