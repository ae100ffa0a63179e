use anyhow::Result;
use std::path::Path;
use trv_engine::ParseOptions;

use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, StatusBadge};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

/// Format errors surface as command errors; range warnings do not fail.
pub fn handle(file: &Path, options: &ParseOptions, format: OutputFormat) -> Result<()> {
    let outcome = super::load(file, options)?;

    let badge = if outcome.warnings.is_empty() {
        StatusBadge::success("Valid")
    } else {
        StatusBadge::warning(format!(
            "Valid with {} range warning(s)",
            outcome.warnings.len()
        ))
    };

    let vm = presenters::present_validation(file, options.units, &outcome);
    ConsoleRenderer::new(format).render(CommandResultViewModel::new(vm).with_badge(badge))
}
