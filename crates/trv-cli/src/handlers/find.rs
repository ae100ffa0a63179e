use anyhow::Result;
use std::path::Path;
use trv_engine::ParseOptions;

use crate::presentation::presenters;
use crate::presentation::view_models::{CommandResultViewModel, StatusBadge};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(
    file: &Path,
    name: Option<String>,
    year: Option<i32>,
    options: &ParseOptions,
    format: OutputFormat,
) -> Result<()> {
    let outcome = super::load(file, options)?;
    let matches = super::select(&outcome.collection, name.as_deref(), year);
    log::debug!("{} of {} records matched", matches.len(), outcome.collection.len());

    let badge = StatusBadge::info(format!("{} matching record(s)", matches.len()));
    let vm = presenters::present_record_list(file, name.as_deref(), year, matches);
    ConsoleRenderer::new(format).render(CommandResultViewModel::new(vm).with_badge(badge))
}
