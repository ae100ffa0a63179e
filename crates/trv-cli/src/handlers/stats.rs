use anyhow::Result;
use std::path::Path;
use trv_engine::ParseOptions;

use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(file: &Path, options: &ParseOptions, format: OutputFormat) -> Result<()> {
    let outcome = super::load(file, options)?;
    let summary = trv_engine::summarize(&outcome.collection);

    let vm = presenters::present_stats(file, &summary);
    ConsoleRenderer::new(format).render(CommandResultViewModel::new(vm))
}
