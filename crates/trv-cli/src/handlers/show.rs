use anyhow::{Result, bail};
use std::path::Path;
use trv_engine::ParseOptions;

use crate::presentation::presenters;
use crate::presentation::view_models::CommandResultViewModel;
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;

pub fn handle(
    file: &Path,
    index: usize,
    options: &ParseOptions,
    format: OutputFormat,
) -> Result<()> {
    let outcome = super::load(file, options)?;
    let collection = &outcome.collection;

    let Some(record) = collection.get(index) else {
        if collection.is_empty() {
            bail!("{} contains no records", file.display());
        }
        bail!(
            "Record index {} out of range: {} has records 0..={}",
            index,
            file.display(),
            collection.len() - 1
        );
    };

    let vm = presenters::present_record_detail(index, collection.len(), record);
    ConsoleRenderer::new(format).render(CommandResultViewModel::new(vm))
}
