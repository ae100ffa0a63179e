use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::export::ExportRequest;
use crate::config::Config;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    let options = config.parse_options(cli.units.map(Into::into));
    log::debug!(
        "Parsing with units={} bounds={:?}",
        options.units,
        options.bounds
    );

    match cli.command {
        Commands::Stats { file } => handlers::stats::handle(&file, &options, cli.format),

        Commands::Find { file, name, year } => {
            handlers::find::handle(&file, name, year, &options, cli.format)
        }

        Commands::Show { file, index } => {
            handlers::show::handle(&file, index, &options, cli.format)
        }

        Commands::Export {
            file,
            to,
            layout,
            output,
            name,
            year,
        } => {
            let request = ExportRequest {
                to,
                layout: layout.map(Into::into).unwrap_or(config.export.csv_layout),
                pretty_json: config.export.pretty_json,
                output,
                name,
                year,
            };
            handlers::export::handle(&file, request, &options, cli.format)
        }

        Commands::Validate { file } => handlers::validate::handle(&file, &options, cli.format),
    }
}
