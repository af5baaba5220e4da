//! Command execution: load the catalog, query the service, print.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use ddm_model::Catalog;
use ddm_service::{MetadataService, UrlBuilder};

use crate::cli::{Cli, Command, DatasetsArgs, OutputArg};
use crate::output;

pub fn run(cli: &Cli) -> Result<()> {
    let catalog = Catalog::from_json_file(&cli.catalog)
        .with_context(|| format!("load catalog {}", cli.catalog.display()))?;
    debug!(catalog = %cli.catalog.display(), base_url = %cli.base_url, "serving catalog queries");
    let service = MetadataService::new(&catalog, UrlBuilder::new(&cli.base_url));

    match &cli.command {
        Command::Datasets(args) => run_datasets(&service, args),
        Command::Dataset(args) => print_json(&service.find_dataset(&args.dataset)?),
        Command::Version(args) => {
            print_json(&service.find_version(&args.dataset, &args.edition, args.version)?)
        }
        Command::Dimensions(args) => {
            let dimensions = service.list_dimensions(
                &args.version.dataset,
                &args.version.edition,
                args.version.version,
            )?;
            match args.list.output {
                OutputArg::Json => print_json(&dimensions),
                OutputArg::Table => {
                    output::print_dimension_table(&dimensions);
                    Ok(())
                }
            }
        }
        Command::Dimension(args) => print_json(&service.find_dimension(
            &args.version.dataset,
            &args.version.edition,
            args.version.version,
            &args.name,
            args.view.to_view(),
        )?),
        Command::Hierarchies(args) => {
            let hierarchies = service.list_hierarchies();
            match args.output {
                OutputArg::Json => print_json(&hierarchies),
                OutputArg::Table => {
                    output::print_hierarchy_table(&hierarchies);
                    Ok(())
                }
            }
        }
        Command::Hierarchy(args) => print_json(&service.hierarchy(&args.hierarchy)?),
    }
}

fn run_datasets(service: &MetadataService<'_>, args: &DatasetsArgs) -> Result<()> {
    let page = service.list_datasets(args.page, args.size)?;
    match args.list.output {
        OutputArg::Json => print_json(&page),
        OutputArg::Table => {
            output::print_dataset_page(&page);
            Ok(())
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
