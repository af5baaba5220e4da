//! CLI argument definitions for the metadata browser.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use ddm_view::DimensionView;

#[derive(Parser)]
#[command(
    name = "ddm",
    version,
    about = "Dataset Discovery Metadata - browse statistical dataset metadata",
    long_about = "Browse a statistical dataset metadata catalog.\n\n\
                  Lists datasets with their editions and versions, renders\n\
                  dimensions as flat lists or sparse hierarchies, and prints\n\
                  API-shaped JSON or terminal tables."
)]
pub struct Cli {
    /// Path to the catalog JSON file.
    #[arg(long = "catalog", value_name = "PATH")]
    pub catalog: PathBuf,

    /// Base URL used for the links embedded in responses.
    #[arg(
        long = "base-url",
        value_name = "URL",
        default_value = "http://localhost:20099"
    )]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List datasets in the catalog, one page at a time.
    Datasets(DatasetsArgs),

    /// Show one dataset with its editions and latest version.
    Dataset(DatasetArgs),

    /// Show one version of a dataset, including its dimension structure.
    Version(VersionArgs),

    /// List the dimensions of a dataset version with their options.
    Dimensions(DimensionsArgs),

    /// Show one dimension rendered with the chosen view.
    Dimension(DimensionArgs),

    /// List the hierarchies known to the catalog.
    Hierarchies(ListArgs),

    /// Show a hierarchy as a tree of placeholder options.
    Hierarchy(HierarchyArgs),
}

#[derive(Parser)]
pub struct DatasetsArgs {
    /// Page number (1-based).
    #[arg(long = "page", default_value_t = 1)]
    pub page: usize,

    /// Number of datasets per page.
    #[arg(long = "size", default_value_t = 20)]
    pub size: usize,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Output format.
    #[arg(long = "output", value_enum, default_value = "json")]
    pub output: OutputArg,
}

#[derive(Parser)]
pub struct DatasetArgs {
    /// Dataset id.
    #[arg(value_name = "DATASET")]
    pub dataset: String,
}

#[derive(Parser)]
pub struct VersionArgs {
    /// Dataset id.
    #[arg(value_name = "DATASET")]
    pub dataset: String,

    /// Edition label.
    #[arg(value_name = "EDITION")]
    pub edition: String,

    /// Version number within the edition.
    #[arg(value_name = "VERSION")]
    pub version: u32,
}

#[derive(Parser)]
pub struct DimensionsArgs {
    #[command(flatten)]
    pub version: VersionArgs,

    #[command(flatten)]
    pub list: ListArgs,
}

#[derive(Parser)]
pub struct DimensionArgs {
    #[command(flatten)]
    pub version: VersionArgs,

    /// Dimension name.
    #[arg(value_name = "NAME")]
    pub name: String,

    /// How to render the dimension's options.
    #[arg(long = "view", value_enum, default_value = "list")]
    pub view: ViewArg,
}

#[derive(Parser)]
pub struct HierarchyArgs {
    /// Hierarchy id.
    #[arg(value_name = "HIERARCHY")]
    pub hierarchy: String,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ViewArg {
    /// Flat sorted list of options.
    List,
    /// Sparse tree following the dimension's hierarchy.
    Hierarchy,
    /// Suppress options entirely.
    None,
}

impl ViewArg {
    pub fn to_view(self) -> DimensionView {
        match self {
            ViewArg::List => DimensionView::List,
            ViewArg::Hierarchy => DimensionView::Hierarchy,
            ViewArg::None => DimensionView::None,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Json,
    Table,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command, OutputArg, ViewArg};

    #[test]
    fn parses_a_datasets_listing() {
        let cli = Cli::try_parse_from([
            "ddm",
            "--catalog",
            "catalog.json",
            "datasets",
            "--page",
            "2",
            "--size",
            "5",
            "--output",
            "table",
        ])
        .unwrap();
        match cli.command {
            Command::Datasets(args) => {
                assert_eq!(args.page, 2);
                assert_eq!(args.size, 5);
                assert!(args.list.output == OutputArg::Table);
            }
            _ => panic!("expected datasets command"),
        }
    }

    #[test]
    fn parses_a_dimension_lookup() {
        let cli = Cli::try_parse_from([
            "ddm",
            "--catalog",
            "catalog.json",
            "dimension",
            "pop-estimates",
            "2015",
            "1",
            "region",
            "--view",
            "hierarchy",
        ])
        .unwrap();
        match cli.command {
            Command::Dimension(args) => {
                assert_eq!(args.version.dataset, "pop-estimates");
                assert_eq!(args.version.edition, "2015");
                assert_eq!(args.version.version, 1);
                assert_eq!(args.name, "region");
                assert!(matches!(args.view, ViewArg::Hierarchy));
            }
            _ => panic!("expected dimension command"),
        }
    }

    #[test]
    fn requires_a_catalog_path() {
        assert!(Cli::try_parse_from(["ddm", "datasets"]).is_err());
    }

    #[test]
    fn defaults_paging_and_view() {
        let cli =
            Cli::try_parse_from(["ddm", "--catalog", "catalog.json", "datasets"]).unwrap();
        match cli.command {
            Command::Datasets(args) => {
                assert_eq!(args.page, 1);
                assert_eq!(args.size, 20);
                assert!(args.list.output == OutputArg::Json);
            }
            _ => panic!("expected datasets command"),
        }
        assert_eq!(cli.base_url, "http://localhost:20099");
    }
}
