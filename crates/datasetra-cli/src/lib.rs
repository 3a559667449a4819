//! Shared CLI definitions for datasetra.
//!
//! Used by the main application and by the build script (manpage).

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Chart type requested on the command line.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ChartTypeArg {
    /// Line chart over row labels
    #[default]
    Line,
    /// Bar chart over row labels
    Bar,
    /// Scatter plot with a numeric x axis
    Scatter,
}

/// Sort direction forwarded to the backend filter endpoint.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum SortDirArg {
    #[default]
    Asc,
    Desc,
}

/// Command-line arguments for datasetra
#[derive(Clone, Parser, Debug)]
#[command(
    name = "datasetra",
    version,
    about = "Chart and export CSV files through a Datasetra backend",
    long_about = "Uploads a CSV file to a Datasetra backend, detects numeric columns from up to \
                  2000 fetched rows, and renders a line, bar, or scatter chart to PNG or SVG. \
                  The filtered CSV can be downloaded with --export."
)]
pub struct Args {
    /// Path to the CSV file to upload (not required with --generate-config)
    #[arg(required_unless_present = "generate_config", value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Backend base URL (overrides config [backend] base_url). Example: http://127.0.0.1:8000
    #[arg(long = "server", value_name = "URL")]
    pub server: Option<String>,

    /// Chart type to render
    #[arg(long = "chart", value_enum, default_value_t = ChartTypeArg::Line)]
    pub chart: ChartTypeArg,

    /// Column for the x axis. Defaults to the first column (first numeric column for scatter)
    #[arg(long = "x", value_name = "COL")]
    pub x_column: Option<String>,

    /// Numeric column for the y axis. Use once per series; defaults to the first numeric column
    #[arg(long = "y", value_name = "COL")]
    pub y_columns: Vec<String>,

    /// Chart output file (.png or .svg). Default: chart.png
    #[arg(long = "output", short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Chart width in pixels (overrides config [chart] width)
    #[arg(long = "width")]
    pub width: Option<u32>,

    /// Chart height in pixels (overrides config [chart] height)
    #[arg(long = "height")]
    pub height: Option<u32>,

    /// Sort rows by this column before charting
    #[arg(long = "sort-by", value_name = "COL")]
    pub sort_by: Option<String>,

    /// Sort direction used with --sort-by
    #[arg(long = "sort-dir", value_enum, default_value_t = SortDirArg::Asc)]
    pub sort_dir: SortDirArg,

    /// Also download the (sorted) CSV from the backend to this file
    #[arg(long = "export", value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Enable debug logging (same as RUST_LOG=debug)
    #[arg(long = "debug", action)]
    pub debug: bool,

    /// Generate default configuration file at ~/.config/datasetra/config.toml
    #[arg(long = "generate-config", action)]
    pub generate_config: bool,

    /// Force overwrite existing config file when using --generate-config
    #[arg(long = "force", requires = "generate_config", action)]
    pub force: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_repeated_y_columns() {
        let args = Args::try_parse_from([
            "datasetra", "data.csv", "--chart", "scatter", "--x", "price", "--y", "qty", "--y",
            "total",
        ])
        .unwrap();
        assert_eq!(args.chart, ChartTypeArg::Scatter);
        assert_eq!(args.x_column.as_deref(), Some("price"));
        assert_eq!(args.y_columns, vec!["qty".to_string(), "total".to_string()]);
        assert_eq!(args.sort_dir, SortDirArg::Asc);
    }

    #[test]
    fn test_path_optional_with_generate_config() {
        let args = Args::try_parse_from(["datasetra", "--generate-config"]).unwrap();
        assert!(args.path.is_none());
        assert!(Args::try_parse_from(["datasetra"]).is_err());
    }

    #[test]
    fn test_command_definition_is_consistent() {
        use clap::CommandFactory;
        let cmd = Args::command();
        cmd.clone().debug_assert();
        assert_eq!(cmd.get_name(), "datasetra");
        assert!(cmd.get_arguments().any(|a| a.get_long() == Some("generate-config")));
    }
}
