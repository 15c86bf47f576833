#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use csv_html_split::config::load_settings;
use csv_html_split::{prepend_cmd, split_cmd};

#[derive(Parser, Debug)]
#[command(name = "csv-html-split")]
#[command(about = "Split a CSV with embedded HTML into a light CSV and HTML files", long_about = None)]
struct Cli {
    /// Enable verbose logging (or set CSV_HTML_SPLIT_LOG)
    #[arg(long, global = true)]
    verbose: bool,

    /// Config file (default: ./csv-html-split.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// A flag given without a value falls back to its configured or default value.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Move per-row HTML into files and write the light CSV
    Split {
        /// Source CSV [default: data.csv]
        #[arg(long, num_args = 0..=1)]
        input: Option<PathBuf>,
        /// Light CSV output [default: data_clear.csv]
        #[arg(long, num_args = 0..=1)]
        out_csv: Option<PathBuf>,
        /// Directory for the HTML files [default: src]
        #[arg(long, num_args = 0..=1)]
        html_dir: Option<PathBuf>,
        /// Prefix used for hrefs instead of the HTML directory
        #[arg(long, num_args = 0..=1)]
        href_prefix: Option<String>,
        /// Write a machine-readable JSON summary to this file
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Turn relative `src/` hrefs of data_clear.csv into absolute URLs (writes done.csv)
    PrependHref {
        /// Directory holding data_clear.csv [default: .]
        #[arg(long)]
        root: Option<PathBuf>,
        /// URL prefix
        #[arg(long)]
        prefix: Option<String>,
    },
}

fn init_tracing(verbose: bool) {
    let env = std::env::var("CSV_HTML_SPLIT_LOG").unwrap_or_else(|_| {
        if verbose { "csv_html_split=debug".to_string() } else { "csv_html_split=info".to_string() }
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(EnvFilter::new(env))
        .try_init();
}

fn main() {
    color_eyre::install().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = load_settings(cli.config.as_deref()).and_then(|settings| match cli.command {
        Commands::Split { input, out_csv, html_dir, href_prefix, json } => {
            split_cmd::run(input, out_csv, html_dir, href_prefix, json, &settings).map(|_| ())
        }
        Commands::PrependHref { root, prefix } => {
            prepend_cmd::run(root, prefix, &settings).map(|_| ())
        }
    });

    if let Err(e) = result {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;
    use csv_html_split::config::Settings;
    use csv_html_split::engine::splitter::SplitOptions;

    use super::*;

    fn split_options(argv: &[&str]) -> SplitOptions {
        let cli = Cli::try_parse_from(argv).unwrap();
        match cli.command {
            Commands::Split { input, out_csv, html_dir, href_prefix, .. } => {
                split_cmd::resolve_options(input, out_csv, html_dir, href_prefix, &Settings::default())
            }
            other => panic!("expected split, got {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_input_falls_back_to_default() {
        let opts = split_options(&["csv-html-split", "split", "--input", "--html-dir", "out"]);
        assert_eq!(opts.input, Path::new("data.csv"));
        assert_eq!(opts.html_dir, Path::new("out"));
        assert_eq!(opts.out_csv, Path::new("data_clear.csv"));
    }

    #[test]
    fn test_bare_href_prefix_at_end_is_unset() {
        let opts = split_options(&["csv-html-split", "split", "--href-prefix"]);
        assert_eq!(opts.href_prefix, None);
        assert_eq!(opts.html_dir, Path::new("src"));
    }

    #[test]
    fn test_input_value_is_used() {
        let opts = split_options(&["csv-html-split", "split", "--input", "a.csv"]);
        assert_eq!(opts.input, Path::new("a.csv"));
        assert_eq!(opts.href_prefix, None);
    }

    #[test]
    fn test_stray_positional_is_rejected() {
        assert!(Cli::try_parse_from(["csv-html-split", "split", "--input", "a.csv", "b.csv"]).is_err());
    }
}
