use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;

/// Find out-of-sync dependency versions across local package.json projects
#[derive(Parser, Debug)]
#[command(name = "pkgsync")]
#[command(version)]
#[command(about = "Find out-of-sync dependency versions across local package.json projects", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Path to a config file (defaults to ./pkgsync.config.yml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every package.json found under a directory, one per line
    List {
        /// Directory to scan
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Directory names to skip (node_modules is always skipped)
        /// Can be specified multiple times: -o vendor -o dist
        #[arg(short, long, value_name = "NAME")]
        omit: Vec<String>,
    },

    /// Compare declared dependency versions against sibling projects
    Inspect {
        /// Directories to scan
        paths: Vec<PathBuf>,

        /// File listing one directory per line, scanned before PATHS
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Directory names to skip (node_modules is always skipped)
        #[arg(short, long, value_name = "NAME")]
        omit: Vec<String>,

        /// Report format: table or json
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Also compare devDependencies
        #[arg(long)]
        dev: bool,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Do not colour the status marks
        #[arg(long)]
        no_color: bool,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("pkgsync").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_list_defaults() {
        let args = parse(&["list"]);
        match args.command {
            Command::List { path, omit } => {
                assert_eq!(path, PathBuf::from("."));
                assert!(omit.is_empty());
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(args.config.is_none());
    }

    #[test]
    fn test_list_with_path_and_omit() {
        let args = parse(&["list", "-p", "./workspace", "-o", "vendor", "--omit", "dist"]);
        match args.command {
            Command::List { path, omit } => {
                assert_eq!(path, PathBuf::from("./workspace"));
                assert_eq!(omit, vec!["vendor".to_string(), "dist".to_string()]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_inspect_all_options() {
        let args = parse(&[
            "inspect",
            "./apps",
            "./libs",
            "-f",
            "roots.txt",
            "-o",
            "vendor",
            "--format",
            "json",
            "--dev",
            "--output",
            "report.json",
            "--no-color",
            "--config",
            "ci.yml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("ci.yml")));
        match args.command {
            Command::Inspect {
                paths,
                file,
                omit,
                format,
                dev,
                output,
                no_color,
            } => {
                assert_eq!(paths, vec![PathBuf::from("./apps"), PathBuf::from("./libs")]);
                assert_eq!(file, Some(PathBuf::from("roots.txt")));
                assert_eq!(omit, vec!["vendor".to_string()]);
                assert_eq!(format, Some(OutputFormat::Json));
                assert!(dev);
                assert_eq!(output, Some(PathBuf::from("report.json")));
                assert!(no_color);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_inspect_without_inputs_parses() {
        // Missing inputs are reported by the application, not by clap
        let args = parse(&["inspect"]);
        match args.command {
            Command::Inspect {
                paths, file, format, ..
            } => {
                assert!(paths.is_empty());
                assert!(file.is_none());
                assert!(format.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_inspect_invalid_format() {
        let result = Args::try_parse_from(["pkgsync", "inspect", ".", "--format", "xml"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_subcommand() {
        assert!(Args::try_parse_from(["pkgsync"]).is_err());
    }
}
