use clap::{Parser, Subcommand};
use pip_via::application::dto::OutputFormat;
use std::path::PathBuf;

/// See which package pulled in what, from pip-compile requirements files
#[derive(Parser, Debug)]
#[command(name = "pip-via")]
#[command(version)]
#[command(about = "Reverse dependency mapping for pip-compile requirements files", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build a dependent -> packages mapping from one or more requirements files
    Map {
        /// Requirements files written by pip-compile, merged in the given order
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        /// Output format: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Exclude dependents or packages matching patterns (supports wildcards: *)
        /// Can be specified multiple times: -e "setuptools" -e "-r *"
        #[arg(short, long = "exclude", value_name = "PATTERN", allow_hyphen_values = true)]
        exclude: Vec<String>,

        /// Path to a config file (defaults to ./pip-via.config.yml if present)
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },

    /// Compare two dotted versions numerically and print -1, 0 or 1
    Compare {
        /// First version
        v1: String,
        /// Second version
        v2: String,
    },

    /// Report pinned packages whose version is below a required minimum
    Check {
        /// Requirements files written by pip-compile
        #[arg(required = true, value_name = "FILES")]
        files: Vec<PathBuf>,

        /// Minimum version for a package, as NAME=VERSION
        /// Can be specified multiple times: -m urllib3=2.0.7 -m certifi=2023.7.22
        #[arg(short, long = "min", value_name = "NAME=VERSION", value_parser = parse_minimum)]
        min: Vec<(String, String)>,

        /// Output format: json or markdown
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Output file path (if not specified, outputs to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to a config file (defaults to ./pip-via.config.yml if present)
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<PathBuf>,
    },
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Parses a `NAME=VERSION` pair for `--min`
fn parse_minimum(s: &str) -> Result<(String, String), String> {
    let (name, version) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid minimum: {}. Expected NAME=VERSION", s))?;

    let name = name.trim();
    let version = version.trim();
    if name.is_empty() || version.is_empty() {
        return Err(format!(
            "Invalid minimum: {}. Package name and version must not be empty",
            s
        ));
    }

    Ok((name.to_string(), version.to_string()))
}
