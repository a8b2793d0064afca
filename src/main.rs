mod cli;

use cli::{Args, Command};
use pip_via::adapters::outbound::console::StderrProgressReporter;
use pip_via::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, StdoutPresenter,
};
use pip_via::application::dto::{CheckRequest, MappingRequest};
use pip_via::application::factories::FormatterFactory;
use pip_via::application::use_cases::{BuildDependencyMappingUseCase, CheckVersionsUseCase};
use pip_via::config::{self, ConfigFile, EffectiveOptions};
use pip_via::ports::outbound::OutputPresenter;
use pip_via::requirements_analysis::services::VersionComparator;
use pip_via::shared::error::ExitCode;
use pip_via::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // clap exits with code 2 on its own for invalid arguments
    let args = Args::parse_args();

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\nCaused by: {}", err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    match args.command {
        Command::Map {
            files,
            format,
            output,
            exclude,
            config,
        } => {
            let config = load_config(config.as_deref(), Path::new("."))?;
            let options = EffectiveOptions::merge(config, format, exclude, vec![]);
            run_map(files, options, output)
        }
        Command::Compare { v1, v2 } => {
            println!("{}", VersionComparator::compare_to_int(&v1, &v2)?);
            Ok(ExitCode::Success)
        }
        Command::Check {
            files,
            min,
            format,
            output,
            config,
        } => {
            let config = load_config(config.as_deref(), Path::new("."))?;
            let options = EffectiveOptions::merge(config, format, vec![], min);
            run_check(files, options, output)
        }
    }
}

fn run_map(
    files: Vec<PathBuf>,
    options: EffectiveOptions,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    // Create adapters (Dependency Injection)
    let reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = BuildDependencyMappingUseCase::new(reader, progress_reporter);
    let response = use_case.execute(MappingRequest::new(files, options.exclude))?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let formatted_output = FormatterFactory::create(options.format).format_mapping(&response)?;

    create_presenter(output).present(&formatted_output)?;

    Ok(ExitCode::Success)
}

fn run_check(
    files: Vec<PathBuf>,
    options: EffectiveOptions,
    output: Option<PathBuf>,
) -> Result<ExitCode> {
    let reader = FileSystemReader::new();
    let progress_reporter = StderrProgressReporter::new();

    let use_case = CheckVersionsUseCase::new(reader, progress_reporter);
    let response = use_case.execute(CheckRequest::new(files, options.minimum_versions))?;

    eprintln!("{}", FormatterFactory::progress_message(options.format));
    let formatted_output = FormatterFactory::create(options.format).format_check(&response)?;

    create_presenter(output).present(&formatted_output)?;

    if response.has_violations() {
        Ok(ExitCode::PolicyViolations)
    } else {
        Ok(ExitCode::Success)
    }
}

/// An explicit `--config` path must exist; otherwise the config is
/// discovered in `dir` and may be absent.
fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Option<ConfigFile>> {
    match explicit {
        Some(path) => config::load_config_from_path(path).map(Some),
        None => config::discover_config(dir),
    }
}

fn create_presenter(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
    match output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    }
}
