//! pip-via - reverse dependency mapping for pip-compile requirements files
//!
//! This library reads the `# via` annotations that pip-compile writes under every
//! pinned requirement and turns them into a mapping from each dependent package
//! to the packages it pulled in. Mappings from several files can be merged, and
//! pinned versions can be checked against minimum versions.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`requirements_analysis`): Pure parsing, merging and version logic
//! - **Application Layer** (`application`): Use cases and request/response DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Config** (`config`): `pip-via.config.yml` loading and option merging
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use pip_via::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! let use_case = BuildDependencyMappingUseCase::new(reader, progress_reporter);
//!
//! let request = MappingRequest::new(
//!     vec![
//!         PathBuf::from("requirements.txt"),
//!         PathBuf::from("requirements-dev.txt"),
//!     ],
//!     vec![],
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = MarkdownFormatter::new().format_mapping(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```
//!
//! The core is usable without any I/O:
//!
//! ```
//! use pip_via::prelude::*;
//!
//! let mapping = RequirementsParser::parse("alembic==1.13.1\n    # via flask-migrate\n");
//! assert_eq!(mapping.get("flask-migrate").unwrap(), &["alembic"]);
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod ports;
pub mod requirements_analysis;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        CheckRequest, CheckResponse, MappingRequest, MappingResponse, OutputFormat,
        SourceSummary,
    };
    pub use crate::application::use_cases::{
        BuildDependencyMappingUseCase, CheckVersionsUseCase,
    };
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ReportFormatter, RequirementsReader,
    };
    pub use crate::requirements_analysis::domain::{DependencyMapping, PinnedEntry, SemVerTriple};
    pub use crate::requirements_analysis::policies::{
        MinimumVersionPolicy, PolicyOutcome, VersionViolation,
    };
    pub use crate::requirements_analysis::services::{
        DependencyFilter, MappingMerger, RequirementsParser, VersionComparator,
    };
    pub use crate::shared::Result;
}
