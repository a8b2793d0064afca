mod dependency_filter;
mod mapping_merger;
mod requirements_parser;
mod version_comparator;

pub use dependency_filter::DependencyFilter;
pub use mapping_merger::MappingMerger;
pub use requirements_parser::RequirementsParser;
pub use version_comparator::VersionComparator;
