pub mod dependency_mapping;
pub mod pinned_entry;
pub mod semver_triple;

pub use dependency_mapping::DependencyMapping;
pub use pinned_entry::{canonical_name, PinnedEntry};
pub use semver_triple::SemVerTriple;
