/// Use cases module containing application business logic orchestration
mod build_dependency_mapping;
mod check_versions;
mod source_loader;

pub use build_dependency_mapping::BuildDependencyMappingUseCase;
pub use check_versions::CheckVersionsUseCase;
