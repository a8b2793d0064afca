/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod check_request;
mod check_response;
mod mapping_request;
mod mapping_response;
mod output_format;
mod source_summary;

pub use check_request::CheckRequest;
pub use check_response::CheckResponse;
pub use mapping_request::MappingRequest;
pub use mapping_response::MappingResponse;
pub use output_format::OutputFormat;
pub use source_summary::SourceSummary;
