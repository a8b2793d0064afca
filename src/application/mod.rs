/// Application layer - use cases, request/response DTOs and factories
///
/// Use cases read sources through the outbound ports, hand the text to the
/// requirements_analysis services and return DTOs ready for formatting.
pub mod dto;
pub mod factories;
pub mod use_cases;
