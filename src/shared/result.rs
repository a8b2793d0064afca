/// Crate-wide result type.
///
/// Domain failures are `ViaError` values converted into `anyhow::Error`,
/// so callers can attach context with `.with_context()` while the CLI
/// still prints the full cause chain.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
