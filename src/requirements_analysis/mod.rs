/// Domain layer - pure requirements analysis logic
///
/// Nothing in this module performs I/O. Raw text comes in through the
/// ports, and mappings and comparison results go back out.
pub mod domain;
pub mod policies;
pub mod services;
