/// Outbound adapters: stderr feedback, file I/O and report formatting
pub mod console;
pub mod filesystem;
pub mod formatters;
