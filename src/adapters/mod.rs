/// Adapters layer - implementations of the outbound ports
pub mod outbound;
