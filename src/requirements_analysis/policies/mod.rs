mod minimum_version;

pub use minimum_version::{MinimumVersionPolicy, PolicyOutcome, VersionViolation};
