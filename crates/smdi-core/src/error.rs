use thiserror::Error;

/// Core error type shared across SMDI crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A label did not match any variant of a fixed enumeration.
    #[error("unknown {kind} label: '{value}'")]
    UnknownLabel { kind: &'static str, value: String },
}

/// Convenience alias for results returned by SMDI crates.
pub type Result<T> = std::result::Result<T, Error>;
