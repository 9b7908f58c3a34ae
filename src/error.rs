use thiserror::Error;

/// Errors produced by the interpolation pipeline and its I/O edges.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A placeholder key could not be resolved under either prefix. Carries
    /// both attempted environment variable names so the operator can see
    /// exactly what to set.
    #[error("environment variables {primary_key} and {alternative_key} do not exist")]
    UnresolvedVariable {
        primary_key: String,
        alternative_key: String,
    },
}
