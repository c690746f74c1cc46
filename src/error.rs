//! Unified error type.

/// The error type returned by seamfit's fallible operations.
///
/// Fitting outcomes are never `Error`s — the resolver is total and bad input
/// degrades to defaults. This type surfaces infrastructure failures only:
/// bad startup configuration, binding to a port, accepting a connection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),
}
