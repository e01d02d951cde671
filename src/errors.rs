use thiserror::Error;

/// Recoverable, per-function errors surfaced while processing the registry.
///
/// These never terminate a run; the split command converts them into a
/// skip decision plus a console diagnostic.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SplitError {
    #[error("invalid function name `{0}`: expected a plain identifier")]
    InvalidFunctionName(String),
}
