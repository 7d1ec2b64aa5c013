use thiserror::Error;

/// Errors surfaced by the `Result`-returning entry points and the CLI. The
/// core [`repair`](crate::repair()) call is total and never returns one of
/// these; it reports failure through `RepairResult::errors` instead.
#[derive(Debug, Error)]
pub enum RepairError {
    /// The input could not be parsed even after the full repair pipeline.
    #[error("input is not repairable JSON: {0}")]
    Parse(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
