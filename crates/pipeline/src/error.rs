use catalog::statement::StatementKind;
use thiserror::Error;
use warehouse::error::DbError;

/// Errors raised while running statement lists against the warehouse.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A statement failed validation before anything was sent.
    #[error("Blank {kind} statement at index {index}: {text:?}")]
    BlankStatement {
        kind: StatementKind,
        index: usize,
        text: String,
    },

    /// The warehouse rejected a statement or the connection dropped.
    #[error("Database error: {0}")]
    Database(#[from] DbError),
}
