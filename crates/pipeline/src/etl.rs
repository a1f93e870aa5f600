use crate::{error::PipelineError, run::execute_list};
use catalog::statement::{Statement, StatementKind, StatementSet};
use tracing::info;
use warehouse::executor::SqlExecutor;

/// How insert statements are validated before running.
///
/// `Standard` sends inserts as-is, blanks included; a blank statement is
/// a no-op for the warehouse. `Strict` rejects blanks up front, the same
/// treatment the other statement groups get.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ValidationMode {
    #[default]
    Standard,
    Strict,
}

/// Copies raw events and songs from object storage into the staging
/// tables. On a live cluster this is by far the slowest phase.
pub async fn load_staging_tables(
    exec: &dyn SqlExecutor,
    statements: &[Statement],
) -> Result<(), PipelineError> {
    execute_list(exec, StatementKind::Copy, statements, true).await
}

/// Populates the star schema from the staging tables.
pub async fn insert_tables(
    exec: &dyn SqlExecutor,
    statements: &[Statement],
    mode: ValidationMode,
) -> Result<(), PipelineError> {
    execute_list(
        exec,
        StatementKind::Insert,
        statements,
        mode == ValidationMode::Strict,
    )
    .await
}

/// Runs the full load-and-transform pass: copies, then inserts.
pub async fn run_etl(
    exec: &dyn SqlExecutor,
    set: &StatementSet,
    mode: ValidationMode,
) -> Result<(), PipelineError> {
    let start_time = std::time::Instant::now();
    info!("Running warehouse ETL");

    load_staging_tables(exec, &set.copies).await?;
    insert_tables(exec, &set.inserts, mode).await?;

    info!("ETL completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}
