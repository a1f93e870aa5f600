use crate::{error::PipelineError, run::execute_list};
use catalog::statement::{Statement, StatementKind, StatementSet};
use tracing::info;
use warehouse::executor::SqlExecutor;

/// Drops every table in the list. The built-in drops use IF EXISTS, so
/// a fresh warehouse passes through cleanly.
pub async fn drop_tables(
    exec: &dyn SqlExecutor,
    statements: &[Statement],
) -> Result<(), PipelineError> {
    execute_list(exec, StatementKind::Drop, statements, true).await
}

/// Creates every table in the list.
pub async fn create_tables(
    exec: &dyn SqlExecutor,
    statements: &[Statement],
) -> Result<(), PipelineError> {
    execute_list(exec, StatementKind::Create, statements, true).await
}

/// Drops and recreates the schema so a run starts from a clean slate.
pub async fn recreate_schema(
    exec: &dyn SqlExecutor,
    set: &StatementSet,
) -> Result<(), PipelineError> {
    let start_time = std::time::Instant::now();
    info!("Resetting warehouse schema");

    drop_tables(exec, &set.drops).await?;
    create_tables(exec, &set.creates).await?;

    info!(
        "Schema reset completed in {:.2}s",
        start_time.elapsed().as_secs_f64()
    );
    Ok(())
}
