use crate::error::PipelineError;
use catalog::statement::{Statement, StatementKind};
use tracing::{debug, info};
use warehouse::executor::SqlExecutor;

/// Runs one statement list in order, stopping at the first failure.
///
/// Statements are sent one at a time, so everything executed before a
/// failure stays committed. With `check_blank` set, a blank statement
/// fails the run before anything is sent for it.
pub(crate) async fn execute_list(
    exec: &dyn SqlExecutor,
    kind: StatementKind,
    statements: &[Statement],
    check_blank: bool,
) -> Result<(), PipelineError> {
    let total = statements.len();

    for (index, statement) in statements.iter().enumerate() {
        if check_blank && statement.is_blank() {
            return Err(PipelineError::BlankStatement {
                kind,
                index,
                text: statement.sql.clone(),
            });
        }

        info!(
            "Executing {} statement {}/{}: {}",
            kind,
            index + 1,
            total,
            statement.name
        );
        debug!("{}", statement.sql.trim());

        exec.execute(&statement.sql).await?;
    }

    Ok(())
}
