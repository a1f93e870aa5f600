use async_trait::async_trait;
use std::sync::Mutex;
use warehouse::{error::DbError, executor::SqlExecutor};

/// Executor double that records every statement it is asked to run.
pub(crate) struct RecordingExec {
    statements: Mutex<Vec<String>>,
}

impl RecordingExec {
    pub(crate) fn new() -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn executed(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlExecutor for RecordingExec {
    async fn execute(&self, sql: &str) -> Result<(), DbError> {
        self.statements.lock().unwrap().push(sql.to_string());
        Ok(())
    }
}

/// Executor double that succeeds until the given call index, then fails.
pub(crate) struct FailingExec {
    statements: Mutex<Vec<String>>,
    fail_at: usize,
}

impl FailingExec {
    pub(crate) fn new(fail_at: usize) -> Self {
        Self {
            statements: Mutex::new(Vec::new()),
            fail_at,
        }
    }

    pub(crate) fn executed(&self) -> Vec<String> {
        self.statements.lock().unwrap().clone()
    }
}

#[async_trait]
impl SqlExecutor for FailingExec {
    async fn execute(&self, sql: &str) -> Result<(), DbError> {
        let mut statements = self.statements.lock().unwrap();
        if statements.len() == self.fail_at {
            return Err(DbError::Unknown("injected failure".to_string()));
        }
        statements.push(sql.to_string());
        Ok(())
    }
}
