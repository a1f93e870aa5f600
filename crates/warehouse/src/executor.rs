use crate::{connect::connect_client, error::DbError};
use async_trait::async_trait;
use tokio_postgres::Client;

/// Anything that can run one SQL statement against the warehouse.
///
/// The pipeline only talks to this trait, so tests can stand in an
/// in-memory recorder for a live cluster.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn execute(&self, sql: &str) -> Result<(), DbError>;
}

/// A live warehouse session over a single Postgres-protocol connection.
///
/// Statements go through the simple query protocol, so every successful
/// `execute` call is committed on its own. Dropping the client closes
/// the connection.
pub struct PgClient {
    client: Client,
}

impl PgClient {
    pub async fn connect(conn_str: &str) -> Result<Self, DbError> {
        let client = connect_client(conn_str).await?;
        Ok(Self { client })
    }

    /// Round-trips a `SELECT 1` to verify the session is usable.
    pub async fn ping(&self) -> Result<(), DbError> {
        let row = self.client.query_one("SELECT 1", &[]).await?;
        let val: i32 = row.get(0);
        if val != 1 {
            return Err(DbError::Unknown(format!(
                "Ping returned unexpected result: {val}"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl SqlExecutor for PgClient {
    async fn execute(&self, sql: &str) -> Result<(), DbError> {
        self.client.batch_execute(sql).await?;
        Ok(())
    }
}
