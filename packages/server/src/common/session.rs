//! Request-scoped database sessions.
//!
//! A [`Session`] is one PostgreSQL transaction, opened when a request enters a
//! handler and closed before the response is built:
//!
//! ```rust,ignore
//! let mut session = Session::begin(&state.db_pool).await?;
//! let result = activities::get_provider(id, session.conn()).await;
//! let provider = session.finish(result).await?;
//! ```
//!
//! `finish` commits on `Ok` and rolls back on `Err`. A session dropped without
//! being finished (panic, cancelled request) is rolled back by sqlx when the
//! transaction is dropped.

use sqlx::{PgConnection, PgPool, Postgres, Transaction};

use super::error::ApiResult;

pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Acquire a connection from the pool and open a transaction on it.
    pub async fn begin(pool: &PgPool) -> ApiResult<Self> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Connection to run queries on. Everything executed here belongs to the
    /// session's transaction.
    pub fn conn(&mut self) -> &mut PgConnection {
        &mut *self.tx
    }

    /// Close the session: commit if `result` is `Ok`, roll back otherwise.
    ///
    /// The original error is returned even if the rollback itself fails.
    pub async fn finish<T>(self, result: ApiResult<T>) -> ApiResult<T> {
        match result {
            Ok(value) => {
                self.tx.commit().await?;
                Ok(value)
            }
            Err(err) => {
                if let Err(rollback_err) = self.tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback failed");
                }
                Err(err)
            }
        }
    }
}
