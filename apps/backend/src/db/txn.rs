use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::domain::DomainError;

/// Boxed future borrowed from the transaction, as returned by `with_txn` closures.
pub type TxnFuture<'a, R> = Pin<Box<dyn Future<Output = Result<R, DomainError>> + Send + 'a>>;

/// Execute a function within a database transaction.
///
/// Commits when the closure returns `Ok`, rolls back on `Err`. The original
/// error is preserved even if the rollback itself fails.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, DomainError>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxnFuture<'a, R>,
{
    let txn = db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::warn!(error = %rollback_err, "rollback failed after error");
            }
            Err(err)
        }
    }
}
