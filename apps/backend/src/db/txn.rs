//! Transaction scoping helper.
//!
//! Every mutating operation runs inside `with_txn` so that multi-table
//! updates (game rows, room rows, player stats) land atomically: the
//! closure's `Ok` commits, any `Err` rolls back the whole unit.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionTrait};

use crate::error::AppError;
use crate::state::app_state::AppState;

/// Boxed future tied to the transaction borrow, so closures can capture `txn`.
pub type TxnFut<'a, R> = Pin<Box<dyn Future<Output = Result<R, AppError>> + 'a>>;

/// Execute a function within a database transaction.
///
/// Begins a transaction on the state's connection, runs the closure, then
/// commits on `Ok` and rolls back on `Err`. Call sites box their future:
///
/// ```ignore
/// let room = with_txn(&state, |txn| {
///     Box::pin(async move { rooms_service::create_room(txn, host_id, params).await })
/// })
/// .await?;
/// ```
pub async fn with_txn<R, F>(state: &AppState, f: F) -> Result<R, AppError>
where
    F: for<'t> FnOnce(&'t DatabaseTransaction) -> TxnFut<'t, R>,
{
    let txn = state.db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
