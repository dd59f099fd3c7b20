pub mod txn;

pub use txn::{with_txn, TxnFut};
