//! SeaORM -> DomainError translation helpers.
//!
//! Repos convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers then map `DomainError` to `AppError` via `From`.
//! The raw driver message is logged (redacted) but never surfaced to clients.

use tracing::{error, warn};

use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Translate a `DbErr` into a `DomainError` with sanitized detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            DomainError::infra(InfraErrorKind::Db, "Database unavailable")
        }
        _ => {
            error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database operation failed");
            DomainError::infra(InfraErrorKind::Db, "Database operation failed")
        }
    }
}
