//! Process-wide tracing setup for the backend binary.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install the JSON tracing subscriber. `RUST_LOG` overrides the default
/// filter; sqlx/sea_orm query logging stays at warn unless asked for.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,actix_web=info,sqlx=warn,sea_orm=warn"));

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
