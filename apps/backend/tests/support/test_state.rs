use backend::infra::state::build_state;
use backend::state::app_state::AppState;
use backend::state::security_config::SecurityConfig;
use backend::AppError;

/// Signing secret shared by every test that needs to mint or verify tokens.
pub const TEST_JWT_SECRET: &[u8] = b"test_secret_key_for_testing_purposes_only";

pub fn test_security_config() -> SecurityConfig {
    SecurityConfig::new(TEST_JWT_SECRET)
}

/// Build an AppState backed by a fresh in-memory SQLite database with the
/// full migration set applied. Each call returns an isolated database, so
/// tests never observe each other's rows.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_state()
        .with_sqlite_memory()
        .with_security(test_security_config())
        .build()
        .await
}
