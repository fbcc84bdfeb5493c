//! Placeholder values shared by fixtures.

/// Connection URL for the per-test in-memory SQLite database.
pub static TEST_DATABASE_URL: &str = "sqlite::memory:";

/// Domain used when deriving fixture user emails from their names.
pub static TEST_EMAIL_DOMAIN: &str = "holonet.test";

/// Password stored for every fixture user. Never expected in an API response.
pub static TEST_PASSWORD: &str = "it's a trap";
