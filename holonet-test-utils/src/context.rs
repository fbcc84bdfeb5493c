//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder` for phase 2 test execution.
//! The context owns an in-memory SQLite database which lives exactly as long as the context.

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_DATABASE_URL, error::TestError};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_catalog_tables().build().await?;
///
/// // Access fixture helpers
/// let tatooine = test.catalog().insert_mock_planet("Tatooine").await?;
/// test.catalog().insert_mock_character("Luke Skywalker", Some(tatooine.id)).await?;
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database connection into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main holonet crate.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.db.clone())
    }

    /// Create a new test context backed by a fresh in-memory SQLite database.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context without any tables
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect(TEST_DATABASE_URL).await?;

        Ok(TestContext { db })
    }

    /// Execute CREATE TABLE statements collected by the builder.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }
}
