//! Declarative test builder for phase 1 setup.
//!
//! The builder pattern allows chaining multiple configuration methods together, with all
//! operations queued and executed during the final `build()` call.

use std::collections::HashMap;

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Fixtures are inserted in dependency order during `build()`: planets first, then characters
/// (which may reference a planet by name), then users.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_catalog_tables: bool,

    // Database fixtures to insert
    planets: Vec<String>,
    characters: Vec<(String, Option<String>)>, // (character name, home planet name)
    users: Vec<String>,
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_catalog_tables: false,
            planets: Vec::new(),
            characters: Vec::new(),
            users: Vec::new(),
        }
    }

    /// Add every catalog table to the test database.
    ///
    /// Creates Planet, Character, User, FavoriteCharacter and FavoritePlanet in an order
    /// that satisfies their foreign keys.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Add a single entity table to the test database.
    ///
    /// Chain multiple calls to add multiple tables; useful for tests which need a
    /// deliberately incomplete schema.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holonet_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holonet_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .with_table(Character)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock planet with the provided name.
    pub fn with_mock_planet(mut self, name: &str) -> Self {
        self.planets.push(name.to_string());
        self
    }

    /// Insert a mock character, optionally homed on a planet declared with `with_mock_planet`.
    pub fn with_mock_character(mut self, name: &str, homeplanet: Option<&str>) -> Self {
        self.characters
            .push((name.to_string(), homeplanet.map(str::to_string)));
        self
    }

    /// Insert a mock user with the provided name.
    pub fn with_mock_user(mut self, name: &str) -> Self {
        self.users.push(name.to_string());
        self
    }

    /// Build the test context, executing all queued operations.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with tables created and fixtures inserted
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    /// - `Err(TestError::UnknownPlanet)` - A character references an undeclared planet
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_catalog_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Planet),
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::User),
                schema.create_table_from_entity(entity::prelude::FavoriteCharacter),
                schema.create_table_from_entity(entity::prelude::FavoritePlanet),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        let mut planet_ids = HashMap::new();
        for name in self.planets {
            let planet = setup.catalog().insert_mock_planet(&name).await?;
            planet_ids.insert(name, planet.id);
        }

        for (name, homeplanet) in self.characters {
            let homeplanet_id = match homeplanet {
                Some(planet) => Some(
                    *planet_ids
                        .get(&planet)
                        .ok_or(TestError::UnknownPlanet(planet))?,
                ),
                None => None,
            };

            setup
                .catalog()
                .insert_mock_character(&name, homeplanet_id)
                .await?;
        }

        for name in self.users {
            setup.catalog().insert_mock_user(&name).await?;
        }

        Ok(setup)
    }
}
