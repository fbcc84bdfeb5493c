use sea_orm::DatabaseConnection;

use crate::{
    model::planet::PlanetDto,
    server::{data::planet::PlanetRepository, error::Error},
};

/// Service for reading planets.
pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of PlanetService.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves every planet ordered by name.
    pub async fn get_all_planets(&self) -> Result<Vec<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planets = planet_repo.get_all().await?;

        Ok(planets.into_iter().map(PlanetDto::from).collect())
    }

    /// Retrieves a single planet.
    ///
    /// # Returns
    /// - `Ok(Some(PlanetDto))` - Planet found
    /// - `Ok(None)` - Planet not found in database
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<Option<PlanetDto>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        let planet = planet_repo.get_by_id(planet_id).await?;

        Ok(planet.map(PlanetDto::from))
    }
}
