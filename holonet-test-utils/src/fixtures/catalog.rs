use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_PASSWORD},
    error::TestError,
    model::{CharacterModel, FavoriteCharacterModel, FavoritePlanetModel, PlanetModel, UserModel},
    TestContext,
};

impl TestContext {
    pub fn catalog<'a>(&'a self) -> CatalogFixtures<'a> {
        CatalogFixtures { setup: self }
    }
}

pub struct CatalogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> CatalogFixtures<'a> {
    /// Inserts an active user whose email is derived from the name,
    /// e.g. `Leia Organa` -> `leia.organa@holonet.test`
    pub async fn insert_mock_user(&self, name: &str) -> Result<UserModel, TestError> {
        let email = format!(
            "{}@{}",
            name.to_lowercase().replace(' ', "."),
            TEST_EMAIL_DOMAIN
        );

        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            creation_date: ActiveValue::Set(Utc::now().naive_utc()),
            email: ActiveValue::Set(email),
            password: ActiveValue::Set(TEST_PASSWORD.to_string()),
            is_active: ActiveValue::Set(true),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_planet(&self, name: &str) -> Result<PlanetModel, TestError> {
        Ok(entity::prelude::Planet::insert(entity::planet::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            region: ActiveValue::Set(Some("Outer Rim Territories".to_string())),
            sector: ActiveValue::Set(Some("Arkanis sector".to_string())),
            system: ActiveValue::Set(Some(format!("{} system", name))),
            inhabitants: ActiveValue::Set(Some(200_000)),
            capital_city: ActiveValue::Set(None),
            coordinates: ActiveValue::Set(Some(17)),
            ..Default::default()
        })
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_mock_character(
        &self,
        name: &str,
        homeplanet_id: Option<i32>,
    ) -> Result<CharacterModel, TestError> {
        Ok(
            entity::prelude::Character::insert(entity::character::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                species: ActiveValue::Set(Some("Human".to_string())),
                gender: ActiveValue::Set(None),
                homeplanet_id: ActiveValue::Set(homeplanet_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_favorite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavoriteCharacterModel, TestError> {
        Ok(entity::prelude::FavoriteCharacter::insert(
            entity::favorite_character::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                characters_id: ActiveValue::Set(character_id),
                user_characteristics: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn insert_favorite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavoritePlanetModel, TestError> {
        Ok(entity::prelude::FavoritePlanet::insert(
            entity::favorite_planet::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                planets_id: ActiveValue::Set(planet_id),
                user_characteristics: ActiveValue::Set(None),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
