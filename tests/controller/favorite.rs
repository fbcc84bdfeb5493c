//! Tests for the favorite creation endpoints.

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use super::*;
use crate::util::send;

mod character {
    use super::*;

    /// Expect 200 and the serialized favorite with its description
    #[tokio::test]
    async fn adds_favorite_character() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.catalog().insert_mock_user("Leia Organa").await?;
        let character = test.catalog().insert_mock_character("Han Solo", None).await?;

        let (status, body) = post_json(
            test.app(),
            "/favorite/character",
            json!({ "user_id": user.id, "characters_id": character.id }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["characters_id"], json!(character.id));
        assert_eq!(
            body["user_characteristics"],
            json!("Leia Organa likes Han Solo")
        );
        assert!(body["id"].is_number());

        Ok(())
    }

    /// Expect 400 when the user does not exist
    #[tokio::test]
    async fn rejects_unknown_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let character = test.catalog().insert_mock_character("Han Solo", None).await?;

        let (status, body) = post_json(
            test.app(),
            "/favorite/character",
            json!({ "user_id": 9999, "characters_id": character.id }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!("ERROR: user_id does not exist"));

        Ok(())
    }

    /// Expect 400 when the character does not exist
    #[tokio::test]
    async fn rejects_unknown_character() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.catalog().insert_mock_user("Leia Organa").await?;

        let (status, body) = post_json(
            test.app(),
            "/favorite/character",
            json!({ "user_id": user.id, "characters_id": 9999 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!("ERROR: character_id does not exist"));

        Ok(())
    }

    /// Expect the second identical request to fail and exactly one row to persist
    #[tokio::test]
    async fn rejects_duplicate_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.catalog().insert_mock_user("Leia Organa").await?;
        let character = test.catalog().insert_mock_character("Han Solo", None).await?;
        let body = json!({ "user_id": user.id, "characters_id": character.id });

        let (first_status, _) = post_json(test.app(), "/favorite/character", body.clone()).await;
        let (second_status, second_body) =
            post_json(test.app(), "/favorite/character", body).await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::BAD_REQUEST);
        assert_eq!(
            second_body,
            json!("ERROR: this character is already a favorite")
        );

        let persisted = entity::prelude::FavoriteCharacter::find()
            .filter(entity::favorite_character::Column::UserId.eq(user.id))
            .filter(entity::favorite_character::Column::CharactersId.eq(character.id))
            .count(&test.db)
            .await?;
        assert_eq!(persisted, 1);

        Ok(())
    }

    /// Expect the structured error when a required field is missing
    #[tokio::test]
    async fn rejects_body_missing_fields() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;

        let (status, body) =
            post_json(test.app(), "/favorite/character", json!({ "user_id": 1 })).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["message"].as_str().unwrap().contains("characters_id"));

        Ok(())
    }

    /// Expect the structured error when the body is not declared as JSON
    #[tokio::test]
    async fn rejects_body_without_json_content_type() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/favorite/character")
            .body(Body::from(r#"{"user_id": 1, "characters_id": 1}"#))
            .unwrap();

        let (status, body) = send(test.app(), request).await;

        assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert!(body["message"].is_string());

        Ok(())
    }
}

mod planet {
    use super::*;

    /// Expect 200 and the serialized favorite with its description
    #[tokio::test]
    async fn adds_favorite_planet() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.catalog().insert_mock_user("Luke Skywalker").await?;
        let planet = test.catalog().insert_mock_planet("Yavin 4").await?;

        let (status, body) = post_json(
            test.app(),
            "/favorite/planet",
            json!({ "user_id": user.id, "planets_id": planet.id }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["planets_id"], json!(planet.id));
        assert_eq!(
            body["user_characteristics"],
            json!("Luke Skywalker likes Yavin 4")
        );

        Ok(())
    }

    /// Expect 400 when the user does not exist
    #[tokio::test]
    async fn rejects_unknown_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let planet = test.catalog().insert_mock_planet("Yavin 4").await?;

        let (status, body) = post_json(
            test.app(),
            "/favorite/planet",
            json!({ "user_id": 9999, "planets_id": planet.id }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!("ERROR: user_id does not exist"));

        Ok(())
    }

    /// Expect 400 when the planet does not exist
    #[tokio::test]
    async fn rejects_unknown_planet() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.catalog().insert_mock_user("Luke Skywalker").await?;

        let (status, body) = post_json(
            test.app(),
            "/favorite/planet",
            json!({ "user_id": user.id, "planets_id": 9999 }),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!("ERROR: planet_id does not exist"));

        Ok(())
    }

    /// Expect the second identical request to fail and exactly one row to persist
    #[tokio::test]
    async fn rejects_duplicate_favorite() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.catalog().insert_mock_user("Luke Skywalker").await?;
        let planet = test.catalog().insert_mock_planet("Yavin 4").await?;
        let body = json!({ "user_id": user.id, "planets_id": planet.id });

        let (first_status, _) = post_json(test.app(), "/favorite/planet", body.clone()).await;
        let (second_status, second_body) = post_json(test.app(), "/favorite/planet", body).await;

        assert_eq!(first_status, StatusCode::OK);
        assert_eq!(second_status, StatusCode::BAD_REQUEST);
        assert_eq!(second_body, json!("ERROR: this planet is already a favorite"));

        let persisted = entity::prelude::FavoritePlanet::find()
            .filter(entity::favorite_planet::Column::UserId.eq(user.id))
            .count(&test.db)
            .await?;
        assert_eq!(persisted, 1);

        Ok(())
    }
}
