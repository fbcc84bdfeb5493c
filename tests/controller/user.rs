//! Tests for the user endpoints.

use axum::http::StatusCode;
use serde_json::json;

use super::*;

/// Expect users sorted by name ascending without any password field
#[tokio::test]
async fn lists_users_sorted_by_name_without_password() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_user("Wedge Antilles")
        .with_mock_user("Biggs Darklighter")
        .with_mock_user("Mon Mothma")
        .build()
        .await?;

    let (status, body) = get(test.app(), "/users").await;

    assert_eq!(status, StatusCode::OK);
    let users = body.as_array().unwrap();
    let names: Vec<&str> = users.iter().map(|u| u["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["Biggs Darklighter", "Mon Mothma", "Wedge Antilles"]);
    for user in users {
        assert!(user.get("password").is_none());
    }

    Ok(())
}

/// Expect the serialized user with its public fields only
#[tokio::test]
async fn gets_user_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.catalog().insert_mock_user("Mon Mothma").await?;

    let (status, body) = get(test.app(), &format!("/users/{}", user.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": user.id,
            "name": "Mon Mothma",
            "email": "mon.mothma@holonet.test",
            "active": true,
        })
    );

    Ok(())
}

/// Expect 404 with a literal JSON string message for an unknown user
#[tokio::test]
async fn returns_not_found_for_nonexistent_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = get(test.app(), "/users/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!("ERROR: This is not the User you are looking for")
    );

    Ok(())
}

/// Expect the generic structured error for a non-integer ID
#[tokio::test]
async fn returns_bad_request_for_non_integer_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = get(test.app(), "/users/skywalker").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body["message"].as_str().unwrap().is_empty());

    Ok(())
}

/// Expect paths with a trailing slash to be served like their canonical form
#[tokio::test]
async fn serves_paths_with_trailing_slash() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let user = test.catalog().insert_mock_user("Mon Mothma").await?;

    let (list_status, list_body) = get(test.app(), "/users/").await;
    let (user_status, user_body) = get(test.app(), &format!("/users/{}/", user.id)).await;
    let (favorites_status, favorites_body) =
        get(test.app(), &format!("/users/{}/favorites/", user.id)).await;

    assert_eq!(list_status, StatusCode::OK);
    assert_eq!(list_body.as_array().unwrap().len(), 1);
    assert_eq!(user_status, StatusCode::OK);
    assert_eq!(user_body["name"], json!("Mon Mothma"));
    assert_eq!(favorites_status, StatusCode::OK);
    assert_eq!(favorites_body, json!({ "characters": [], "planets": [] }));

    Ok(())
}

/// Expect 500 with a generic message when the user table does not exist
#[tokio::test]
async fn returns_internal_error_when_tables_missing() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = get(test.app(), "/users").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "message": "Internal server error" }));

    Ok(())
}

mod favorites {
    use axum::http::StatusCode;
    use serde_json::json;

    use super::*;

    /// Expect one favorite character and one favorite planet, fully serialized
    #[tokio::test]
    async fn returns_favorite_characters_and_planets() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;
        let user = test.catalog().insert_mock_user("Luke Skywalker").await?;
        let tatooine = test.catalog().insert_mock_planet("Tatooine").await?;
        let dagobah = test.catalog().insert_mock_planet("Dagobah").await?;
        let obi_wan = test
            .catalog()
            .insert_mock_character("Obi-Wan Kenobi", Some(tatooine.id))
            .await?;
        test.catalog()
            .insert_favorite_character(user.id, obi_wan.id)
            .await?;
        test.catalog()
            .insert_favorite_planet(user.id, dagobah.id)
            .await?;

        let (status, body) = get(test.app(), &format!("/users/{}/favorites", user.id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["characters"],
            json!([{
                "id": obi_wan.id,
                "name": "Obi-Wan Kenobi",
                "species": "Human",
                "homeplanet_name": "Tatooine",
                "gender": null,
            }])
        );
        assert_eq!(body["planets"].as_array().unwrap().len(), 1);
        assert_eq!(body["planets"][0]["id"], json!(dagobah.id));
        assert_eq!(body["planets"][0]["name"], json!("Dagobah"));
        assert_eq!(body["planets"][0]["system"], json!("Dagobah system"));

        Ok(())
    }

    /// Expect both keys present with empty lists for a user without favorites
    #[tokio::test]
    async fn returns_empty_lists_without_favorites() -> Result<(), TestError> {
        let test = TestBuilder::new()
            .with_catalog_tables()
            .with_mock_user("Lando Calrissian")
            .build()
            .await?;

        let (status, body) = get(test.app(), "/users/1/favorites").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "characters": [], "planets": [] }));

        Ok(())
    }

    /// Expect 404 when the user does not exist
    #[tokio::test]
    async fn returns_not_found_for_nonexistent_user() -> Result<(), TestError> {
        let test = TestBuilder::new().with_catalog_tables().build().await?;

        let (status, body) = get(test.app(), "/users/9999/favorites").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(
            body,
            json!("ERROR: This is not the User you are looking for")
        );

        Ok(())
    }
}
