//! Tests for the character endpoints.

use axum::http::StatusCode;
use serde_json::json;

use super::*;

/// Expect characters sorted by name with their home planet names resolved
#[tokio::test]
async fn lists_characters_with_homeplanet_names() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Naboo")
        .with_mock_character("Padme Amidala", Some("Naboo"))
        .with_mock_character("Jar Jar Binks", Some("Naboo"))
        .with_mock_character("C-3PO", None)
        .build()
        .await?;

    let (status, body) = get(test.app(), "/characters").await;

    assert_eq!(status, StatusCode::OK);
    let characters = body.as_array().unwrap();
    let names: Vec<&str> = characters
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["C-3PO", "Jar Jar Binks", "Padme Amidala"]);
    assert_eq!(characters[0]["homeplanet_name"], json!(null));
    assert_eq!(characters[1]["homeplanet_name"], json!("Naboo"));

    Ok(())
}

/// Expect the serialized character for an existing ID
#[tokio::test]
async fn gets_character_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let stewjon = test.catalog().insert_mock_planet("Stewjon").await?;
    let character = test
        .catalog()
        .insert_mock_character("Obi-Wan Kenobi", Some(stewjon.id))
        .await?;

    let (status, body) = get(test.app(), &format!("/characters/{}", character.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": character.id,
            "name": "Obi-Wan Kenobi",
            "species": "Human",
            "homeplanet_name": "Stewjon",
            "gender": null,
        })
    );

    Ok(())
}

/// Expect 404 with a literal JSON string message for an unknown character
#[tokio::test]
async fn returns_not_found_for_nonexistent_character() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = get(test.app(), "/characters/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!("ERROR: This is not the Character you are looking for")
    );

    Ok(())
}
