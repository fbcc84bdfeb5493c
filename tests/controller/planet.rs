//! Tests for the planet endpoints.

use axum::http::StatusCode;
use serde_json::json;

use super::*;

/// Expect planets sorted by name ascending
#[tokio::test]
async fn lists_planets_sorted_by_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .with_mock_planet("Mustafar")
        .with_mock_planet("Coruscant")
        .with_mock_planet("Endor")
        .build()
        .await?;

    let (status, body) = get(test.app(), "/planets").await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Coruscant", "Endor", "Mustafar"]);

    Ok(())
}

/// Expect every planet field in the serialized planet
#[tokio::test]
async fn gets_planet_by_id() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;
    let planet = test.catalog().insert_mock_planet("Tatooine").await?;

    let (status, body) = get(test.app(), &format!("/planets/{}", planet.id)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": planet.id,
            "name": "Tatooine",
            "region": "Outer Rim Territories",
            "sector": "Arkanis sector",
            "system": "Tatooine system",
            "inhabitants": 200000,
            "capital_city": null,
            "coordinates": 17,
        })
    );

    Ok(())
}

/// Expect 404 with a literal JSON string message for an unknown planet
#[tokio::test]
async fn returns_not_found_for_nonexistent_planet() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = get(test.app(), "/planets/9999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!("ERROR: This is not the Planet you are looking for")
    );

    Ok(())
}
