//! Tests for the sitemap and API documentation routes.

use axum::http::StatusCode;

use super::*;

/// Expect every registered route to be listed on the sitemap
#[tokio::test]
async fn lists_registered_routes() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_tables().build().await?;

    let (status, body) = get(test.app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    let html = body.as_str().unwrap();
    assert!(html.contains("<a href=\"/users\">/users</a>"));
    assert!(html.contains("<a href=\"/characters\">/characters</a>"));
    assert!(html.contains("<a href=\"/planets\">/planets</a>"));
    assert!(html.contains("GET /users/{id}/favorites"));
    assert!(html.contains("POST /favorite/character"));
    assert!(html.contains("POST /favorite/planet"));

    Ok(())
}

/// Expect the OpenAPI document to describe the catalog paths
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, body) = get(test.app(), "/docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/users/{id}").is_some());
    assert!(body["paths"]["/favorite/planet"].get("post").is_some());

    Ok(())
}

/// Expect Swagger UI to stay reachable alongside trailing slash handling
#[tokio::test]
async fn serves_swagger_ui() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let (status, _) = get(test.app(), "/docs/").await;

    assert_eq!(status, StatusCode::OK);

    Ok(())
}
