use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlanetDto {
    pub id: i32,
    pub name: String,
    pub region: Option<String>,
    pub sector: Option<String>,
    pub system: Option<String>,
    pub inhabitants: Option<i64>,
    pub capital_city: Option<String>,
    pub coordinates: Option<i32>,
}
