use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    #[error("Fixture references planet {0:?} which was not declared on the builder")]
    UnknownPlanet(String),
}
