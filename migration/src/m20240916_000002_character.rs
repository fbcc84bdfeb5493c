use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240916_000001_planet::Planet;

static FK_CHARACTER_HOMEPLANET_ID: &str = "fk-character-homeplanet_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Character::Table)
                    .if_not_exists()
                    .col(pk_auto(Character::Id))
                    .col(string_len_uniq(Character::Name, 120))
                    .col(string_len_null(Character::Species, 120))
                    .col(string_len_null(Character::Gender, 120))
                    .col(integer_null(Character::HomeplanetId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CHARACTER_HOMEPLANET_ID)
                            .from(Character::Table, Character::HomeplanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Character::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Character {
    Table,
    Id,
    Name,
    Species,
    Gender,
    HomeplanetId,
}
