use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20240916_000002_character::Character, m20240916_000003_user::User};

static IDX_FAVORITE_CHARACTER_USER_ID: &str = "idx-favorite_character-user_id";
static FK_FAVORITE_CHARACTER_USER_ID: &str = "fk-favorite_character-user_id";
static FK_FAVORITE_CHARACTER_CHARACTERS_ID: &str = "fk-favorite_character-characters_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FavoriteCharacter::Table)
                    .if_not_exists()
                    .col(pk_auto(FavoriteCharacter::Id))
                    .col(integer(FavoriteCharacter::UserId))
                    .col(integer(FavoriteCharacter::CharactersId))
                    .col(string_len_null(FavoriteCharacter::UserCharacteristics, 200))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_USER_ID)
                            .from(FavoriteCharacter::Table, FavoriteCharacter::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVORITE_CHARACTER_CHARACTERS_ID)
                            .from(FavoriteCharacter::Table, FavoriteCharacter::CharactersId)
                            .to(Character::Table, Character::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_CHARACTER_USER_ID)
                    .table(FavoriteCharacter::Table)
                    .col(FavoriteCharacter::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_CHARACTER_USER_ID)
                    .table(FavoriteCharacter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FavoriteCharacter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum FavoriteCharacter {
    Table,
    Id,
    UserId,
    CharactersId,
    UserCharacteristics,
}
