use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Dish::Table)
                    .if_not_exists()
                    .col(pk_auto(Dish::Id))
                    .col(string(Dish::Name))
                    .col(double(Dish::Price))
                    .col(timestamp_with_time_zone(Dish::CreatedAt))
                    .col(timestamp_with_time_zone(Dish::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Dish::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Dish {
    #[sea_orm(iden = "dishes")]
    Table,
    Id,
    Name,
    Price,
    CreatedAt,
    UpdatedAt,
}
