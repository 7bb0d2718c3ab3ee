use sea_orm_migration::{prelude::*, schema::*};

use super::{m20251015_000001_create_order_table::Order, m20251015_000002_create_dish_table::Dish};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DiscountDetail::Table)
                    .if_not_exists()
                    .col(integer(DiscountDetail::OrderId))
                    .col(integer(DiscountDetail::DishId))
                    .col(double(DiscountDetail::Discount))
                    .primary_key(
                        Index::create()
                            .col(DiscountDetail::OrderId)
                            .col(DiscountDetail::DishId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discount_detail_order_id")
                            .from(DiscountDetail::Table, DiscountDetail::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_discount_detail_dish_id")
                            .from(DiscountDetail::Table, DiscountDetail::DishId)
                            .to(Dish::Table, Dish::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DiscountDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum DiscountDetail {
    #[sea_orm(iden = "discount_details")]
    Table,
    OrderId,
    DishId,
    Discount,
}
