pub use sea_orm_migration::prelude::*;

mod m20251015_000001_create_order_table;
mod m20251015_000002_create_dish_table;
mod m20251015_000003_create_discount_detail_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251015_000001_create_order_table::Migration),
            Box::new(m20251015_000002_create_dish_table::Migration),
            Box::new(m20251015_000003_create_discount_detail_table::Migration),
        ]
    }
}
