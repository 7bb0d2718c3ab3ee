//! Order factory for creating test order entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test orders with customizable fields.
///
/// Defaults are sourced from the order fixture, with a unique table number per order.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::order::OrderFactory;
///
/// let order = OrderFactory::new(&db)
///     .table_number(7)
///     .final_price(42.0)
///     .build()
///     .await?;
/// ```
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::order::Model,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new OrderFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::order::entity_builder()
            .table_number((id % 100) as i32 + 1)
            .build();

        Self { db, entity }
    }

    /// Sets the table number.
    pub fn table_number(mut self, table_number: i32) -> Self {
        self.entity.table_number = table_number;
        self
    }

    /// Sets the final price.
    pub fn final_price(mut self, final_price: f64) -> Self {
        self.entity.final_price = final_price;
        self
    }

    /// Builds and inserts the order entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::order::Model)` - Created order entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();
        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            table_number: ActiveValue::Set(self.entity.table_number),
            final_price: ActiveValue::Set(self.entity.final_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values.
///
/// Shorthand for `OrderFactory::new(db).build().await`.
pub async fn create_order(db: &DatabaseConnection) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db).build().await
}
