//! Dish factory for creating test dish entities.
//!
//! This module provides factory methods for creating dish entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test dishes with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::dish::DishFactory;
///
/// let dish = DishFactory::new(&db)
///     .name("Steak")
///     .price(24.5)
///     .build()
///     .await?;
/// ```
pub struct DishFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::dish::Model,
}

impl<'a> DishFactory<'a> {
    /// Creates a new DishFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Dish {id}"` where id is auto-incremented
    /// - price: `fixture::dish::DEFAULT_PRICE`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DishFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::dish::entity_builder()
            .name(format!("Dish {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the dish name.
    ///
    /// # Arguments
    /// - `name` - Menu name for the dish
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the dish base price.
    ///
    /// # Arguments
    /// - `price` - Base price in currency units
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn price(mut self, price: f64) -> Self {
        self.entity.price = price;
        self
    }

    /// Builds and inserts the dish entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::dish::Model)` - Created dish entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::dish::Model, DbErr> {
        let now = Utc::now();
        entity::dish::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            price: ActiveValue::Set(self.entity.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a dish with default values.
///
/// Shorthand for `DishFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let dish = create_dish(&db).await?;
/// ```
pub async fn create_dish(db: &DatabaseConnection) -> Result<entity::dish::Model, DbErr> {
    DishFactory::new(db).build().await
}
