//! Dish data repository for database operations
//!
//! Provides the `DishRepository` for managing dishes in the database along with the
//! `DishStore` capability trait consumed by the service layer.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    error::{AppError, EntityKind},
    model::dish::{CreateDishParam, Dish, UpdateDishParam},
};

/// Persistence operations required for dishes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DishStore: Send + Sync {
    async fn create(&self, param: CreateDishParam) -> Result<Dish, AppError>;
    async fn list(&self) -> Result<Vec<Dish>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Dish>, AppError>;
    async fn update(&self, param: UpdateDishParam) -> Result<Dish, AppError>;
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

/// Repository providing database operations for dish management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting dish records.
pub struct DishRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DishRepository<'a> {
    /// Creates a new DishRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DishRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl DishStore for DishRepository<'_> {
    /// Creates a new dish
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the dish name and price
    ///
    /// # Returns
    /// - `Ok(Dish)` - The created dish as a domain model
    /// - `Err(AppError::DbErr)` - Database error during insert operation
    async fn create(&self, param: CreateDishParam) -> Result<Dish, AppError> {
        let now = Utc::now();
        let entity = entity::dish::ActiveModel {
            name: ActiveValue::Set(param.name),
            price: ActiveValue::Set(param.price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Dish::from_entity(entity))
    }

    /// Gets all dishes ordered by ID
    async fn list(&self) -> Result<Vec<Dish>, AppError> {
        let entities = entity::prelude::Dish::find()
            .order_by_asc(entity::dish::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Dish::from_entity).collect())
    }

    /// Finds a dish by ID
    ///
    /// # Returns
    /// - `Ok(Some(Dish))` - The requested dish if found
    /// - `Ok(None)` - The requested dish does not exist
    /// - `Err(AppError::DbErr)` - Database error during get operation
    async fn find_by_id(&self, id: i32) -> Result<Option<Dish>, AppError> {
        let entity = entity::prelude::Dish::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Dish::from_entity))
    }

    /// Updates the provided fields of a dish
    ///
    /// # Returns
    /// - `Ok(Dish)` - The updated dish as a domain model
    /// - `Err(AppError::RecordNotFound)` - No dish with the provided ID
    /// - `Err(AppError::DbErr)` - Database error during update operation
    async fn update(&self, param: UpdateDishParam) -> Result<Dish, AppError> {
        let dish = entity::prelude::Dish::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Dish, param.id))?;

        let mut active_model: entity::dish::ActiveModel = dish.into();
        if let Some(name) = param.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(price) = param.price {
            active_model.price = ActiveValue::Set(price);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        Ok(Dish::from_entity(entity))
    }

    /// Deletes a dish together with every discount line referencing it
    ///
    /// # Returns
    /// - `Ok(())` - The dish was deleted
    /// - `Err(AppError::RecordNotFound)` - No dish with the provided ID
    /// - `Err(AppError::DbErr)` - Database error during delete operation
    async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::DiscountDetail::delete_many()
            .filter(entity::discount_detail::Column::DishId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Dish::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(EntityKind::Dish, id));
        }

        Ok(())
    }
}
