//! Order data repository for database operations
//!
//! Provides the `OrderRepository` for managing orders in the database along with the
//! `OrderStore` capability trait consumed by the service layer. Orders are always
//! returned with their discount lines loaded.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait,
    QueryFilter, QueryOrder,
};

use crate::server::{
    error::{AppError, EntityKind},
    model::order::{CreateOrderParam, Order, UpdateOrderParam},
};

/// Persistence operations required for orders.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn create(&self, param: CreateOrderParam) -> Result<Order, AppError>;
    async fn list(&self) -> Result<Vec<Order>, AppError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError>;
    async fn update(&self, param: UpdateOrderParam) -> Result<Order, AppError>;
    async fn delete(&self, id: i32) -> Result<(), AppError>;
}

/// Repository providing database operations for order management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, and deleting order records.
pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    /// Creates a new OrderRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `OrderRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the discount lines of an order entity and converts both to the domain model
    async fn with_details(&self, order: entity::order::Model) -> Result<Order, AppError> {
        let details = order
            .find_related(entity::prelude::DiscountDetail)
            .order_by_asc(entity::discount_detail::Column::DishId)
            .all(self.db)
            .await?;

        Ok(Order::from_entity(order, details))
    }
}

#[async_trait]
impl OrderStore for OrderRepository<'_> {
    /// Creates a new order
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the table number and final price
    ///
    /// # Returns
    /// - `Ok(Order)` - The created order, without discount lines
    /// - `Err(AppError::DbErr)` - Database error during insert operation
    async fn create(&self, param: CreateOrderParam) -> Result<Order, AppError> {
        let now = Utc::now();
        let entity = entity::order::ActiveModel {
            table_number: ActiveValue::Set(param.table_number),
            final_price: ActiveValue::Set(param.final_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Order::from_entity(entity, Vec::new()))
    }

    /// Gets all orders with their discount lines, ordered by ID
    async fn list(&self) -> Result<Vec<Order>, AppError> {
        let rows = entity::prelude::Order::find()
            .find_with_related(entity::prelude::DiscountDetail)
            .order_by_asc(entity::order::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(order, details)| Order::from_entity(order, details))
            .collect())
    }

    /// Finds an order by ID with its discount lines
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - The requested order if found
    /// - `Ok(None)` - The requested order does not exist
    /// - `Err(AppError::DbErr)` - Database error during get operation
    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        match entity::prelude::Order::find_by_id(id).one(self.db).await? {
            Some(order) => Ok(Some(self.with_details(order).await?)),
            None => Ok(None),
        }
    }

    /// Updates the provided fields of an order
    ///
    /// # Returns
    /// - `Ok(Order)` - The updated order with its discount lines
    /// - `Err(AppError::RecordNotFound)` - No order with the provided ID
    /// - `Err(AppError::DbErr)` - Database error during update operation
    async fn update(&self, param: UpdateOrderParam) -> Result<Order, AppError> {
        let order = entity::prelude::Order::find_by_id(param.id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Order, param.id))?;

        let mut active_model: entity::order::ActiveModel = order.into();
        if let Some(table_number) = param.table_number {
            active_model.table_number = ActiveValue::Set(table_number);
        }
        if let Some(final_price) = param.final_price {
            active_model.final_price = ActiveValue::Set(final_price);
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let entity = active_model.update(self.db).await?;

        self.with_details(entity).await
    }

    /// Deletes an order together with its discount lines
    ///
    /// # Returns
    /// - `Ok(())` - The order was deleted
    /// - `Err(AppError::RecordNotFound)` - No order with the provided ID
    /// - `Err(AppError::DbErr)` - Database error during delete operation
    async fn delete(&self, id: i32) -> Result<(), AppError> {
        entity::prelude::DiscountDetail::delete_many()
            .filter(entity::discount_detail::Column::OrderId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::prelude::Order::delete_by_id(id)
            .exec(self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found(EntityKind::Order, id));
        }

        Ok(())
    }
}
