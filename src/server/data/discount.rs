//! Discount detail data repository for database operations
//!
//! Provides the `DiscountRepository` for managing per-(order, dish) discounts and the
//! `DiscountStore` capability trait consumed by the discount service. The composite
//! primary key decides concurrent duplicate inserts, so store-level constraint
//! violations are translated into domain errors here.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, SqlErr};

use crate::server::{
    data::order::{OrderRepository, OrderStore},
    error::{AppError, EntityKind},
    model::{
        discount::{
            CreateDiscountParam, DiscountDetail, DiscountDetailWithParents, UpdateDiscountParam,
        },
        dish::Dish,
    },
};

/// Persistence operations required for discount details.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscountStore: Send + Sync {
    async fn create(&self, param: CreateDiscountParam) -> Result<DiscountDetail, AppError>;
    async fn update(&self, param: UpdateDiscountParam) -> Result<DiscountDetail, AppError>;
    async fn find_with_parents(
        &self,
        order_id: i32,
        dish_id: i32,
    ) -> Result<Option<DiscountDetailWithParents>, AppError>;
}

/// Repository providing database operations for discount details.
pub struct DiscountRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscountRepository<'a> {
    /// Creates a new DiscountRepository instance
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `DiscountRepository` - new repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Formats the composite key the way it appears in error messages.
fn pair_id(order_id: i32, dish_id: i32) -> String {
    format!("({}, {})", order_id, dish_id)
}

fn conflict(order_id: i32, dish_id: i32) -> AppError {
    AppError::Conflict(format!(
        "Discount for order {} and dish {} already exists",
        order_id, dish_id
    ))
}

/// Translates constraint violations raised by the store on insert.
pub(super) fn map_insert_err(err: DbErr, order_id: i32, dish_id: i32) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => conflict(order_id, dish_id),
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => AppError::UnprocessableEntity(format!(
            "Order {} or dish {} no longer exists",
            order_id, dish_id
        )),
        _ => AppError::DbErr(err),
    }
}

/// Translates a lost update into not-found for the pair.
pub(super) fn map_update_err(err: DbErr, order_id: i32, dish_id: i32) -> AppError {
    match err {
        DbErr::RecordNotUpdated => {
            AppError::not_found(EntityKind::DiscountDetail, pair_id(order_id, dish_id))
        }
        err => AppError::DbErr(err),
    }
}

#[async_trait]
impl DiscountStore for DiscountRepository<'_> {
    /// Creates a discount detail for an `(order_id, dish_id)` pair
    ///
    /// # Arguments
    /// - `param` - Create parameters containing the pair and the discount percentage
    ///
    /// # Returns
    /// - `Ok(DiscountDetail)` - The created discount detail
    /// - `Err(AppError::Conflict)` - A discount for the pair already exists
    /// - `Err(AppError::UnprocessableEntity)` - Referenced order or dish is missing
    /// - `Err(AppError::DbErr)` - Database error during insert operation
    async fn create(&self, param: CreateDiscountParam) -> Result<DiscountDetail, AppError> {
        let existing =
            entity::prelude::DiscountDetail::find_by_id((param.order_id, param.dish_id))
                .one(self.db)
                .await?;
        if existing.is_some() {
            return Err(conflict(param.order_id, param.dish_id));
        }

        let entity = entity::discount_detail::ActiveModel {
            order_id: ActiveValue::Set(param.order_id),
            dish_id: ActiveValue::Set(param.dish_id),
            discount: ActiveValue::Set(param.discount),
        }
        .insert(self.db)
        .await
        .map_err(|err| map_insert_err(err, param.order_id, param.dish_id))?;

        Ok(DiscountDetail::from_entity(entity))
    }

    /// Updates the discount percentage of an existing pair
    ///
    /// # Returns
    /// - `Ok(DiscountDetail)` - The updated discount detail
    /// - `Err(AppError::RecordNotFound)` - No discount exists for the pair, or it was
    ///   deleted before the write landed
    /// - `Err(AppError::DbErr)` - Database error during update operation
    async fn update(&self, param: UpdateDiscountParam) -> Result<DiscountDetail, AppError> {
        let detail = entity::prelude::DiscountDetail::find_by_id((param.order_id, param.dish_id))
            .one(self.db)
            .await?
            .ok_or_else(|| {
                AppError::not_found(
                    EntityKind::DiscountDetail,
                    pair_id(param.order_id, param.dish_id),
                )
            })?;

        let mut active_model: entity::discount_detail::ActiveModel = detail.into();
        active_model.discount = ActiveValue::Set(param.discount);

        let entity = active_model
            .update(self.db)
            .await
            .map_err(|err| map_update_err(err, param.order_id, param.dish_id))?;

        Ok(DiscountDetail::from_entity(entity))
    }

    /// Finds a discount detail together with its order and dish
    ///
    /// # Returns
    /// - `Ok(Some(DiscountDetailWithParents))` - The joined record if all three rows exist
    /// - `Ok(None)` - No discount for the pair, or one of its parents is gone
    /// - `Err(AppError::DbErr)` - Database error during lookup
    async fn find_with_parents(
        &self,
        order_id: i32,
        dish_id: i32,
    ) -> Result<Option<DiscountDetailWithParents>, AppError> {
        let row = entity::prelude::DiscountDetail::find_by_id((order_id, dish_id))
            .find_also_related(entity::prelude::Dish)
            .one(self.db)
            .await?;

        let Some((detail, Some(dish))) = row else {
            return Ok(None);
        };

        let Some(order) = OrderRepository::new(self.db).find_by_id(order_id).await? else {
            return Ok(None);
        };

        Ok(Some(DiscountDetailWithParents {
            detail: DiscountDetail::from_entity(detail),
            order,
            dish: Dish::from_entity(dish),
        }))
    }
}
