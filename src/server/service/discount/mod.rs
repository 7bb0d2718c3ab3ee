//! Discount orchestration.
//!
//! Resolves the order and dish a discount refers to, runs the pricing policy and
//! persists the result. Every step short-circuits, so a rejected request never
//! reaches the discount store.

pub mod policy;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        discount::{DiscountRepository, DiscountStore},
        dish::{DishRepository, DishStore},
        order::{OrderRepository, OrderStore},
    },
    error::AppError,
    model::{
        discount::{
            CreateDiscountParam, DiscountDetail, DiscountDetailWithParents, PriceAfterDiscount,
            UpdateDiscountParam,
        },
        dish::Dish,
        order::Order,
    },
};

/// Service coordinating discount creation, updates and price lookups.
pub struct DiscountService<O, D, X> {
    orders: O,
    dishes: D,
    discounts: X,
}

impl<'a> DiscountService<OrderRepository<'a>, DishRepository<'a>, DiscountRepository<'a>> {
    /// Creates a DiscountService backed by the database repositories
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn from_db(db: &'a DatabaseConnection) -> Self {
        Self::new(
            OrderRepository::new(db),
            DishRepository::new(db),
            DiscountRepository::new(db),
        )
    }
}

impl<O, D, X> DiscountService<O, D, X>
where
    O: OrderStore,
    D: DishStore,
    X: DiscountStore,
{
    pub fn new(orders: O, dishes: D, discounts: X) -> Self {
        Self {
            orders,
            dishes,
            discounts,
        }
    }

    /// Looks up the order and dish a discount refers to
    ///
    /// Missing parents are reported as `UnprocessableEntity`, not `RecordNotFound`.
    async fn resolve_parents(&self, order_id: i32, dish_id: i32) -> Result<(Order, Dish), AppError> {
        let order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or_else(|| AppError::UnprocessableEntity("order not found".to_string()))?;
        tracing::debug!(order_id, "resolved order for discount");

        let dish = self
            .dishes
            .find_by_id(dish_id)
            .await?
            .ok_or_else(|| AppError::UnprocessableEntity("dish not found".to_string()))?;
        tracing::debug!(dish_id, "resolved dish for discount");

        Ok((order, dish))
    }

    /// Creates a discount for one dish within one order
    ///
    /// # Arguments
    /// - `param` - The `(order_id, dish_id)` pair and the discount percentage
    ///
    /// # Returns
    /// - `Ok(DiscountDetailWithParents)` - Created discount with its order and dish attached
    /// - `Err(AppError::UnprocessableEntity)` - Order or dish does not exist
    /// - `Err(AppError::PolicyErr)` - Discount out of range or too high for the dish price
    /// - `Err(AppError::Conflict)` - A discount for the pair already exists
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(
        &self,
        param: CreateDiscountParam,
    ) -> Result<DiscountDetailWithParents, AppError> {
        let (order, dish) = self.resolve_parents(param.order_id, param.dish_id).await?;

        if let Err(err) = policy::validate(param.discount, dish.price) {
            tracing::warn!(
                order_id = param.order_id,
                dish_id = param.dish_id,
                discount = param.discount,
                base_price = dish.price,
                "rejected discount: {}",
                err
            );
            return Err(err.into());
        }

        let detail = self.discounts.create(param).await?;
        tracing::debug!(
            order_id = detail.order_id,
            dish_id = detail.dish_id,
            "created discount"
        );

        Ok(DiscountDetailWithParents {
            detail,
            order,
            dish,
        })
    }

    /// Changes the discount percentage of an existing pair
    ///
    /// Only the range check applies here. Values the policy would reject at creation
    /// are accepted and logged.
    ///
    /// # Returns
    /// - `Ok(DiscountDetail)` - The updated discount
    /// - `Err(AppError::UnprocessableEntity)` - Order or dish does not exist
    /// - `Err(AppError::PolicyErr)` - Discount outside 0 to 100
    /// - `Err(AppError::RecordNotFound)` - No discount exists for the pair
    /// - `Err(AppError::InternalError)` - Any other store failure
    pub async fn update(&self, param: UpdateDiscountParam) -> Result<DiscountDetail, AppError> {
        let (_, dish) = self.resolve_parents(param.order_id, param.dish_id).await?;

        policy::check_range(param.discount)?;
        if policy::validate(param.discount, dish.price).is_err() {
            tracing::warn!(
                order_id = param.order_id,
                dish_id = param.dish_id,
                discount = param.discount,
                "discount update exceeds the creation limit"
            );
        }

        self.discounts.update(param).await.map_err(|err| {
            if err.is_not_found() {
                err
            } else {
                AppError::InternalError(format!("Failed to update discount: {}", err))
            }
        })
    }

    /// Computes the price of a dish within an order after its discount
    ///
    /// # Returns
    /// - `Ok(PriceAfterDiscount)` - Original and discounted price
    /// - `Err(AppError::UnprocessableEntity)` - No discount recorded for the pair
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn price_after_discount(
        &self,
        order_id: i32,
        dish_id: i32,
    ) -> Result<PriceAfterDiscount, AppError> {
        let record = self
            .discounts
            .find_with_parents(order_id, dish_id)
            .await?
            .ok_or_else(|| {
                AppError::UnprocessableEntity(format!(
                    "No discount found for order {} and dish {}",
                    order_id, dish_id
                ))
            })?;

        let original_price = record.dish.price;

        Ok(PriceAfterDiscount {
            order_id: record.detail.order_id,
            dish_id: record.detail.dish_id,
            original_price,
            discount_price: policy::compute_price(record.detail.discount, original_price),
        })
    }
}
