use sea_orm::DatabaseConnection;

use crate::server::{
    data::order::{OrderRepository, OrderStore},
    error::{AppError, EntityKind},
    model::order::{CreateOrderParam, Order, UpdateOrderParam},
};

pub struct OrderService<O> {
    orders: O,
}

impl<'a> OrderService<OrderRepository<'a>> {
    pub fn from_db(db: &'a DatabaseConnection) -> Self {
        Self::new(OrderRepository::new(db))
    }
}

impl<O: OrderStore> OrderService<O> {
    pub fn new(orders: O) -> Self {
        Self { orders }
    }

    /// Validates and creates a new order
    pub async fn create(&self, param: CreateOrderParam) -> Result<Order, AppError> {
        param.validate()?;

        let order = self.orders.create(param).await?;
        tracing::debug!(order_id = order.id, "created order");

        Ok(order)
    }

    /// Gets all orders with their discount lines
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        self.orders.list().await
    }

    /// Gets an order by ID, failing with `RecordNotFound` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Order, AppError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Order, id))
    }

    /// Validates and applies a partial update to an order
    pub async fn update(&self, param: UpdateOrderParam) -> Result<Order, AppError> {
        param.validate()?;

        self.orders.update(param).await
    }

    /// Deletes an order and its discount lines
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.orders.delete(id).await?;
        tracing::debug!(order_id = id, "deleted order");

        Ok(())
    }
}
