//! Domain & parameter models for order operations
//!
//! Defines the order domain model, the order parameter models, and provides methods
//! to convert the order domain model from entity and into Dtos

use chrono::{DateTime, Utc};

use crate::{
    model::order::{CreateOrderDto, OrderDto, UpdateOrderDto},
    server::{error::AppError, model::discount::DiscountDetail},
};

/// The order domain model
///
/// A table's order together with every discount line recorded against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub table_number: i32,
    pub final_price: f64,
    pub discount_details: Vec<DiscountDetail>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Converts an order entity and its discount lines to the order domain model
    ///
    /// # Arguments
    /// - `entity` - The order entity model from the database
    /// - `details` - Discount detail entities belonging to the order
    ///
    /// # Returns
    /// - `Order` - The converted order domain model
    pub fn from_entity(
        entity: entity::order::Model,
        details: Vec<entity::discount_detail::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            table_number: entity.table_number,
            final_price: entity.final_price,
            discount_details: details
                .into_iter()
                .map(DiscountDetail::from_entity)
                .collect(),
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the order domain model into a DTO for API responses
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            table_number: self.table_number,
            final_price: self.final_price,
            discount_detail: self
                .discount_details
                .into_iter()
                .map(DiscountDetail::into_dto)
                .collect(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new order
#[derive(Debug, Clone)]
pub struct CreateOrderParam {
    pub table_number: i32,
    pub final_price: f64,
}

impl CreateOrderParam {
    /// Checks the final price is a finite, non-negative amount
    ///
    /// # Returns
    /// - `Ok(())` - Parameters are valid
    /// - `Err(AppError::UnprocessableEntity)` - Invalid final price
    pub fn validate(&self) -> Result<(), AppError> {
        validate_final_price(self.final_price)
    }
}

impl From<CreateOrderDto> for CreateOrderParam {
    fn from(dto: CreateOrderDto) -> Self {
        Self {
            table_number: dto.table_number,
            final_price: dto.final_price,
        }
    }
}

/// Parameters for updating an existing order
///
/// Only fields that are `Some` are written, all others keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateOrderParam {
    pub id: i32,
    pub table_number: Option<i32>,
    pub final_price: Option<f64>,
}

impl UpdateOrderParam {
    /// Builds update parameters for the order with the provided ID from the request body
    pub fn from_dto(id: i32, dto: UpdateOrderDto) -> Self {
        Self {
            id,
            table_number: dto.table_number,
            final_price: dto.final_price,
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        match self.final_price {
            Some(final_price) => validate_final_price(final_price),
            None => Ok(()),
        }
    }
}

fn validate_final_price(final_price: f64) -> Result<(), AppError> {
    if !final_price.is_finite() || final_price < 0.0 {
        return Err(AppError::UnprocessableEntity(format!(
            "Order final price must be a non-negative number, got {}",
            final_price
        )));
    }
    Ok(())
}
