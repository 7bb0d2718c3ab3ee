//! Domain & parameter models for dish operations
//!
//! Defines the dish domain model, the dish parameter models, and provides methods
//! to convert the dish domain model from entity and into Dtos

use chrono::{DateTime, Utc};

use crate::{
    model::dish::{CreateDishDto, DishDto, UpdateDishDto},
    server::error::AppError,
};

/// The dish domain model
///
/// A menu item with a display name and a base price in currency units.
#[derive(Debug, Clone, PartialEq)]
pub struct Dish {
    pub id: i32,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Dish {
    /// Converts an entity model to the dish domain model
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Dish` - The converted dish domain model
    pub fn from_entity(entity: entity::dish::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            price: entity.price,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the dish domain model into a DTO for API responses
    pub fn into_dto(self) -> DishDto {
        DishDto {
            id: self.id,
            name: self.name,
            price: self.price,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating a new dish
#[derive(Debug, Clone)]
pub struct CreateDishParam {
    pub name: String,
    pub price: f64,
}

impl CreateDishParam {
    /// Checks the dish has a name and a positive, finite price
    ///
    /// # Returns
    /// - `Ok(())` - Parameters are valid
    /// - `Err(AppError::UnprocessableEntity)` - Empty name or invalid price
    pub fn validate(&self) -> Result<(), AppError> {
        validate_name(&self.name)?;
        validate_price(self.price)
    }
}

impl From<CreateDishDto> for CreateDishParam {
    fn from(dto: CreateDishDto) -> Self {
        Self {
            name: dto.name,
            price: dto.price,
        }
    }
}

/// Parameters for updating an existing dish
///
/// Only fields that are `Some` are written, all others keep their stored value.
#[derive(Debug, Clone)]
pub struct UpdateDishParam {
    pub id: i32,
    pub name: Option<String>,
    pub price: Option<f64>,
}

impl UpdateDishParam {
    /// Builds update parameters for the dish with the provided ID from the request body
    pub fn from_dto(id: i32, dto: UpdateDishDto) -> Self {
        Self {
            id,
            name: dto.name,
            price: dto.price,
        }
    }

    /// Checks every provided field using the same rules as dish creation
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(price) = self.price {
            validate_price(price)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Dish name must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_price(price: f64) -> Result<(), AppError> {
    if !price.is_finite() || price <= 0.0 {
        return Err(AppError::UnprocessableEntity(format!(
            "Dish price must be a positive number, got {}",
            price
        )));
    }
    Ok(())
}
