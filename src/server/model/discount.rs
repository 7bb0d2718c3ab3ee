//! Domain & parameter models for discount detail operations
//!
//! A discount detail is the percentage discount applied to one dish within one
//! order, keyed by the `(order_id, dish_id)` pair.

use crate::{
    model::discount::{
        CreateDiscountDto, DiscountDetailDto, DiscountDetailWithParentsDto, PriceAfterDiscountDto,
        UpdateDiscountDto,
    },
    server::model::{dish::Dish, order::Order},
};

/// The discount detail domain model
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountDetail {
    pub order_id: i32,
    pub dish_id: i32,
    /// Discount percentage in the range 0 to 100
    pub discount: f64,
}

impl DiscountDetail {
    /// Converts an entity model to the discount detail domain model
    pub fn from_entity(entity: entity::discount_detail::Model) -> Self {
        Self {
            order_id: entity.order_id,
            dish_id: entity.dish_id,
            discount: entity.discount,
        }
    }

    /// Converts the domain model into a DTO for API responses
    pub fn into_dto(self) -> DiscountDetailDto {
        DiscountDetailDto {
            order_id: self.order_id,
            dish_id: self.dish_id,
            discount: self.discount,
        }
    }
}

/// A discount detail with its owning order and dish resolved
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountDetailWithParents {
    pub detail: DiscountDetail,
    pub order: Order,
    pub dish: Dish,
}

impl DiscountDetailWithParents {
    /// Converts the domain model into a DTO with nested `Order` and `Dish`
    pub fn into_dto(self) -> DiscountDetailWithParentsDto {
        DiscountDetailWithParentsDto {
            order_id: self.detail.order_id,
            dish_id: self.detail.dish_id,
            discount: self.detail.discount,
            order: self.order.into_dto(),
            dish: self.dish.into_dto(),
        }
    }
}

/// Parameters for creating a discount detail
#[derive(Debug, Clone)]
pub struct CreateDiscountParam {
    pub order_id: i32,
    pub dish_id: i32,
    pub discount: f64,
}

impl From<CreateDiscountDto> for CreateDiscountParam {
    fn from(dto: CreateDiscountDto) -> Self {
        Self {
            order_id: dto.order_id,
            dish_id: dto.dish_id,
            discount: dto.discount,
        }
    }
}

/// Parameters for changing the discount of an existing `(order_id, dish_id)` pair
#[derive(Debug, Clone)]
pub struct UpdateDiscountParam {
    pub order_id: i32,
    pub dish_id: i32,
    pub discount: f64,
}

impl UpdateDiscountParam {
    /// Builds update parameters from the path identifiers and the request body
    pub fn from_dto(order_id: i32, dish_id: i32, dto: UpdateDiscountDto) -> Self {
        Self {
            order_id,
            dish_id,
            discount: dto.discount,
        }
    }
}

/// Original and discounted price of one dish within one order
#[derive(Debug, Clone, PartialEq)]
pub struct PriceAfterDiscount {
    pub order_id: i32,
    pub dish_id: i32,
    pub original_price: f64,
    pub discount_price: f64,
}

impl PriceAfterDiscount {
    pub fn into_dto(self) -> PriceAfterDiscountDto {
        PriceAfterDiscountDto {
            order_id: self.order_id,
            dish_id: self.dish_id,
            original_price: self.original_price,
            discount_price: self.discount_price,
        }
    }
}
