use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{dish::DishDto, order::OrderDto};

/// A discount line as listed under its order.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DiscountDetailDto {
    #[serde(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "DishID")]
    pub dish_id: i32,
    #[serde(rename = "Discount")]
    pub discount: f64,
}

/// A discount with its owning order and dish attached.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DiscountDetailWithParentsDto {
    #[serde(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "DishID")]
    pub dish_id: i32,
    #[serde(rename = "Discount")]
    pub discount: f64,
    #[serde(rename = "Order")]
    pub order: OrderDto,
    #[serde(rename = "Dish")]
    pub dish: DishDto,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct CreateDiscountDto {
    #[serde(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "DishID")]
    pub dish_id: i32,
    #[serde(rename = "Discount")]
    pub discount: f64,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct UpdateDiscountDto {
    #[serde(rename = "Discount")]
    pub discount: f64,
}

/// Price of a dish within an order once its discount is applied.
///
/// `DischID` is kept verbatim for compatibility with existing clients.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct PriceAfterDiscountDto {
    #[serde(rename = "OrderID")]
    pub order_id: i32,
    #[serde(rename = "DischID")]
    pub dish_id: i32,
    #[serde(rename = "OriginalPrice")]
    pub original_price: f64,
    #[serde(rename = "DiscountPrice")]
    pub discount_price: f64,
}
