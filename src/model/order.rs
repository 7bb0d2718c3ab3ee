use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::discount::DiscountDetailDto;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct OrderDto {
    #[serde(rename = "ID")]
    pub id: i32,
    pub table_number: i32,
    pub final_price: f64,
    pub discount_detail: Vec<DiscountDetailDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct CreateOrderDto {
    pub table_number: i32,
    #[serde(default)]
    pub final_price: f64,
}

/// Partial order update; omitted fields keep their stored value.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default, ToSchema)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateOrderDto {
    #[serde(default)]
    pub table_number: Option<i32>,
    #[serde(default)]
    pub final_price: Option<f64>,
}
