use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        discount::{CreateDiscountDto, DiscountDetailWithParentsDto, PriceAfterDiscountDto},
    },
    server::{
        error::AppError, model::discount::CreateDiscountParam,
        service::discount::DiscountService, state::AppState,
    },
};

/// Tag for grouping discount endpoints in OpenAPI documentation
pub static DISCOUNT_TAG: &str = "discount";

/// Create a discount for one dish within one order.
///
/// The order and dish must exist, no discount may exist yet for the pair, and the
/// discounted price must keep at least 80% of the dish base price.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Discount creation data (order ID, dish ID and percentage)
///
/// # Returns
/// - `201 Created` - Created discount with its order and dish
/// - `422 Unprocessable Entity` - Malformed body, missing order or dish, discount too
///   high, or a discount for the pair already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/discountPrice",
    tag = DISCOUNT_TAG,
    request_body = CreateDiscountDto,
    responses(
        (status = 201, description = "Successfully created discount", body = DiscountDetailWithParentsDto),
        (status = 422, description = "Discount rejected", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_discount(
    State(state): State<AppState>,
    payload: Result<Json<CreateDiscountDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let discount = DiscountService::from_db(&state.db)
        .create(CreateDiscountParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(discount.into_dto())))
}

/// Get the price of a dish within an order once its discount is applied.
///
/// # Returns
/// - `200 OK` - Original and discounted price
/// - `422 Unprocessable Entity` - No discount recorded for the pair, or malformed IDs
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/{order_id}/dishes/{dish_id}",
    tag = DISCOUNT_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("dish_id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Successfully computed price", body = PriceAfterDiscountDto),
        (status = 422, description = "No discount for the pair", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_price_after_discount(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((order_id, dish_id)) = path?;

    let price = DiscountService::from_db(&state.db)
        .price_after_discount(order_id, dish_id)
        .await?;

    Ok((StatusCode::OK, Json(price.into_dto())))
}
