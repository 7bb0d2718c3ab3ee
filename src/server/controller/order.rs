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
        discount::{DiscountDetailDto, UpdateDiscountDto},
        order::{CreateOrderDto, OrderDto, UpdateOrderDto},
    },
    server::{
        error::AppError,
        model::{
            discount::UpdateDiscountParam,
            order::{CreateOrderParam, UpdateOrderParam},
        },
        service::{discount::DiscountService, order::OrderService},
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "order";

/// Create a new order.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Order creation data (table number and final price)
///
/// # Returns
/// - `201 Created` - Successfully created order
/// - `422 Unprocessable Entity` - Malformed body or invalid final price
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/orders",
    tag = ORDER_TAG,
    request_body = CreateOrderDto,
    responses(
        (status = 201, description = "Successfully created order", body = OrderDto),
        (status = 422, description = "Invalid order data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let order = OrderService::from_db(&state.db)
        .create(CreateOrderParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// Get all orders with their discount lines.
#[utoipa::path(
    get,
    path = "/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved orders", body = Vec<OrderDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let orders = OrderService::from_db(&state.db).get_all().await?;

    let dtos: Vec<OrderDto> = orders.into_iter().map(|order| order.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an order by ID.
///
/// # Returns
/// - `200 OK` - The requested order
/// - `404 Not Found` - No order with the provided ID
/// - `422 Unprocessable Entity` - ID is not a number
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved order", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 422, description = "Invalid order ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let order = OrderService::from_db(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Update an order's table number and/or final price.
///
/// Omitted fields keep their stored value.
///
/// # Returns
/// - `200 OK` - Successfully updated order
/// - `404 Not Found` - No order with the provided ID
/// - `422 Unprocessable Entity` - Malformed body or invalid final price
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    request_body = UpdateOrderDto,
    responses(
        (status = 200, description = "Successfully updated order", body = OrderDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 422, description = "Invalid order data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateOrderDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let order = OrderService::from_db(&state.db)
        .update(UpdateOrderParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Delete an order and its discount lines.
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = ORDER_TAG,
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted order"),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 422, description = "Invalid order ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_order(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    OrderService::from_db(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Update the discount of one dish within an order.
///
/// Both the order and the dish must exist. The percentage must lie between 0 and
/// 100; the creation limit on the discounted price is not enforced here.
///
/// # Returns
/// - `200 OK` - Successfully updated discount
/// - `404 Not Found` - No discount recorded for the pair
/// - `422 Unprocessable Entity` - Order or dish missing, or invalid discount
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/orders/{order_id}/dishes/{dish_id}",
    tag = ORDER_TAG,
    params(
        ("order_id" = i32, Path, description = "Order ID"),
        ("dish_id" = i32, Path, description = "Dish ID")
    ),
    request_body = UpdateDiscountDto,
    responses(
        (status = 200, description = "Successfully updated discount", body = DiscountDetailDto),
        (status = 404, description = "Discount not found", body = ErrorDto),
        (status = 422, description = "Order or dish missing, or invalid discount", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_order_discount(
    State(state): State<AppState>,
    path: Result<Path<(i32, i32)>, PathRejection>,
    payload: Result<Json<UpdateDiscountDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path((order_id, dish_id)) = path?;
    let Json(payload) = payload?;

    let discount = DiscountService::from_db(&state.db)
        .update(UpdateDiscountParam::from_dto(order_id, dish_id, payload))
        .await?;

    Ok((StatusCode::OK, Json(discount.into_dto())))
}
