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
        dish::{CreateDishDto, DishDto, UpdateDishDto},
    },
    server::{
        error::AppError,
        model::dish::{CreateDishParam, UpdateDishParam},
        service::dish::DishService,
        state::AppState,
    },
};

/// Tag for grouping dish endpoints in OpenAPI documentation
pub static DISH_TAG: &str = "dish";

/// Create a new dish.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Dish creation data (name and price)
///
/// # Returns
/// - `201 Created` - Successfully created dish
/// - `422 Unprocessable Entity` - Malformed body, empty name or non-positive price
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/dishes",
    tag = DISH_TAG,
    request_body = CreateDishDto,
    responses(
        (status = 201, description = "Successfully created dish", body = DishDto),
        (status = 422, description = "Invalid dish data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_dish(
    State(state): State<AppState>,
    payload: Result<Json<CreateDishDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;

    let dish = DishService::from_db(&state.db)
        .create(CreateDishParam::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(dish.into_dto())))
}

#[utoipa::path(
    get,
    path = "/dishes",
    tag = DISH_TAG,
    responses(
        (status = 200, description = "Successfully retrieved dishes", body = Vec<DishDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dishes(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dishes = DishService::from_db(&state.db).get_all().await?;

    let dtos: Vec<DishDto> = dishes.into_iter().map(|dish| dish.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/dishes/{id}",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved dish", body = DishDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 422, description = "Invalid dish ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dish_by_id(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    let dish = DishService::from_db(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(dish.into_dto())))
}

/// Update a dish's name and/or price.
///
/// Omitted fields keep their stored value. Discount lines referencing the dish
/// are left untouched.
#[utoipa::path(
    put,
    path = "/dishes/{id}",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    request_body = UpdateDishDto,
    responses(
        (status = 200, description = "Successfully updated dish", body = DishDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 422, description = "Invalid dish data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_dish(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<UpdateDishDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;
    let Json(payload) = payload?;

    let dish = DishService::from_db(&state.db)
        .update(UpdateDishParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(dish.into_dto())))
}

/// Delete a dish and every discount line referencing it.
#[utoipa::path(
    delete,
    path = "/dishes/{id}",
    tag = DISH_TAG,
    params(
        ("id" = i32, Path, description = "Dish ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted dish"),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 422, description = "Invalid dish ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_dish(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = path?;

    DishService::from_db(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
