use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{discount, dish, order},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tableside API",
        description = "Orders, dishes and per-dish discounts for restaurant tables"
    ),
    tags(
        (name = "order", description = "Order management and order discount updates"),
        (name = "dish", description = "Dish management"),
        (name = "discount", description = "Discount creation and discounted prices")
    )
)]
struct ApiDoc;

/// Builds the API router with OpenAPI documentation served under `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(order::create_order, order::get_orders))
        .routes(routes!(
            order::get_order_by_id,
            order::update_order,
            order::delete_order
        ))
        .routes(routes!(order::update_order_discount))
        .routes(routes!(dish::create_dish, dish::get_dishes))
        .routes(routes!(
            dish::get_dish_by_id,
            dish::update_dish,
            dish::delete_dish
        ))
        .routes(routes!(discount::create_discount))
        .routes(routes!(discount::get_price_after_discount))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
