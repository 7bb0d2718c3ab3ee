//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Each aggregate exposes a narrow capability trait (`OrderStore`, `DishStore`,
//! `DiscountStore`) which services depend on instead of the concrete repository.

pub mod discount;
pub mod dish;
pub mod order;

#[cfg(test)]
mod test;
