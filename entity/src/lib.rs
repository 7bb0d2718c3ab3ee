//! SeaORM entity models for the restaurant ordering schema.
//!
//! Orders and dishes are independent tables; `discount_details` joins them with a
//! composite primary key of `(order_id, dish_id)` so the store itself rejects a
//! second discount for the same pair.

pub mod prelude;

pub mod discount_detail;
pub mod dish;
pub mod order;
