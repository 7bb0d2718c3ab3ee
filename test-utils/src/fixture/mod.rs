//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use
//! in unit tests and as default values for factories. Unlike factories, fixtures do NOT
//! insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let dish = fixture::dish::entity();
//!
//! // Create with custom fields
//! let steak = fixture::dish::entity_builder()
//!     .name("Steak")
//!     .price(24.5)
//!     .build();
//! ```

pub mod discount_detail;
pub mod dish;
pub mod order;

pub use discount_detail::{
    entity as discount_detail_entity, entity_builder as discount_detail_entity_builder,
};
pub use dish::{entity as dish_entity, entity_builder as dish_entity_builder};
pub use order::{entity as order_entity, entity_builder as order_entity_builder};

use chrono::{DateTime, TimeZone, Utc};

/// Fixed timestamp used for fixture `created_at`/`updated_at` values.
pub fn fixed_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}
