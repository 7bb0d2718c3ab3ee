//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database and return the stored
//! entity model, so generated IDs are available to the test.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let order = factory::create_order(&db).await?;
//!     let dish = factory::create_dish(&db).await?;
//!
//!     // Create a discount together with its parents
//!     let (order, dish, discount) =
//!         factory::helpers::create_discount_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let dish = factory::dish::DishFactory::new(&db)
//!     .name("Steak")
//!     .price(24.5)
//!     .build()
//!     .await?;
//! ```

pub mod discount_detail;
pub mod dish;
pub mod helpers;
pub mod order;

pub use discount_detail::create_discount_detail;
pub use dish::create_dish;
pub use order::create_order;
