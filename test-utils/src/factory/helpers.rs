//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates an order, a dish and a discount detail joining them.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((order, dish, discount_detail))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_discount_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::order::Model,
        entity::dish::Model,
        entity::discount_detail::Model,
    ),
    DbErr,
> {
    let order = crate::factory::order::create_order(db).await?;
    let dish = crate::factory::dish::create_dish(db).await?;
    let discount =
        crate::factory::discount_detail::create_discount_detail(db, order.id, dish.id).await?;

    Ok((order, dish, discount))
}
