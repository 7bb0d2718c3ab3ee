//! Discount pricing policy.
//!
//! Pure functions deciding whether a proposed discount is acceptable for a dish and
//! computing the discounted price. A discount may not take the dish below
//! `MIN_RETAINED_RATIO` of its base price.

use crate::server::error::policy::PolicyError;

/// Minimum share of the base price a discounted dish must keep.
pub const MIN_RETAINED_RATIO: f64 = 0.8;

/// Fails when the discount is not a finite percentage between 0 and 100.
pub fn check_range(discount: f64) -> Result<(), PolicyError> {
    if !discount.is_finite() || !(0.0..=100.0).contains(&discount) {
        return Err(PolicyError::InvalidDiscount(discount));
    }
    Ok(())
}

/// Validates a proposed discount against the base price of the discounted dish.
///
/// # Arguments
/// - `discount` - Proposed discount percentage
/// - `base_price` - Base price of the dish
///
/// # Returns
/// - `Ok(())` - The discounted price keeps at least 80% of the base price
/// - `Err(PolicyError::InvalidDiscount)` - Discount outside 0 to 100
/// - `Err(PolicyError::DiscountTooHigh)` - Discounted price falls below 80% of the base price
pub fn validate(discount: f64, base_price: f64) -> Result<(), PolicyError> {
    check_range(discount)?;

    // Same as `compute_price(discount, base_price) < base_price * MIN_RETAINED_RATIO`
    // for any positive base price.
    if retained_ratio(discount) < MIN_RETAINED_RATIO {
        return Err(PolicyError::DiscountTooHigh {
            discount,
            base_price,
        });
    }

    Ok(())
}

/// Computes the price of a dish once the discount is applied.
///
/// Performs no validation; stored discounts are trusted on the read path.
pub fn compute_price(discount: f64, base_price: f64) -> f64 {
    base_price * retained_ratio(discount)
}

fn retained_ratio(discount: f64) -> f64 {
    (100.0 - discount) / 100.0
}
