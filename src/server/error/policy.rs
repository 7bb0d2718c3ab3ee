use thiserror::Error;

/// Rejections raised by the discount policy.
///
/// Both variants surface to clients as 422 Unprocessable Entity with the
/// display message in the error envelope.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolicyError {
    /// The discounted price would fall below the minimum retained share of the
    /// dish base price.
    #[error("Added discount is too high")]
    DiscountTooHigh {
        /// Proposed discount percentage
        discount: f64,
        /// Base price of the discounted dish
        base_price: f64,
    },

    /// Discount percentage is negative, above 100 or not a finite number.
    #[error("Discount must be a percentage between 0 and 100, got {0}")]
    InvalidDiscount(f64),
}
