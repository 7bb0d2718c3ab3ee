pub use super::discount_detail::Entity as DiscountDetail;
pub use super::dish::Entity as Dish;
pub use super::order::Entity as Order;
