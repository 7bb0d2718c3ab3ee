//! Data transfer objects shared across the HTTP boundary.
//!
//! Field names follow the established wire shape: PascalCase keys with `ID`-style
//! acronyms (`ID`, `OrderID`, `DishID`).

pub mod api;
pub mod discount;
pub mod dish;
pub mod order;
