//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing validation and the discount pricing policy
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//!
//! Services are generic over the store traits of the data layer so they can be
//! exercised against mocks as well as the database repositories.

pub mod discount;
pub mod dish;
pub mod order;
