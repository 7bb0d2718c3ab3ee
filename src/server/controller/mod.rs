//! HTTP request handlers.
//!
//! Controllers decode the request, convert DTOs into parameter models, call the
//! matching service and convert the resulting domain model back into a DTO.
//! Body and path rejections are turned into `AppError` so every failure uses the
//! `{"Error": ...}` envelope.

pub mod discount;
pub mod dish;
pub mod order;
