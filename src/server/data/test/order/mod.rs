use crate::server::{
    data::order::{OrderRepository, OrderStore},
    error::AppError,
    model::order::{CreateOrderParam, UpdateOrderParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod list;
mod update;
