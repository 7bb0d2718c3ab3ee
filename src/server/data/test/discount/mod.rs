use crate::server::{
    data::discount::{map_insert_err, map_update_err, DiscountRepository, DiscountStore},
    error::AppError,
    model::discount::{CreateDiscountParam, UpdateDiscountParam},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_with_parents;
mod update;
