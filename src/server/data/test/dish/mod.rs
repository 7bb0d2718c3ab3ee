use crate::server::{
    data::dish::{DishRepository, DishStore},
    error::AppError,
    model::dish::{CreateDishParam, UpdateDishParam},
};
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_id;
mod list;
mod update;
