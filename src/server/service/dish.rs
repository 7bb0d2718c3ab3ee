use sea_orm::DatabaseConnection;

use crate::server::{
    data::dish::{DishRepository, DishStore},
    error::{AppError, EntityKind},
    model::dish::{CreateDishParam, Dish, UpdateDishParam},
};

pub struct DishService<D> {
    dishes: D,
}

impl<'a> DishService<DishRepository<'a>> {
    pub fn from_db(db: &'a DatabaseConnection) -> Self {
        Self::new(DishRepository::new(db))
    }
}

impl<D: DishStore> DishService<D> {
    pub fn new(dishes: D) -> Self {
        Self { dishes }
    }

    /// Validates and creates a new dish
    pub async fn create(&self, param: CreateDishParam) -> Result<Dish, AppError> {
        param.validate()?;

        let dish = self.dishes.create(param).await?;
        tracing::debug!(dish_id = dish.id, "created dish");

        Ok(dish)
    }

    /// Gets all dishes
    pub async fn get_all(&self) -> Result<Vec<Dish>, AppError> {
        self.dishes.list().await
    }

    /// Gets a dish by ID, failing with `RecordNotFound` if it does not exist
    pub async fn get_by_id(&self, id: i32) -> Result<Dish, AppError> {
        self.dishes
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(EntityKind::Dish, id))
    }

    /// Validates and applies a partial update to a dish
    pub async fn update(&self, param: UpdateDishParam) -> Result<Dish, AppError> {
        param.validate()?;

        self.dishes.update(param).await
    }

    /// Deletes a dish and its discount lines
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        self.dishes.delete(id).await?;
        tracing::debug!(dish_id = id, "deleted dish");

        Ok(())
    }
}
