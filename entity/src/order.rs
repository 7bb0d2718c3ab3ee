use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub table_number: i32,
    pub final_price: f64,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::discount_detail::Entity")]
    DiscountDetail,
}

impl Related<super::discount_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiscountDetail.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
