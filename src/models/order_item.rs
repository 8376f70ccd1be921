use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::OrderItem;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "order_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub quantity: i32,
    pub total_price: f64,
    /// `available`, `out_of_stock` or `back_order`
    pub status: String,
    pub product_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product::Entity",
        from = "Column::ProductId",
        to = "super::product::Column::Id",
        on_update = "NoAction",
        on_delete = "Restrict"
    )]
    Product,
}

impl Related<super::product::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Product.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for OrderItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            quantity: model.quantity,
            total_price: model.total_price,
            status: model.status,
            product_id: model.product_id,
        }
    }
}
