use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, Product, Size};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    /// One of `S`, `M`, `L`, `XL`, `XXL`
    pub size: String,
    pub image: Option<Vec<u8>>,
    pub image_content_type: Option<String>,
    pub annotation: String,
    pub is_active: bool,
    pub product_category_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_category::Entity",
        from = "Column::ProductCategoryId",
        to = "super::product_category::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    ProductCategory,
    #[sea_orm(has_many = "super::order_item::Entity")]
    OrderItems,
}

impl Related<super::product_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductCategory.def()
    }
}

impl Related<super::order_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Product {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let size = model.size.parse::<Size>().map_err(|_| {
            DomainError::Internal(format!(
                "Product {} has unknown size '{}'",
                model.id, model.size
            ))
        })?;

        Ok(Self {
            id: Some(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            size,
            image: model.image,
            image_content_type: model.image_content_type,
            annotation: model.annotation,
            is_active: model.is_active,
            product_category: None,
        })
    }
}

impl From<Product> for ActiveModel {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.map_or(NotSet, Set),
            name: Set(product.name),
            description: Set(product.description),
            price: Set(product.price),
            size: Set(product.size.as_str().to_owned()),
            image: Set(product.image),
            image_content_type: Set(product.image_content_type),
            annotation: Set(product.annotation),
            is_active: Set(product.is_active),
            product_category_id: Set(product.product_category.map(|c| c.id)),
        }
    }
}
