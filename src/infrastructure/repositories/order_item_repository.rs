//! SeaORM implementation of OrderItemRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{DomainError, OrderItem, OrderItemRepository};
use crate::models::order_item::{Column, Entity as OrderItemEntity};

/// SeaORM-based implementation of OrderItemRepository
pub struct SeaOrmOrderItemRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> SeaOrmOrderItemRepository<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

#[async_trait]
impl<'a, C> OrderItemRepository for SeaOrmOrderItemRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_one_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Option<OrderItem>, DomainError> {
        let item = OrderItemEntity::find()
            .filter(Column::ProductId.eq(product_id))
            .order_by_asc(Column::Id)
            .one(self.db)
            .await?;

        Ok(item.map(OrderItem::from))
    }
}
