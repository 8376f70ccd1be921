//! SeaORM implementation of ProductRepository

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};

use crate::domain::{DomainError, Page, Pageable, Product, ProductCategory, ProductRepository};
use crate::models::product::{self, ActiveModel, Column, Entity as ProductEntity};
use crate::models::product_category::{self, Entity as ProductCategoryEntity};

/// SeaORM-based implementation of ProductRepository
///
/// Borrows its connection so the same repository type runs against the pool
/// or inside a `DatabaseTransaction`.
pub struct SeaOrmProductRepository<'a, C> {
    db: &'a C,
}

impl<'a, C> SeaOrmProductRepository<'a, C>
where
    C: ConnectionTrait,
{
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }
}

fn with_category(
    (model, category): (product::Model, Option<product_category::Model>),
) -> Result<Product, DomainError> {
    let mut product = Product::try_from(model)?;
    product.product_category = category.map(ProductCategory::from);
    Ok(product)
}

#[async_trait]
impl<'a, C> ProductRepository for SeaOrmProductRepository<'a, C>
where
    C: ConnectionTrait + Send + Sync,
{
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError> {
        ProductEntity::find_by_id(id)
            .one(self.db)
            .await?
            .map(Product::try_from)
            .transpose()
    }

    async fn find_one_with_eager_relationships(
        &self,
        id: i64,
    ) -> Result<Option<Product>, DomainError> {
        ProductEntity::find_by_id(id)
            .find_also_related(ProductCategoryEntity)
            .one(self.db)
            .await?
            .map(with_category)
            .transpose()
    }

    async fn find_all_with_eager_relationships(&self) -> Result<Vec<Product>, DomainError> {
        ProductEntity::find()
            .find_also_related(ProductCategoryEntity)
            .distinct()
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(with_category)
            .collect()
    }

    async fn find_page_with_eager_relationships(
        &self,
        pageable: Pageable,
    ) -> Result<Page<Product>, DomainError> {
        let pageable = pageable.clamped();
        let rows = ProductEntity::find()
            .find_also_related(ProductCategoryEntity)
            .distinct()
            .order_by_asc(Column::Id)
            .offset(pageable.offset())
            .limit(pageable.size)
            .all(self.db)
            .await?;

        // Count distinct product ids, matching the DISTINCT row set above
        let total = ProductEntity::find()
            .select_only()
            .column(Column::Id)
            .distinct()
            .count(self.db)
            .await?;

        let content = rows
            .into_iter()
            .map(with_category)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(content, pageable, total))
    }

    async fn find_all_by_active(&self, is_active: bool) -> Result<Vec<Product>, DomainError> {
        ProductEntity::find()
            .filter(Column::IsActive.eq(is_active))
            .order_by_asc(Column::Id)
            .all(self.db)
            .await?
            .into_iter()
            .map(Product::try_from)
            .collect()
    }

    async fn find_page(&self, pageable: Pageable) -> Result<Page<Product>, DomainError> {
        let pageable = pageable.clamped();
        let models = ProductEntity::find()
            .order_by_asc(Column::Id)
            .offset(pageable.offset())
            .limit(pageable.size)
            .all(self.db)
            .await?;

        let total = ProductEntity::find().count(self.db).await?;

        let content = models
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page::new(content, pageable, total))
    }

    async fn save(&self, product: Product) -> Result<Product, DomainError> {
        let stored = match product.id {
            Some(id) => ProductEntity::find_by_id(id).one(self.db).await?.is_some(),
            None => false,
        };

        let active: ActiveModel = product.into();
        let model = if stored {
            active.update(self.db).await?
        } else {
            active.insert(self.db).await?
        };

        self.find_one_with_eager_relationships(model.id)
            .await?
            .ok_or_else(|| {
                DomainError::Internal(format!("Product {} vanished after save", model.id))
            })
    }

    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let result = ProductEntity::delete_by_id(id).exec(self.db).await?;

        if result.rows_affected == 0 {
            tracing::debug!("No Product row to delete for id {}", id);
        }

        Ok(())
    }
}
