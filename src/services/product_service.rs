//! Product Service - Business logic on top of the product and order item repositories
//!
//! Every write runs in its own transaction: the lookup, the merge and the
//! final save (or the order item check and the delete) see one consistent
//! snapshot. Reads go straight to the pooled connection.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::domain::{
    DomainError, OrderItemRepository, Page, Pageable, Product, ProductPatch, ProductRepository,
};
use crate::infrastructure::{SeaOrmOrderItemRepository, SeaOrmProductRepository};

/// What `ProductService::delete` did with the product
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// No order item referenced the product; its row is gone
    Removed,
    /// Order items still reference the product; it was marked inactive
    Disabled,
}

#[derive(Clone)]
pub struct ProductService {
    db: DatabaseConnection,
}

impl ProductService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Save a product, inserting it when it has no stored row yet
    pub async fn save(&self, product: Product) -> Result<Product, DomainError> {
        tracing::debug!("Request to save Product : {:?} ({})", product.id, product.name);

        let txn = self.db.begin().await?;
        let saved = SeaOrmProductRepository::new(&txn).save(product).await?;
        txn.commit().await?;

        Ok(saved)
    }

    /// Update a product. Same behaviour as `save`.
    pub async fn update(&self, product: Product) -> Result<Product, DomainError> {
        tracing::debug!("Request to update Product : {:?} ({})", product.id, product.name);

        let txn = self.db.begin().await?;
        let saved = SeaOrmProductRepository::new(&txn).save(product).await?;
        txn.commit().await?;

        Ok(saved)
    }

    /// Merge the fields present in `patch` onto the stored product.
    ///
    /// Returns `Ok(None)` when no product has `patch.id`.
    pub async fn partial_update(
        &self,
        patch: ProductPatch,
    ) -> Result<Option<Product>, DomainError> {
        tracing::debug!("Request to partially update Product : {}", patch.id);

        let txn = self.db.begin().await?;
        let updated = merge_patch(&SeaOrmProductRepository::new(&txn), patch).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Change only the active flag of the stored product.
    ///
    /// Returns `Ok(None)` when no product has `patch.id`.
    pub async fn disable_product(
        &self,
        patch: ProductPatch,
    ) -> Result<Option<Product>, DomainError> {
        tracing::debug!(
            "Request to disable Product : {} (is_active={:?})",
            patch.id,
            patch.is_active
        );

        let txn = self.db.begin().await?;
        let updated = set_active_flag(&SeaOrmProductRepository::new(&txn), &patch).await?;
        txn.commit().await?;

        Ok(updated)
    }

    /// Page through products without loading their categories
    pub async fn find_all(&self, pageable: Pageable) -> Result<Page<Product>, DomainError> {
        tracing::debug!(
            "Request to get all Products : page {} size {}",
            pageable.page,
            pageable.size
        );
        SeaOrmProductRepository::new(&self.db).find_page(pageable).await
    }

    /// Page through products with their categories
    pub async fn find_all_with_eager_relationships(
        &self,
        pageable: Pageable,
    ) -> Result<Page<Product>, DomainError> {
        tracing::debug!(
            "Request to get all Products with categories : page {} size {}",
            pageable.page,
            pageable.size
        );
        SeaOrmProductRepository::new(&self.db)
            .find_page_with_eager_relationships(pageable)
            .await
    }

    /// Every product with its category, unpaged
    pub async fn find_all_eager(&self) -> Result<Vec<Product>, DomainError> {
        tracing::debug!("Request to list every Product with categories");
        SeaOrmProductRepository::new(&self.db)
            .find_all_with_eager_relationships()
            .await
    }

    /// Products that are (or are not) available for new orders
    pub async fn find_all_by_active(&self, is_active: bool) -> Result<Vec<Product>, DomainError> {
        tracing::debug!("Request to get Products with is_active={}", is_active);
        SeaOrmProductRepository::new(&self.db)
            .find_all_by_active(is_active)
            .await
    }

    /// Get one product with its category
    pub async fn find_one(&self, id: i64) -> Result<Option<Product>, DomainError> {
        tracing::debug!("Request to get Product : {}", id);
        SeaOrmProductRepository::new(&self.db)
            .find_one_with_eager_relationships(id)
            .await
    }

    /// Delete a product unless order items reference it, in which case it is
    /// disabled in place. A missing id is treated as already removed.
    pub async fn delete(&self, id: i64) -> Result<DeleteOutcome, DomainError> {
        tracing::debug!("Request to delete Product : {}", id);

        let txn = self.db.begin().await?;
        let outcome = delete_or_disable(
            &SeaOrmProductRepository::new(&txn),
            &SeaOrmOrderItemRepository::new(&txn),
            id,
        )
        .await?;
        txn.commit().await?;

        Ok(outcome)
    }
}

// The existing record is loaded with its category so saving it back keeps the link.
async fn merge_patch(
    products: &dyn ProductRepository,
    patch: ProductPatch,
) -> Result<Option<Product>, DomainError> {
    let Some(mut existing) = products.find_one_with_eager_relationships(patch.id).await? else {
        return Ok(None);
    };

    patch.apply(&mut existing);
    products.save(existing).await.map(Some)
}

async fn set_active_flag(
    products: &dyn ProductRepository,
    patch: &ProductPatch,
) -> Result<Option<Product>, DomainError> {
    let Some(mut existing) = products.find_one_with_eager_relationships(patch.id).await? else {
        return Ok(None);
    };

    patch.apply_active_flag(&mut existing);
    products.save(existing).await.map(Some)
}

async fn delete_or_disable(
    products: &dyn ProductRepository,
    order_items: &dyn OrderItemRepository,
    id: i64,
) -> Result<DeleteOutcome, DomainError> {
    let Some(order_item) = order_items.find_one_by_product_id(id).await? else {
        products.delete_by_id(id).await?;
        return Ok(DeleteOutcome::Removed);
    };

    if let Some(mut existing) = products.find_one_with_eager_relationships(id).await? {
        existing.is_active = false;
        products.save(existing).await?;
    }
    tracing::info!(
        "Product {} is referenced by order item {}, disabled instead of deleted",
        id,
        order_item.id
    );

    Ok(DeleteOutcome::Disabled)
}
