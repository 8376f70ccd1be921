//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;

use super::{DomainError, OrderItem, Page, Pageable, Product};

/// Repository trait for Product entity
///
/// The `*_with_eager_relationships` reads load the product category in the
/// same query. Products without a category are still returned.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Find a product by ID, without its category
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, DomainError>;

    /// Find a product by ID together with its category
    async fn find_one_with_eager_relationships(
        &self,
        id: i64,
    ) -> Result<Option<Product>, DomainError>;

    /// Find all distinct products together with their categories
    async fn find_all_with_eager_relationships(&self) -> Result<Vec<Product>, DomainError>;

    /// Page through distinct products together with their categories
    async fn find_page_with_eager_relationships(
        &self,
        pageable: Pageable,
    ) -> Result<Page<Product>, DomainError>;

    /// Find all products with the given active flag, without categories
    async fn find_all_by_active(&self, is_active: bool) -> Result<Vec<Product>, DomainError>;

    /// Page through products, without categories
    async fn find_page(&self, pageable: Pageable) -> Result<Page<Product>, DomainError>;

    /// Insert when the product has no stored row yet, update otherwise
    async fn save(&self, product: Product) -> Result<Product, DomainError>;

    /// Remove the product row unconditionally
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError>;
}

/// Repository trait for OrderItem entity
#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    /// Find any one order item referencing the product (lowest id first)
    async fn find_one_by_product_id(
        &self,
        product_id: i64,
    ) -> Result<Option<OrderItem>, DomainError>;
}
