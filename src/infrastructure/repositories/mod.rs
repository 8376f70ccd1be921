//! Repository implementations using SeaORM

pub mod order_item_repository;
pub mod product_repository;

pub use order_item_repository::SeaOrmOrderItemRepository;
pub use product_repository::SeaOrmProductRepository;
