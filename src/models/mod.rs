pub mod order_item;
pub mod product;
pub mod product_category;
