//! Services Layer
//!
//! Business rules for products on top of the repository traits.

pub mod product_service;

// Re-export for convenience
pub use product_service::{DeleteOutcome, ProductService};
