//! Domain layer - Pure business abstractions
//!
//! This layer contains NO framework dependencies beyond the `DbErr` conversion.
//! Only entity types, paging primitives, trait definitions and domain error types.

pub mod errors;
pub mod paging;
pub mod product;
pub mod repositories;

pub use errors::DomainError;
pub use paging::{Page, Pageable};
pub use product::{OrderItem, Product, ProductCategory, ProductPatch, Size};
pub use repositories::*;
