//! Infrastructure layer - Framework implementations
//!
//! This layer contains:
//! - Database connection and migrations (db)
//! - Configuration loading (config)
//! - Demo data (seed)
//! - Repository implementations (repositories)

pub mod config;
pub mod db;
pub mod repositories;
pub mod seed;

pub use repositories::*;
