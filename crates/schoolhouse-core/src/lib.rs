//! # Schoolhouse Core
//!
//! Core types, errors, and utilities for the Schoolhouse API.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Application error type with an explicit error kind and HTTP response conversion
//! - [`pagination`]: Page/per-page pagination and the list response envelope
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_core::{AppError, Pages, PaginationParams};
//!
//! // Create an error
//! let error = AppError::not_found(anyhow::anyhow!("School not found"));
//! assert!(error.is_not_found());
//!
//! // Resolve pagination against a total count
//! let pages = PaginationParams::default().resolve(total);
//! let rows = repo.query(pages.offset(), pages.limit()).await?;
//! ```

pub mod errors;
pub mod pagination;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use pagination::{Pages, PaginationParams};
