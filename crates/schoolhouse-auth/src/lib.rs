//! # Schoolhouse Auth
//!
//! Authentication claims and JWT utilities for the Schoolhouse API.
//!
//! This crate provides:
//!
//! - [`claims`]: JWT claim structure carried by access tokens
//! - [`jwt`]: Token creation and verification utilities
//!
//! Mutating school endpoints require an access token in the
//! `Authorization: Bearer <token>` header; read endpoints are public.
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_auth::{create_access_token, verify_token};
//! use schoolhouse_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//!
//! let token = create_access_token("operator-1", "Operator", &config)?;
//! let claims = verify_token(&token, &config)?;
//! println!("Subject: {}", claims.sub);
//! ```

pub mod claims;
pub mod jwt;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use jwt::{create_access_token, verify_token};
