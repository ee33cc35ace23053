//! Middleware and extractors for cross-cutting request concerns.
//!
//! # Modules
//!
//! - [`auth`]: Bearer token authentication extractor
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` extractor validates the JWT and extracts claims
//! 3. Handler executes if the token is valid, otherwise the request fails with 401
//!
//! Only handlers that list `AuthUser` among their arguments are protected,
//! which keeps read routes public.
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::AuthUser;
//!
//! async fn create_thing(
//!     _auth_user: AuthUser,
//!     Json(dto): Json<CreateThing>,
//! ) -> impl IntoResponse {
//!     // Only executes with a valid token
//! }
//! ```

pub mod auth;
