//! JWT claim structure for access tokens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: Identity of the caller (subject)
/// - `name`: Display name of the caller
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// Caller identity (subject claim)
    pub sub: String,
    /// Caller display name
    #[serde(default)]
    pub name: String,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
