use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A row of the `school` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct School {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The externally visible shape of a school.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SchoolResponse {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<School> for SchoolResponse {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
            created_at: school.created_at,
            updated_at: school.updated_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateSchoolRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 128,
        message = "name is required and must be at most 128 characters"
    ))]
    #[schema(min_length = 1, max_length = 128)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSchoolRequest {
    #[serde(default)]
    #[validate(length(
        min = 1,
        max = 128,
        message = "name is required and must be at most 128 characters"
    ))]
    #[schema(min_length = 1, max_length = 128)]
    pub name: String,
}
