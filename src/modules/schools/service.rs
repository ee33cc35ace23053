use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use tracing::{debug, info, instrument};
use uuid::Uuid;
use validator::Validate;

use schoolhouse_core::AppError;

use crate::metrics;

use super::model::{CreateSchoolRequest, School, SchoolResponse, UpdateSchoolRequest};
use super::repository::SchoolRepository;

/// Current time at the microsecond precision PostgreSQL stores, so the view
/// returned from a write equals what a later read returns.
fn current_time() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Use-case logic for schools.
#[async_trait]
pub trait SchoolService: Send + Sync {
    async fn get(&self, id: &str) -> Result<SchoolResponse, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn query(&self, offset: i64, limit: i64) -> Result<Vec<SchoolResponse>, AppError>;
    async fn create(&self, request: CreateSchoolRequest) -> Result<SchoolResponse, AppError>;
    async fn update(
        &self,
        id: &str,
        request: UpdateSchoolRequest,
    ) -> Result<SchoolResponse, AppError>;
    async fn delete(&self, id: &str) -> Result<SchoolResponse, AppError>;
}

/// [`SchoolService`] on top of any [`SchoolRepository`].
#[derive(Clone)]
pub struct SchoolServiceImpl {
    repo: Arc<dyn SchoolRepository>,
}

impl SchoolServiceImpl {
    pub fn new(repo: Arc<dyn SchoolRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl SchoolService for SchoolServiceImpl {
    #[instrument(skip(self))]
    async fn get(&self, id: &str) -> Result<SchoolResponse, AppError> {
        let school = self.repo.get(id).await?;
        Ok(school.into())
    }

    #[instrument(skip(self))]
    async fn count(&self) -> Result<i64, AppError> {
        self.repo.count().await
    }

    #[instrument(skip(self))]
    async fn query(&self, offset: i64, limit: i64) -> Result<Vec<SchoolResponse>, AppError> {
        let schools = self.repo.query(offset, limit).await?;
        debug!(returned = schools.len(), "Schools fetched");
        Ok(schools.into_iter().map(SchoolResponse::from).collect())
    }

    #[instrument(skip(self, request), fields(school.name = %request.name))]
    async fn create(&self, request: CreateSchoolRequest) -> Result<SchoolResponse, AppError> {
        request.validate().map_err(AppError::validation)?;

        let id = Uuid::new_v4().to_string();
        let now = current_time();
        self.repo
            .create(&School {
                id: id.clone(),
                name: request.name,
                created_at: now,
                updated_at: now,
            })
            .await?;

        metrics::track_school_created();
        info!(school.id = %id, "School created");

        self.get(&id).await
    }

    #[instrument(skip(self, request), fields(school.name = %request.name))]
    async fn update(
        &self,
        id: &str,
        request: UpdateSchoolRequest,
    ) -> Result<SchoolResponse, AppError> {
        request.validate().map_err(AppError::validation)?;

        let mut school = self.repo.get(id).await?;
        school.name = request.name;
        school.updated_at = current_time();

        self.repo.update(&school).await?;

        metrics::track_school_updated();
        info!(school.id = %id, "School updated");

        Ok(school.into())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &str) -> Result<SchoolResponse, AppError> {
        let school = self.get(id).await?;
        self.repo.delete(id).await?;

        metrics::track_school_deleted();
        info!(school.id = %id, "School deleted");

        Ok(school)
    }
}
