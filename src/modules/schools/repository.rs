//! Persistence access for schools.
//!
//! [`SchoolRepository`] is the only seam that touches the store. It never
//! invents identifiers or timestamps; the service hands it fully populated
//! records.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, error, instrument};

use schoolhouse_core::AppError;

use super::model::School;

#[async_trait]
pub trait SchoolRepository: Send + Sync {
    /// Returns the school with the given id, or a not-found error.
    async fn get(&self, id: &str) -> Result<School, AppError>;
    /// Returns the number of schools.
    async fn count(&self) -> Result<i64, AppError>;
    /// Returns schools ordered by id, skipping `offset` and returning at most `limit`.
    async fn query(&self, offset: i64, limit: i64) -> Result<Vec<School>, AppError>;
    /// Inserts a new school.
    async fn create(&self, school: &School) -> Result<(), AppError>;
    /// Overwrites the school with the same id. A missing row is not an error.
    async fn update(&self, school: &School) -> Result<(), AppError>;
    /// Removes the school with the given id, or fails with not-found.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

fn school_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("School not found"))
}

/// PostgreSQL-backed [`SchoolRepository`].
#[derive(Debug, Clone)]
pub struct PgSchoolRepository {
    db: PgPool,
}

impl PgSchoolRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SchoolRepository for PgSchoolRepository {
    #[instrument(skip(self), fields(school.id = %id, db.operation = "SELECT", db.table = "school"))]
    async fn get(&self, id: &str) -> Result<School, AppError> {
        sqlx::query_as::<_, School>(
            "SELECT id, name, created_at, updated_at FROM school WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!(school.id = %id, error = %e, "Database error fetching school");
            AppError::persistence(e)
        })?
        .ok_or_else(|| {
            debug!(school.id = %id, "School not found");
            school_not_found()
        })
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "school"))]
    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM school")
            .fetch_one(&self.db)
            .await
            .map_err(|e| {
                error!(error = %e, "Database error counting schools");
                AppError::persistence(e)
            })
    }

    #[instrument(skip(self), fields(db.operation = "SELECT", db.table = "school"))]
    async fn query(&self, offset: i64, limit: i64) -> Result<Vec<School>, AppError> {
        sqlx::query_as::<_, School>(
            "SELECT id, name, created_at, updated_at FROM school
             ORDER BY id
             LIMIT $1 OFFSET $2",
        )
        .bind(limit.max(0))
        .bind(offset.max(0))
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error querying schools");
            AppError::persistence(e)
        })
    }

    #[instrument(skip(self, school), fields(school.id = %school.id, db.operation = "INSERT", db.table = "school"))]
    async fn create(&self, school: &School) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO school (id, name, created_at, updated_at) VALUES ($1, $2, $3, $4)",
        )
        .bind(&school.id)
        .bind(&school.name)
        .bind(school.created_at)
        .bind(school.updated_at)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(school.id = %school.id, error = %e, "Database error creating school");
            AppError::persistence(e)
        })?;

        Ok(())
    }

    #[instrument(skip(self, school), fields(school.id = %school.id, db.operation = "UPDATE", db.table = "school"))]
    async fn update(&self, school: &School) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE school SET name = $2, created_at = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(&school.id)
        .bind(&school.name)
        .bind(school.created_at)
        .bind(school.updated_at)
        .execute(&self.db)
        .await
        .map_err(|e| {
            error!(school.id = %school.id, error = %e, "Database error updating school");
            AppError::persistence(e)
        })?;

        debug!(rows_affected = result.rows_affected(), "School updated");

        Ok(())
    }

    #[instrument(skip(self), fields(school.id = %id, db.operation = "DELETE", db.table = "school"))]
    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let school = self.get(id).await?;

        sqlx::query("DELETE FROM school WHERE id = $1")
            .bind(&school.id)
            .execute(&self.db)
            .await
            .map_err(|e| {
                error!(school.id = %id, error = %e, "Database error deleting school");
                AppError::persistence(e)
            })?;

        Ok(())
    }
}

/// In-memory [`SchoolRepository`] for tests.
#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::collections::BTreeMap;

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use schoolhouse_core::AppError;

    use super::{SchoolRepository, school_not_found};
    use crate::modules::schools::model::School;

    /// Keeps schools in a map ordered by id.
    ///
    /// Writes of a school whose name equals the configured failing name are
    /// rejected with a persistence error, which lets tests exercise the
    /// store-failure paths.
    #[derive(Debug, Default)]
    pub struct InMemorySchoolRepository {
        items: RwLock<BTreeMap<String, School>>,
        failing_name: Option<String>,
    }

    impl InMemorySchoolRepository {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_items(items: impl IntoIterator<Item = School>) -> Self {
            Self {
                items: RwLock::new(
                    items
                        .into_iter()
                        .map(|school| (school.id.clone(), school))
                        .collect(),
                ),
                failing_name: None,
            }
        }

        /// Makes `create` and `update` fail for schools named `name`.
        pub fn failing_on(mut self, name: impl Into<String>) -> Self {
            self.failing_name = Some(name.into());
            self
        }

        fn check_write(&self, school: &School) -> Result<(), AppError> {
            match &self.failing_name {
                Some(name) if *name == school.name => {
                    Err(AppError::persistence(anyhow::anyhow!("error crud")))
                }
                _ => Ok(()),
            }
        }
    }

    #[async_trait]
    impl SchoolRepository for InMemorySchoolRepository {
        async fn get(&self, id: &str) -> Result<School, AppError> {
            self.items
                .read()
                .await
                .get(id)
                .cloned()
                .ok_or_else(school_not_found)
        }

        async fn count(&self) -> Result<i64, AppError> {
            Ok(self.items.read().await.len() as i64)
        }

        async fn query(&self, offset: i64, limit: i64) -> Result<Vec<School>, AppError> {
            let offset = usize::try_from(offset).unwrap_or(0);
            let limit = usize::try_from(limit).unwrap_or(0);
            Ok(self
                .items
                .read()
                .await
                .values()
                .skip(offset)
                .take(limit)
                .cloned()
                .collect())
        }

        async fn create(&self, school: &School) -> Result<(), AppError> {
            self.check_write(school)?;
            let mut items = self.items.write().await;
            if items.contains_key(&school.id) {
                return Err(AppError::persistence(anyhow::anyhow!(
                    "duplicate key value violates unique constraint \"school_pkey\""
                )));
            }
            items.insert(school.id.clone(), school.clone());
            Ok(())
        }

        async fn update(&self, school: &School) -> Result<(), AppError> {
            self.check_write(school)?;
            if let Some(existing) = self.items.write().await.get_mut(&school.id) {
                *existing = school.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), AppError> {
            self.items
                .write()
                .await
                .remove(id)
                .map(|_| ())
                .ok_or_else(school_not_found)
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::mock::InMemorySchoolRepository;
    use super::*;

    fn school(id: &str, name: &str) -> School {
        let now = Utc::now();
        School {
            id: id.to_string(),
            name: name.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_in_memory_query_orders_by_id_and_windows() {
        let repo = InMemorySchoolRepository::with_items(vec![
            school("c", "third"),
            school("a", "first"),
            school("b", "second"),
        ]);

        let all = repo.query(0, 10).await.unwrap();
        let ids: Vec<_> = all.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let window = repo.query(1, 1).await.unwrap();
        assert_eq!(window.len(), 1);
        assert_eq!(window[0].id, "b");

        assert!(repo.query(5, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_in_memory_create_rejects_duplicate_id() {
        let repo = InMemorySchoolRepository::new();
        repo.create(&school("test1", "school1")).await.unwrap();

        let err = repo.create(&school("test1", "again")).await.unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_in_memory_failing_name() {
        let repo = InMemorySchoolRepository::new().failing_on("error");

        let err = repo.create(&school("x", "error")).await.unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(err.error.to_string(), "error crud");
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_in_memory_delete_twice() {
        let repo = InMemorySchoolRepository::with_items(vec![school("test1", "school1")]);

        repo.delete("test1").await.unwrap();
        assert!(repo.get("test1").await.unwrap_err().is_not_found());
        assert!(repo.delete("test1").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_in_memory_update_missing_row_is_noop() {
        let repo = InMemorySchoolRepository::new();
        repo.update(&school("ghost", "nobody")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
