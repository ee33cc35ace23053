use std::sync::Arc;

use schoolhouse_config::{CorsConfig, JwtConfig};
use schoolhouse_db::PgPool;

use crate::modules::schools::{PgSchoolRepository, SchoolRepository, SchoolService, SchoolServiceImpl};

#[derive(Clone)]
pub struct AppState {
    pub schools: Arc<dyn SchoolService>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Wires the school service on top of `repo`.
    pub fn new(
        repo: Arc<dyn SchoolRepository>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            schools: Arc::new(SchoolServiceImpl::new(repo)),
            jwt_config,
            cors_config,
        }
    }
}

pub fn init_app_state(db: PgPool) -> AppState {
    AppState::new(
        Arc::new(PgSchoolRepository::new(db)),
        JwtConfig::from_env(),
        CorsConfig::from_env(),
    )
}
