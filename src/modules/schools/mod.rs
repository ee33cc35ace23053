pub mod controller;
pub mod model;
pub mod repository;
pub mod router;
pub mod service;

pub use model::*;
pub use repository::{PgSchoolRepository, SchoolRepository};
pub use router::init_schools_router;
pub use service::{SchoolService, SchoolServiceImpl};
