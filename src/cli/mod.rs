//! Administrative helpers backing the `schoolhouse-cli` binary.

use fake::Fake;
use fake::faker::address::en::CityName;
use tracing::info;

use schoolhouse_core::AppError;

use crate::modules::schools::{CreateSchoolRequest, SchoolResponse, SchoolService};

/// Generates `count` school names from fake city names.
pub fn generate_school_names(count: usize) -> Vec<String> {
    (0..count)
        .map(|_| {
            let city: String = CityName().fake();
            format!("{} High School", city)
        })
        .collect()
}

/// Creates `count` fake schools through the service, so ids and timestamps
/// follow the same rules as API-created schools.
pub async fn seed_schools(
    service: &dyn SchoolService,
    count: usize,
) -> Result<Vec<SchoolResponse>, AppError> {
    let mut created = Vec::with_capacity(count);

    for name in generate_school_names(count) {
        created.push(service.create(CreateSchoolRequest { name }).await?);
    }

    info!(count = created.len(), "Seeded schools");
    Ok(created)
}
