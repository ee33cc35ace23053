use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use schoolhouse_core::errors::ErrorResponse;
use schoolhouse_core::{Pages, PaginationParams};

use crate::modules::schools::model::{CreateSchoolRequest, SchoolResponse, UpdateSchoolRequest};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::schools::controller::get_school,
        crate::modules::schools::controller::query_schools,
        crate::modules::schools::controller::create_school,
        crate::modules::schools::controller::update_school,
        crate::modules::schools::controller::delete_school,
    ),
    components(
        schemas(
            SchoolResponse,
            CreateSchoolRequest,
            UpdateSchoolRequest,
            Pages<SchoolResponse>,
            PaginationParams,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Schools", description = "School management endpoints")
    ),
    info(
        title = "Schoolhouse API",
        version = "0.1.0",
        description = "School records over HTTP. Reads are public, writes require a bearer JWT.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
