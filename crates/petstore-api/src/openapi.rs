//! # OpenAPI Specification Assembly
//!
//! Assembles the utoipa-documented pet routes into a single OpenAPI spec,
//! served at `/openapi.json`. The security schemes (`api_key`,
//! `petstore_auth`) mirror the authorization metadata the sample
//! documents — the middleware itself enforces only the static bearer token.

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{
    ApiKey, ApiKeyValue, Flow, Implicit, OAuth2, Scopes, SecurityScheme,
};
use utoipa::{Modify, OpenApi};

use crate::state::AppState;

/// Assembled OpenAPI spec for the entire API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Petstore API",
        version = "0.1.0",
        description = "A demonstration CRUD API over an in-memory pet repository.",
        license(name = "Apache-2.0")
    ),
    paths(
        crate::routes::pets::get_pet_by_id,
        crate::routes::pets::add_pet,
        crate::routes::pets::update_pet,
        crate::routes::pets::find_pets_by_status,
        crate::routes::pets::find_pets_by_tags,
    ),
    components(schemas(
        petstore_core::Pet,
        petstore_core::PetId,
        petstore_core::PetStatus,
        petstore_core::Tag,
        crate::error::ErrorBody,
        crate::error::ErrorDetail,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "pet", description = "Operations about pets"),
    )
)]
pub struct ApiDoc;

/// Registers the `api_key` and `petstore_auth` security schemes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_key",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("api_key"))),
        );
        components.add_security_scheme(
            "petstore_auth",
            SecurityScheme::OAuth2(OAuth2::new([Flow::Implicit(Implicit::new(
                "https://petstore.swagger.io/oauth/authorize",
                Scopes::from_iter([
                    ("write:pets", "modify pets in your account"),
                    ("read:pets", "read your pets"),
                ]),
            ))])),
        );
    }
}

/// Build the OpenAPI router.
///
/// Serves the OpenAPI JSON spec at `/openapi.json`.
pub fn router() -> Router<AppState> {
    Router::new().route("/openapi.json", get(openapi_json))
}

/// GET /openapi.json — Return the generated OpenAPI specification.
async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_contains_every_pet_route() {
        let spec = ApiDoc::openapi();
        let paths = &spec.paths.paths;
        for expected in [
            "/api/pet/{petId}",
            "/api/pet",
            "/api/pet/findByStatus",
            "/api/pet/findByTags",
        ] {
            assert!(paths.contains_key(expected), "missing path: {expected}");
        }
    }

    #[test]
    fn spec_registers_security_schemes() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("components present");
        assert!(components.security_schemes.contains_key("api_key"));
        assert!(components.security_schemes.contains_key("petstore_auth"));
    }

    #[test]
    fn spec_registers_pet_schema() {
        let spec = ApiDoc::openapi();
        let components = spec.components.expect("components present");
        assert!(components.schemas.contains_key("Pet"));
        assert!(components.schemas.contains_key("PetStatus"));
    }
}
