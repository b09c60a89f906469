use utoipa::{Modify, OpenApi};

use crate::features::signup::{dtos as signup_dtos, handlers as signup_handlers};
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Signup (public)
        signup_handlers::sign_up,
    ),
    components(
        schemas(
            signup_dtos::SignUpRequestDto,
            signup_dtos::AccountResponseDto,
            ApiResponse<signup_dtos::AccountResponseDto>,
        )
    ),
    tags(
        (name = "signup", description = "Account registration (public)"),
    ),
    info(
        title = "Sign-up API",
        version = "0.1.0",
        description = "Account registration service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
