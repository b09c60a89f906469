use axum::{routing::post, Router};

use crate::features::signup::handlers;
use crate::features::signup::SharedSignUpController;

/// Create routes for the signup feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(controller: SharedSignUpController) -> Router {
    Router::new()
        .route("/api/signup", post(handlers::sign_up))
        .with_state(controller)
}
