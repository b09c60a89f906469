use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};

use crate::core::extractor::AppJson;
use crate::features::signup::dtos::{AccountResponseDto, SignUpRequestDto};
use crate::features::signup::models::Account;
use crate::features::signup::SharedSignUpController;
use crate::shared::envelope::{EnvelopeBody, ResponseEnvelope};
use crate::shared::types::ApiResponse;

/// Register a new account
#[utoipa::path(
    post,
    path = "/api/signup",
    request_body = SignUpRequestDto,
    responses(
        (status = 200, description = "Account registered successfully", body = ApiResponse<AccountResponseDto>),
        (status = 400, description = "Missing or invalid param"),
        (status = 500, description = "Internal server error")
    ),
    tag = "signup"
)]
pub async fn sign_up(
    State(controller): State<SharedSignUpController>,
    AppJson(dto): AppJson<SignUpRequestDto>,
) -> Response {
    let envelope = controller.handle(dto.into()).await;
    envelope_to_response(envelope)
}

fn envelope_to_response(envelope: ResponseEnvelope<Account>) -> Response {
    let status = envelope.status_code();

    match envelope.into_body() {
        EnvelopeBody::Data(account) => (
            status,
            Json(ApiResponse::success(
                Some(AccountResponseDto::from(account)),
                None,
            )),
        )
            .into_response(),
        EnvelopeBody::Error(error) => {
            let message = error.public_message();
            let errors = error.is_client_error().then(|| vec![message.clone()]);
            (
                status,
                Json(ApiResponse::<()>::error(Some(message), errors)),
            )
                .into_response()
        }
    }
}
