use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::signup::models::{Account, RegistrationRequest};

/// Request DTO for account sign-up
///
/// Every field is optional on the wire; presence is checked by the
/// registration validator so that missing fields get a precise error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequestDto {
    #[schema(example = "Kauã")]
    pub name: Option<String>,

    #[schema(example = "kaua@gmail.com")]
    pub email: Option<String>,

    pub password: Option<String>,

    /// Must equal `password`
    pub password_confirmation: Option<String>,
}

impl From<SignUpRequestDto> for RegistrationRequest {
    fn from(dto: SignUpRequestDto) -> Self {
        Self {
            name: dto.name.unwrap_or_default(),
            email: dto.email.unwrap_or_default(),
            password: dto.password.unwrap_or_default(),
            password_confirmation: dto.password_confirmation.unwrap_or_default(),
        }
    }
}

/// Response DTO for a registered account (the credential hash is never exposed)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResponseDto {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<Account> for AccountResponseDto {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            name: account.name,
            email: account.email,
        }
    }
}
