mod signup_dto;

pub use signup_dto::{AccountResponseDto, SignUpRequestDto};
