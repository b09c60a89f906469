//! Account sign-up feature.
//!
//! Requests flow through [`FailureLoggingDecorator`] into
//! [`SignUpController`](controller::SignUpController), which validates the
//! input, then hashes the password and stores the account through
//! [`RegistrationService`](services::RegistrationService).
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/signup` | No | Register new account |
//!
//! [`FailureLoggingDecorator`]: crate::core::decorators::FailureLoggingDecorator

use std::sync::Arc;

pub mod clients;
pub mod controller;
pub mod dtos;
pub mod error;
pub mod factory;
pub mod handlers;
pub mod models;
pub mod ports;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod validator;

pub use factory::make_signup_controller;

use crate::shared::envelope::Controller;
use models::{Account, RegistrationRequest};

/// Controller mounted on the sign-up route, decorated or not
pub type SharedSignUpController =
    Arc<dyn Controller<Request = RegistrationRequest, Body = Account>>;
