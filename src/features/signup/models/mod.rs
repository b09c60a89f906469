mod account;
mod registration_request;

pub use account::{Account, AccountRow, AddAccountModel};
pub use registration_request::RegistrationRequest;
