pub mod signup_handler;

pub use signup_handler::{__path_sign_up, sign_up};
