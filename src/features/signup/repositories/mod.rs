mod account_repository;
mod error_log_repository;

pub use account_repository::PgAccountRepository;
pub use error_log_repository::PgErrorLogRepository;
