//! # haven-common
//!
//! Shared utilities including configuration, error handling, authentication,
//! mail, and telemetry.

pub mod auth;
pub mod config;
pub mod error;
pub mod mail;
pub mod telemetry;

// Re-export commonly used types at crate root
pub use auth::{validate_password_strength, Claims, JwtService, PasswordService, TokenPair, TokenType};
pub use config::{
    AppConfig, AppSettings, ConfigError, CorsConfig, DatabaseConfig, Environment, JwtConfig,
    MailConfig, RateLimitConfig, ServerConfig, SnowflakeConfig,
};
pub use error::{AppError, AppResult, ErrorResponse};
pub use mail::{
    password_reset_email, verification_email, MailMessage, MailSender, TracingMailSender,
};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig, TracingError};
