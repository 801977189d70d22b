//! Authentication utilities

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtService, TokenPair, TokenType};
pub use password::{validate_password_strength, PasswordService};
