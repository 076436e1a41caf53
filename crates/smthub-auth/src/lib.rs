//! # smthub-auth
//!
//! Authentication building blocks for SMT Hub: the JWT token codec,
//! Argon2id password hashing, and the principal loader that turns a
//! username into an authenticated identity with its authority set.

pub mod jwt;
pub mod password;
pub mod principal;

pub use jwt::{Claims, IssuedToken, TokenDecoder, TokenEncoder};
pub use password::PasswordHasher;
pub use principal::{Principal, PrincipalLoader};
