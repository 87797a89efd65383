//! Authentication library for the summary service
//!
//! Provides the security-sensitive building blocks behind the HTTP layer:
//! - Password hashing and verification (Argon2id, salted PHC strings)
//! - Signed bearer tokens carrying identity claims (JWT, HS256)
//! - An `Authenticator` coordinating both for the login flow
//!
//! The signing secret and token lifetime are injected at construction, never
//! read from ambient state, so every piece is testable in isolation.
//!
//! # Examples
//!
//! ```
//! use auth::{Authenticator, Claims};
//! use uuid::Uuid;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash the password for storage
//! let hash = auth.hash_password("secret123").unwrap();
//!
//! // Login: verify the password and mint a token
//! let claims = Claims::for_login("a@x.com", Uuid::new_v4(), 30);
//! let result = auth.authenticate("secret123", &hash, &claims).unwrap();
//!
//! // Authenticated request: validate the presented token
//! let decoded: Claims = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(decoded.sub, "a@x.com");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
