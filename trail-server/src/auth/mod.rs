//! Token-based access control.
//!
//! `POST /login` exchanges credentials for a signed token; every trail route
//! then requires that token as a bearer credential. No sessions are stored.

mod error;
mod middleware;
mod token;

pub use error::AuthError;
pub use middleware::require_token;
pub use token::{Claims, TokenIssuer};
