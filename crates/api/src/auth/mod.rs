//! Authentication primitives.
//!
//! - [`jwt`] -- HS256 access-token validation (and generation, used by
//!   the token issuer and tests).

pub mod jwt;
