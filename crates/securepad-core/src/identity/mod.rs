//! Identity domain module.
//!
//! The pad signs in anonymously; the identity is only a session handle and
//! says nothing about which pad the user opens.

mod model;
mod provider;

pub use model::SessionToken;
pub use provider::IdentityProvider;
