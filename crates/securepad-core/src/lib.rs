pub mod config;
pub mod document;
pub mod editor;
pub mod emoji;
pub mod error;
pub mod identity;
pub mod space;

// Re-export common error type
pub use error::PadError;
pub use space::{SpaceKey, derive_key};
