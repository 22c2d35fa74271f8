//! Pad document domain module.
//!
//! # Module Structure
//!
//! - `model`: Stored document (`PadDocument`) and write patches (`DocumentPatch`)
//! - `repository`: Store trait (`DocumentStore`) implemented by infrastructure adapters

mod model;
mod repository;

pub use model::{DocumentPatch, PadDocument, SetOptions, Timestamp};
pub use repository::DocumentStore;
