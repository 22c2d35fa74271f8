pub mod config_service;
pub mod file_document_store;
pub mod in_memory_document_store;
pub mod local_identity_provider;
pub mod paths;
pub mod storage;

pub use crate::config_service::ConfigService;
pub use crate::file_document_store::FileDocumentStore;
pub use crate::in_memory_document_store::InMemoryDocumentStore;
pub use crate::local_identity_provider::LocalIdentityProvider;
pub use crate::paths::{PadPaths, PathError};
