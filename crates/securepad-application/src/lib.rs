//! Application layer for SecurePad.
//!
//! Coordinates the domain types in `securepad-core` with the adapters in
//! `securepad-infrastructure`: password sign-in, the editing session and
//! debounced persistence.

pub mod app;
pub mod autosave;
pub mod editing;
pub mod session;

pub use app::PadApp;
pub use autosave::{AutoSaveController, AutoSaveSettings, LoadOutcome};
pub use editing::EditingSession;
pub use session::{AuthPhase, Session, SessionController};
