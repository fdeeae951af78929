// ============================================================================
// Session Module
// Per-session client state with an explicit lifecycle
// ============================================================================

mod context;

pub use context::{Session, SessionContext};
