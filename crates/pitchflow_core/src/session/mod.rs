//! Demo session state and route guarding.
//!
//! # Responsibility
//! - Hold at most one signed-in demo identity and persist it across runs.
//! - Decide, purely from session state, whether a route renders or redirects.
//!
//! # Invariants
//! - The store has exactly two states: `Anonymous` and `Authenticated`.
//! - Rehydration never fails; unreadable or malformed entries mean anonymous.
//! - Reads never touch storage after rehydration.

pub mod route;
pub mod storage;
pub mod store;

pub use route::{guard, landing_after_sign_in, Route, RouteDecision};
pub use storage::{
    FileSessionStorage, MemorySessionStorage, SessionStorage, SqliteSessionStorage, StorageError,
    StorageResult,
};
pub use store::{SessionState, SessionStore, SESSION_STORAGE_KEY};
