//! Core domain logic for PitchFlow.
//! This crate is the single source of truth for business invariants.

pub mod config;
pub mod db;
pub mod fallback;
pub mod fixtures;
pub mod listing;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use config::{AppConfig, ConfigError};
pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use fallback::or_fallback;
pub use listing::{ListingCriteria, ListingPage, ListingView, PagePreset, PagingPolicy, SortKey};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::identity::{DemoUser, Role};
pub use repo::{RepoError, RepoResult};
pub use session::{guard, landing_after_sign_in, Route, RouteDecision, SessionStore};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
