//! Process setup shared by every command.
//!
//! # Responsibility
//! - Resolve configuration, start file logging and open the database.
//! - Rehydrate the demo session and answer route guard questions.

use anyhow::{anyhow, bail, Context, Result};
use pitchflow_core::fixtures;
use pitchflow_core::model::startup::Startup;
use pitchflow_core::repo::startup_repo::{SqliteStartupRepository, StartupRepository};
use pitchflow_core::session::FileSessionStorage;
use pitchflow_core::{
    guard, init_logging, open_db, or_fallback, AppConfig, DemoUser, RepoResult, Route,
    RouteDecision, SessionStore,
};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub struct AppContext {
    pub config: AppConfig,
    pub conn: Connection,
    pub session: SessionStore<FileSessionStorage>,
}

impl AppContext {
    pub fn open(config_file: Option<&Path>) -> Result<Self> {
        let default_data_dir = default_data_dir()?;
        let config = AppConfig::load(config_file, &default_data_dir)
            .context("failed to load configuration")?;
        std::fs::create_dir_all(&config.data_dir).with_context(|| {
            format!(
                "failed to create data directory `{}`",
                config.data_dir.display()
            )
        })?;

        // Logging is best effort; commands still run without a log file.
        if let Err(err) = init_logging(&config.log_level, &config.effective_log_dir()) {
            eprintln!("warning: file logging disabled: {err}");
        }
        log::info!("event=cli_start module=cli status=ok");

        let conn = open_db(config.db_path()).with_context(|| {
            format!("failed to open database `{}`", config.db_path().display())
        })?;
        let session = SessionStore::rehydrate(FileSessionStorage::new(config.session_dir()));

        Ok(Self {
            config,
            conn,
            session,
        })
    }

    /// Returns the signed-in user when `route` renders for the session.
    pub fn authorize(&self, route: Route) -> Result<DemoUser> {
        match guard(self.session.current(), route) {
            RouteDecision::Render(_) => self
                .session
                .current()
                .cloned()
                .ok_or_else(|| anyhow!("sign in first")),
            RouteDecision::Redirect(target) => bail!(
                "`{}` is not available for this session (redirect to `{}`)",
                route.path(),
                target.path()
            ),
        }
    }

    /// Persisted records, or the bundled fixtures in demo mode when nothing
    /// is persisted or the read fails.
    pub fn with_demo_fallback<T>(
        &self,
        loaded: RepoResult<Vec<T>>,
        event: &'static str,
        bundled: fn() -> Vec<T>,
    ) -> Vec<T> {
        let records = or_fallback(loaded, event, Vec::new);
        if records.is_empty() && self.config.demo_mode {
            log::info!("event={event} module=cli status=fallback source=fixtures");
            return bundled();
        }
        records
    }

    pub fn startups(&self) -> RepoResult<SqliteStartupRepository<'_>> {
        SqliteStartupRepository::try_new(&self.conn)
    }

    /// The founder's persisted startup. Mutations need a real record.
    pub fn persisted_startup(&self, founder: &DemoUser) -> Result<Startup> {
        self.startups()?
            .find_by_founder(&founder.id)?
            .ok_or_else(|| anyhow!("no startup yet; run `pitchflow onboard <name>` first"))
    }

    /// The founder's startup for read-only pages; demo mode shows the
    /// bundled record until onboarding is done.
    pub fn startup_for_display(&self, founder: &DemoUser) -> Result<Startup> {
        let persisted = or_fallback(
            self.startups()
                .and_then(|repo| repo.find_by_founder(&founder.id)),
            "cli.founder.startup",
            || None,
        );
        match persisted {
            Some(startup) => Ok(startup),
            None if self.config.demo_mode => Ok(fixtures::demo_startup()),
            None => bail!("no startup yet; run `pitchflow onboard <name>` first"),
        }
    }
}

fn default_data_dir() -> Result<PathBuf> {
    dirs::data_local_dir()
        .map(|dir| dir.join("pitchflow"))
        .ok_or_else(|| anyhow!("cannot resolve a local data directory; set PITCHFLOW_DATA_DIR"))
}
