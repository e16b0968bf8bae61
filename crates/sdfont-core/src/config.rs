//! Runtime configuration for hosts embedding the sdfont crates.

use crate::logging;
use crate::profiling::{self, ProfilingBackend};

/// Process-wide settings applied once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `tracing-subscriber` filter directives. `None` defers to `RUST_LOG`
    /// and then [`logging::DEFAULT_FILTER`].
    pub log_filter: Option<String>,
    pub profiling: ProfilingMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_filter: None,
            profiling: ProfilingMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfilingMode {
    /// Profiling is disabled
    #[default]
    Off,
    /// Scopes are recorded in-process
    On,
    /// Scopes are recorded and served to 'puffin_viewer' over HTTP
    WithWebServer,
}

impl Config {
    pub fn with_log_filter(mut self, directives: impl Into<String>) -> Self {
        self.log_filter = Some(directives.into());
        self
    }

    pub fn with_profiling(mut self, mode: ProfilingMode) -> Self {
        self.profiling = mode;
        self
    }

    /// Install logging and start profiling as configured.
    pub fn apply(&self) {
        match &self.log_filter {
            Some(directives) => logging::init_with_filter(directives),
            None => logging::init(),
        }

        match self.profiling {
            ProfilingMode::Off => {}
            ProfilingMode::On => profiling::init_profiling(ProfilingBackend::Local),
            ProfilingMode::WithWebServer => profiling::init_profiling(ProfilingBackend::PuffinHttp),
        }
    }
}
