//! Application logger gated by the build-mode flag.
//!
//! Each channel forwards to the matching `tracing` macro when the logger is
//! enabled and does nothing otherwise. Production deployments construct it
//! with `enabled = false`.

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Logger {
    enabled: bool,
}

impl Logger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Enabled in debug builds, silent in release builds.
    pub fn from_build() -> Self {
        Self::new(cfg!(debug_assertions))
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn info(&self, message: impl Display) {
        if self.enabled {
            tracing::info!("{}", message);
        }
    }

    pub fn warn(&self, message: impl Display) {
        if self.enabled {
            tracing::warn!("{}", message);
        }
    }

    pub fn error(&self, message: impl Display) {
        if self.enabled {
            tracing::error!("{}", message);
        }
    }

    pub fn debug(&self, message: impl Display) {
        if self.enabled {
            tracing::debug!("{}", message);
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::from_build()
    }
}
