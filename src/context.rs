//! Application Context
//!
//! The service client and the log history shared with every page via the
//! Leptos Context API.

use leptos::prelude::*;
use rolling_logger::RollingLogger;

use crate::api::HttpTodoService;
use crate::config::ServiceConfig;

/// Build the service client and make it available to descendants
pub fn provide_todo_service(config: ServiceConfig) {
    log::debug!("[APP] todo service at {}", config.base_url);
    provide_context(HttpTodoService::new(config));
}

/// Get the service client from context
pub fn use_todo_service() -> HttpTodoService {
    expect_context::<HttpTodoService>()
}

/// Read access to the buffered diagnostics of the global logger
#[derive(Clone, Copy)]
pub struct LogHistory(&'static RollingLogger);

impl LogHistory {
    pub fn new(logger: &'static RollingLogger) -> Self {
        Self(logger)
    }

    /// Buffered lines, newest first
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.0.recent();
        lines.reverse();
        lines
    }

    pub fn clear(&self) {
        self.0.clear();
    }
}

pub fn provide_log_history(logger: &'static RollingLogger) {
    provide_context(LogHistory::new(logger));
}

/// `None` when no rolling logger was installed
pub fn use_log_history() -> Option<LogHistory> {
    use_context::<LogHistory>()
}
