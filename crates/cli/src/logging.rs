// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic logging to stderr.
//!
//! Silent by default. Set `ALTCASE_LOG` to a filter directive
//! (e.g. `ALTCASE_LOG=debug`) to see what the binaries are doing.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "ALTCASE_LOG";

/// Directive used when `ALTCASE_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let directives = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directives.as_deref());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse `directives`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn build_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
