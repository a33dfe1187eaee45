// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runtime diagnostics reported to the host.
//!
//! The codec never prints. Every informational, warning or error condition
//! is handed to an injected [`MessageSink`]; hosts surface the reports in
//! their own logging or UI channel. The codec never depends on a sink's
//! return value or behavior.

use std::fmt;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Severity of a diagnostic report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// Expected absence, e.g. a payload without a type tag.
    Info,
    /// Malformed but recoverable input.
    Warning,
    /// Unexpected failure.
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Sink for diagnostic reports.
///
/// Implementations must be callable from multiple threads; the codec itself
/// is stateless and independent calls may run concurrently over one sink.
pub trait MessageSink: Send + Sync {
    fn report(&self, severity: Severity, message: &str);
}

/// Sink that forwards reports onto `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl MessageSink for TracingSink {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => tracing::info!(target: "portal", "{}", message),
            Severity::Warning => tracing::warn!(target: "portal", "{}", message),
            Severity::Error => tracing::error!(target: "portal", "{}", message),
        }
    }
}

/// Appendable sink that records every report for later inspection.
#[derive(Debug, Default)]
pub struct MemorySink {
    reports: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all reports in arrival order.
    pub fn reports(&self) -> Vec<(Severity, String)> {
        self.lock().clone()
    }

    /// Number of reports at the given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.lock().iter().filter(|(s, _)| *s == severity).count()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(Severity, String)>> {
        // A panicked reporter must not silence later reports
        self.reports.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl MessageSink for MemorySink {
    fn report(&self, severity: Severity, message: &str) {
        self.lock().push((severity, message.to_string()));
    }
}
