//! Logging and tracing facilities for Ribbon.
//!
//! Ribbon uses the `tracing` crate for instrumentation and never installs a
//! subscriber itself. To see logs, install one in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("ribbon=debug,ribbon_core=warn")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Operations the adapter skips (unresolvable reuse identifiers, empty
//! inputs, dequeue misses) are reported as `warn` or `trace` events under the
//! [`targets`] below rather than as errors.

/// Span names used throughout Ribbon for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Batched incremental widget update (begin/end bracket).
    pub const BATCH_UPDATE: &str = "ribbon::batch_update";
    /// Full widget reload.
    pub const RELOAD: &str = "ribbon::reload";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core target.
    pub const CORE: &str = "ribbon_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "ribbon_core::signal";
    /// Thread affinity checks.
    pub const THREAD: &str = "ribbon_core::thread";
    /// List adapter target.
    pub const ADAPTER: &str = "ribbon::adapter";
    /// Reuse identifier registry target.
    pub const REGISTRY: &str = "ribbon::registry";
    /// Host widget calls.
    pub const WIDGET: &str = "ribbon::widget";
    /// List providers.
    pub const PROVIDER: &str = "ribbon::provider";
    /// Configuration loading.
    pub const CONFIG: &str = "ribbon::config";
}

/// A performance tracing span guard.
///
/// The span is entered on creation and exited when the guard is dropped, so
/// a subscriber with span timing sees how long the guarded operation took.
///
/// # Example
///
/// ```
/// use ribbon_core::logging::{span_names, PerfSpan};
///
/// {
///     let _span = PerfSpan::new(span_names::RELOAD);
///     // ... reload the widget ...
/// }
/// ```
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "ribbon::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

impl std::fmt::Debug for PerfSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfSpan").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new("test_operation");
        // Span should be active until dropped
    }

    #[test]
    fn test_targets_are_namespaced() {
        for target in [
            targets::ADAPTER,
            targets::REGISTRY,
            targets::WIDGET,
            targets::PROVIDER,
            targets::CONFIG,
        ] {
            assert!(target.starts_with("ribbon::"), "{target} is not namespaced");
        }
        assert!(targets::SIGNAL.starts_with(targets::CORE));
    }
}
