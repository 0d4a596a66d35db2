//! Debug configuration and precondition reporting
//!
//! Programmer errors (an unsupported attachment index, a call on the wrong
//! framebuffer variant, a missing primary attachment) are not returned as
//! `Result`s. They are reported here: logged at ERROR with file:line,
//! counted, and turned into a panic (an assertion) in debug builds unless a
//! log-only `Config` is installed.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use crate::log::{self, LogSeverity};

/// Global debug configuration
static DEBUG_CONFIG: Mutex<Option<Config>> = Mutex::new(None);

/// Global violation statistics
static VIOLATION_STATS: ViolationStatsTracker = ViolationStatsTracker::new();

/// Debug configuration for precondition reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Panic after reporting a precondition violation
    pub panic_on_violation: bool,
    /// Count reported violations (see `violation_stats()`)
    pub enable_stats: bool,
}

impl Default for Config {
    /// Violations assert in debug builds and are logged and counted in release
    fn default() -> Self {
        Self {
            panic_on_violation: cfg!(debug_assertions),
            enable_stats: true,
        }
    }
}

impl Config {
    /// Log and count violations without panicking
    pub fn log_only() -> Self {
        Self {
            panic_on_violation: false,
            enable_stats: true,
        }
    }
}

/// Snapshot of the violation counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViolationStats {
    /// Number of precondition violations reported
    pub violations: u32,
}

struct ViolationStatsTracker {
    violations: AtomicU32,
}

impl ViolationStatsTracker {
    const fn new() -> Self {
        Self {
            violations: AtomicU32::new(0),
        }
    }

    fn increment(&self) {
        self.violations.fetch_add(1, Ordering::Relaxed);
    }

    fn get_stats(&self) -> ViolationStats {
        ViolationStats {
            violations: self.violations.load(Ordering::Relaxed),
        }
    }

    fn reset(&self) {
        self.violations.store(0, Ordering::Relaxed);
    }
}

/// Install a debug configuration (resets the statistics)
pub fn init_debug_config(config: Config) {
    VIOLATION_STATS.reset();
    if let Ok(mut lock) = DEBUG_CONFIG.lock() {
        *lock = Some(config);
    }
}

/// Current debug configuration (default if none was installed)
pub fn debug_config() -> Config {
    DEBUG_CONFIG
        .lock()
        .ok()
        .and_then(|lock| lock.clone())
        .unwrap_or_default()
}

/// Get current violation statistics
pub fn violation_stats() -> ViolationStats {
    VIOLATION_STATS.get_stats()
}

/// Reset violation statistics to zero
pub fn reset_violation_stats() {
    VIOLATION_STATS.reset();
}

/// Report a precondition violation (used by `glrt_violation!`)
pub fn report_violation(source: &str, message: String, file: &'static str, line: u32) {
    let config = debug_config();

    if config.enable_stats {
        VIOLATION_STATS.increment();
    }

    let panic_message = if config.panic_on_violation {
        Some(format!("{} ({}:{}) {}", source, file, line, message))
    } else {
        None
    };

    log::log_detailed(
        LogSeverity::Error,
        source,
        format!("Precondition violated: {}", message),
        file,
        line,
    );

    if let Some(msg) = panic_message {
        panic!("Precondition violated: {}", msg);
    }
}

/// Report an unconditional precondition violation
///
/// # Example
///
/// ```ignore
/// glrt_violation!("glrt::CurrentFramebuffer", "update_drawable is not supported");
/// ```
#[macro_export]
macro_rules! glrt_violation {
    ($source:expr, $($arg:tt)*) => {
        $crate::debug::report_violation(
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

/// Check a precondition; reports a violation and evaluates to `false` if it fails
///
/// # Example
///
/// ```ignore
/// if !glrt_precondition!(index == 0, "glrt::CustomFramebuffer", "Invalid index: {}", index) {
///     return;
/// }
/// ```
#[macro_export]
macro_rules! glrt_precondition {
    ($cond:expr, $source:expr, $($arg:tt)*) => {{
        let holds: bool = $cond;
        if !holds {
            $crate::glrt_violation!($source, $($arg)*);
        }
        holds
    }};
}

#[cfg(test)]
#[path = "debug_tests.rs"]
mod tests;
