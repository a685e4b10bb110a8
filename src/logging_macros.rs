#![warn(clippy::all, rust_2018_idioms)]

/// Unified logging macros with file, function, and line context.
/// Each macro writes to both the `log` and `tracing` systems so events from
/// the GUI framework and the AWS SDKs end up in the same file log.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::debug!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::info!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::warn!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
        tracing::error!("[{}:{}:{}] {}", file!(), module_path!(), line!(), format!($($arg)*));
    };
}

/*
Log level guidelines:

DEBUG: SDK/API client initialization details, UI interactions, file I/O details
INFO: user-initiated actions, operation completions, important state changes
WARN: recoverable issues and fallbacks (e.g. truncation retry)
ERROR: failed AWS API calls, file I/O failures that prevent operations
*/
