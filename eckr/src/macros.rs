//! Diagnostics forwarded to `tracing` when the `tracing` feature is enabled.

/// Emit a `debug` event, or nothing when `tracing` is disabled.
macro_rules! debug {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)+);
    };
}

/// Emit a `trace` event, or nothing when `tracing` is disabled.
macro_rules! trace {
    ($($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)+);
    };
}
