//! Shared macros for the crate
//!
//! Conditional tracing macros: forwarded to `tracing` with the `trace`
//! feature, no-ops otherwise.

#[cfg(feature = "trace")]
macro_rules! debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "trace"))]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "trace")]
macro_rules! info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "trace"))]
macro_rules! info {
    ($($arg:tt)*) => {};
}

pub(crate) use {debug, info};
