//! Scanner diagnostics.
//!
//! With the `tracing` feature, `trace!` forwards to [`tracing::trace!`] under
//! the `seqscan::scanner` target. Without it the macro expands to nothing, so
//! arguments must not carry side effects.

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::tracing::trace!(target: "seqscan::scanner", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)+) => {{}};
}
