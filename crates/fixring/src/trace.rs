//! Optional `tracing` integration.
//!
//! With the `tracing` feature disabled the macro swallows its arguments, so
//! call sites cost nothing and the crate keeps zero runtime dependencies
//! beyond `thiserror`.

#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($arg:tt)*) => {
        ::tracing::trace!(target: "fixring", $($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($arg:tt)*) => {};
}

pub(crate) use trace_event;
