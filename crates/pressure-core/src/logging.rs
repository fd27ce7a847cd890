#![forbid(unsafe_code)]

//! Logging macros for layout passes.
//!
//! Call sites always go through this crate (`pressure_core::debug!`,
//! `pressure_core::debug_span!`, ...). With the `tracing` feature those names
//! are the `tracing` macros. Without it, events vanish at expansion time and
//! spans become a [`NoopSpan`] that still remembers its name.
//!
//! ```
//! let span = pressure_core::debug_span!("layout_optimize", children = 3);
//! let _guard = span.enter();
//! pressure_core::trace!(k = 1, score = 12.5, "candidate evaluated");
//! ```

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

// Events: arguments are dropped unevaluated.

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {};
}

// Spans: keep the literal name, drop the fields.

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! trace_span {
    ($name:literal $($rest:tt)*) => {
        $crate::logging::NoopSpan::named($name)
    };
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan::default()
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! debug_span {
    ($name:literal $($rest:tt)*) => {
        $crate::logging::NoopSpan::named($name)
    };
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan::default()
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! info_span {
    ($name:literal $($rest:tt)*) => {
        $crate::logging::NoopSpan::named($name)
    };
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan::default()
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! warn_span {
    ($name:literal $($rest:tt)*) => {
        $crate::logging::NoopSpan::named($name)
    };
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan::default()
    };
}

#[cfg(not(feature = "tracing"))]
#[macro_export]
macro_rules! error_span {
    ($name:literal $($rest:tt)*) => {
        $crate::logging::NoopSpan::named($name)
    };
    ($($arg:tt)*) => {
        $crate::logging::NoopSpan::default()
    };
}

/// What the span macros produce when `tracing` is off.
///
/// Mirrors the slice of `tracing::Span` the layout code touches.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopSpan {
    name: &'static str,
}

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    #[inline]
    pub const fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// Empty for spans built without a literal name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Always true: nothing is recorded.
    pub const fn is_disabled(&self) -> bool {
        true
    }

    #[inline]
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }

    #[inline]
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        f()
    }
}

#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;
