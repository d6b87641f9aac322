//! This module provides observability hooks for the ring pipeline.
//!
//! The `log_metric!` macro emits a structured key-value line through the `log`
//! facade at debug level. The `#[cfg(debug_assertions)]` attribute compiles the
//! macro body and all calls to it out of release builds.

/// Logs a structured key-value metric line at debug level, only in debug builds.
///
/// # Example
/// ```
/// use ringcode::log_metric;
/// let arcs = 4;
/// log_metric!("event"="encode_ring", "ring"=0, "arcs"=&arcs);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        #[cfg(debug_assertions)]
        {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+

            ::log::debug!("RINGCODE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}
