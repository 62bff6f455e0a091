//! Console logging
//!
//! In the browser every message goes straight to the devtools console, the
//! same way `init()` announces the engine. Off wasm (tests, native tools) the
//! imported console functions are unavailable, so the same call sites emit
//! `tracing` events instead.
//!
//! Usage:
//! ```rust
//! use lifesand_engine::{console_log, console_warn};
//!
//! console_log!("grid ready: {}x{}", 75, 100);
//! console_warn!("render callback failed");
//! ```

#[doc(hidden)]
pub fn log_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::log_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::info!(target: "lifesand", "{}", msg);
    }
}

#[doc(hidden)]
pub fn warn_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::console::warn_1(&msg.into());
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::warn!(target: "lifesand", "{}", msg);
    }
}

/// Info-level message to the browser console (or `tracing` natively)
#[macro_export]
macro_rules! console_log {
    ($($arg:tt)*) => {{
        $crate::core::utils::logging::log_str(&format!($($arg)*));
    }};
}

/// Warning-level message to the browser console (or `tracing` natively)
#[macro_export]
macro_rules! console_warn {
    ($($arg:tt)*) => {{
        $crate::core::utils::logging::warn_str(&format!($($arg)*));
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn macros_format_without_panicking() {
        console_log!("tick {} took {:.2}ms", 3, 0.5);
        console_warn!("flow flipped at ({}, {})", 1, 2);
    }
}
