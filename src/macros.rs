//! Small crate-wide logging macros.
//!
//! In the browser everything goes to the devtools console through
//! `web_sys::console`. Native builds (unit tests) print to stderr instead,
//! because wasm-bindgen imports panic off-wasm.

#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Warn,
    Error,
}

#[doc(hidden)]
#[cfg(target_arch = "wasm32")]
pub fn console_write(level: Level, message: &str) {
    let value = wasm_bindgen::JsValue::from_str(message);
    match level {
        Level::Debug => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Error => web_sys::console::error_1(&value),
    }
}

#[doc(hidden)]
#[cfg(not(target_arch = "wasm32"))]
pub fn console_write(level: Level, message: &str) {
    eprintln!("[{:?}] {}", level, message);
}

/// Log to the console in debug builds only.
///
/// ```rust,ignore
/// debug_log!("navigated to {}", path);
/// ```
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        if cfg!(debug_assertions) {
            $crate::macros::console_write($crate::macros::Level::Debug, &format!($($arg)*));
        }
    };
}

/// `console.warn` in every build.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::macros::console_write($crate::macros::Level::Warn, &format!($($arg)*))
    };
}

/// `console.error` in every build.
#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::macros::console_write($crate::macros::Level::Error, &format!($($arg)*))
    };
}
