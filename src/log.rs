//! Console logging
//!
//! Messages follow the `[Component.method] message` convention and are printed
//! through `esp-println` when the `esp32-log` feature is enabled. Without the
//! feature the arguments are type-checked and discarded.

#[cfg(not(feature = "esp32-log"))]
#[inline(always)]
pub(crate) fn discard(_args: core::fmt::Arguments<'_>) {}

macro_rules! __log {
    ($level:literal, $($arg:tt)*) => {{
        #[cfg(feature = "esp32-log")]
        esp_println::println!("[{}] {}", $level, format_args!($($arg)*));
        #[cfg(not(feature = "esp32-log"))]
        $crate::log::discard(format_args!($($arg)*));
    }};
}

/// Log an informational message
macro_rules! info {
    ($($arg:tt)*) => { __log!("INFO", $($arg)*) };
}

/// Log a recoverable problem
macro_rules! warn {
    ($($arg:tt)*) => { __log!("WARN", $($arg)*) };
}

/// Log an error that the engine recovered from locally
macro_rules! error {
    ($($arg:tt)*) => { __log!("ERROR", $($arg)*) };
}
