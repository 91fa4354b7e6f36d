// Logging shims over the `log` facade. Expand to nothing without the `log` feature.

#[allow(unused_macros)]
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::debug!($($arg)*);
    };
}

#[allow(unused_macros)]
macro_rules! info {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::info!($($arg)*);
    };
}

#[allow(unused_macros)]
macro_rules! warn {
    ($($arg:tt)*) => {
        #[cfg(feature = "log")]
        log::warn!($($arg)*);
    };
}
