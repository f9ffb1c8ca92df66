//! Log macros that stamp the call site as `file:line`.

/// Logs at an explicit level with the expansion site as the call-site tag.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $lvl:expr, $($arg:tt)+) => {
        $logger.log($lvl, concat!(file!(), ":", line!()), format_args!($($arg)+))
    };
}

/// Debug message tagged with the expansion site.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Debug, $($arg)+) };
}

/// Info message tagged with the expansion site.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Info, $($arg)+) };
}

/// Warning tagged with the expansion site.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Warn, $($arg)+) };
}

/// Error message tagged with the expansion site.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Error, $($arg)+) };
}

/// Fatal message tagged with the expansion site. Does not exit the process.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => { $crate::log_at!($logger, $crate::Level::Fatal, $($arg)+) };
}
