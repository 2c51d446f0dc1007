// Logging goes through `tracing` with target `stepslider`. Without the `tracing` feature the
// statement is compiled out, arguments included.
macro_rules! slog {
    ($level:ident, $($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::$level!(target: "stepslider", $($tt)*);
    }};
}

macro_rules! strace {
    ($($tt:tt)*) => { slog!(trace, $($tt)*) };
}

macro_rules! sdebug {
    ($($tt:tt)*) => { slog!(debug, $($tt)*) };
}

macro_rules! swarn {
    ($($tt:tt)*) => { slog!(warn, $($tt)*) };
}
