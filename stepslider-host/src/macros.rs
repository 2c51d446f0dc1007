// Same scheme as the engine crate, under target `stepslider_host`.
macro_rules! hlog {
    ($level:ident, $($tt:tt)*) => {{
        #[cfg(feature = "tracing")]
        tracing::$level!(target: "stepslider_host", $($tt)*);
    }};
}

macro_rules! htrace {
    ($($tt:tt)*) => { hlog!(trace, $($tt)*) };
}

macro_rules! hdebug {
    ($($tt:tt)*) => { hlog!(debug, $($tt)*) };
}
