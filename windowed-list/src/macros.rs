// Logging goes through `tracing` only when the `tracing` feature is on; otherwise every
// call site expands to nothing.

#[cfg(feature = "tracing")]
macro_rules! wl_event {
    ($level:ident, $($tt:tt)*) => {
        tracing::event!(target: "windowed_list", tracing::Level::$level, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wl_event {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! wl_trace {
    ($($tt:tt)*) => {
        wl_event!(TRACE, $($tt)*)
    };
}

macro_rules! wl_debug {
    ($($tt:tt)*) => {
        wl_event!(DEBUG, $($tt)*)
    };
}

macro_rules! wl_warn {
    ($($tt:tt)*) => {
        wl_event!(WARN, $($tt)*)
    };
}
