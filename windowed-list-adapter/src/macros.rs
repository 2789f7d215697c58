// Same shape as the engine's logging macros, under the adapter's own target.

#[cfg(feature = "tracing")]
macro_rules! wla_event {
    ($level:ident, $($tt:tt)*) => {
        tracing::event!(target: "windowed_list_adapter", tracing::Level::$level, $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! wla_event {
    ($level:ident, $($tt:tt)*) => {};
}

macro_rules! wla_trace {
    ($($tt:tt)*) => {
        wla_event!(TRACE, $($tt)*)
    };
}

macro_rules! wla_debug {
    ($($tt:tt)*) => {
        wla_event!(DEBUG, $($tt)*)
    };
}
