//! ---
//! fab_section: "03-logging"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Structured logging adapters for message codecs."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
/// Internal helper shared by the level-specific macros.
#[doc(hidden)]
#[macro_export]
macro_rules! __fab_event {
    ($level:expr, $ctx:expr, $($arg:tt)+) => {{
        let ctx: &$crate::LogContext = &$ctx;
        tracing::event!(
            $level,
            message_type = ctx.message_type.unwrap_or(""),
            field = ctx.field.unwrap_or(""),
            format = ctx.format.unwrap_or(""),
            direction = ctx.direction_str(),
            message = %format_args!($($arg)+)
        );
    }};
}

/// Emit an informational log enriched with codec context.
#[macro_export]
macro_rules! fab_info {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fab_event!(tracing::Level::INFO, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fab_event!(tracing::Level::INFO, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit a debug log enriched with codec context.
#[macro_export]
macro_rules! fab_debug {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fab_event!(tracing::Level::DEBUG, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fab_event!(tracing::Level::DEBUG, $crate::LogContext::default(), $($arg)+)
    };
}

/// Emit an error log enriched with codec context.
#[macro_export]
macro_rules! fab_error {
    (context = $ctx:expr, $($arg:tt)+) => {
        $crate::__fab_event!(tracing::Level::ERROR, $ctx, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::__fab_event!(tracing::Level::ERROR, $crate::LogContext::default(), $($arg)+)
    };
}
