//! ---
//! fab_section: "03-logging"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Structured logging adapters for message codecs."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
#![warn(missing_docs)]

use tracing::Level;
use tracing_subscriber::{fmt as subscriber_fmt, prelude::*, EnvFilter, Registry};

pub mod macros;

/// Environment variable consulted before `RUST_LOG` when building the filter.
pub const LOG_ENV: &str = "FAB_ROS_LOG";

/// Initialize a baseline tracing subscriber suitable for development.
///
/// `FAB_ROS_LOG` takes precedence over `RUST_LOG`; both fall back to `info`.
/// Calling this more than once is harmless, later calls are ignored.
pub fn init() {
    let filter = std::env::var(LOG_ENV)
        .ok()
        .and_then(|directive| EnvFilter::try_new(directive).ok())
        .unwrap_or_else(|| EnvFilter::from_default_env().add_directive(Level::INFO.into()));
    let _ = Registry::default()
        .with(filter)
        .with(subscriber_fmt::layer())
        .try_init();
}

/// Which way a message is travelling through a codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Typed message flattened into wire form.
    Encode,
    /// Wire form reconstructed into a typed message.
    Decode,
}

impl Direction {
    /// Stable lowercase label used as a log field value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Encode => "encode",
            Direction::Decode => "decode",
        }
    }
}

/// Structured logging context propagated by the convenience macros.
#[derive(Debug, Default, Clone)]
pub struct LogContext<'a> {
    /// Fully qualified message type, e.g. `moveit_msgs/RobotState`.
    pub message_type: Option<&'a str>,
    /// Field path associated with the event, if any.
    pub field: Option<&'a str>,
    /// Wire format label (`json`, `cbor`).
    pub format: Option<&'a str>,
    /// Encode or decode.
    pub direction: Option<Direction>,
}

impl<'a> LogContext<'a> {
    /// Create an empty logging context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a message type name.
    pub fn with_message_type(mut self, message_type: &'a str) -> Self {
        self.message_type = Some(message_type);
        self
    }

    /// Attach a field path.
    pub fn with_field(mut self, field: &'a str) -> Self {
        self.field = Some(field);
        self
    }

    /// Attach a wire format label.
    pub fn with_format(mut self, format: &'a str) -> Self {
        self.format = Some(format);
        self
    }

    /// Attach the codec direction.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    /// Direction label, empty when unset.
    pub fn direction_str(&self) -> &'static str {
        self.direction.map(|d| d.as_str()).unwrap_or("")
    }
}

/// Outcome attached to codec log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecOutcome {
    /// The conversion completed.
    Success,
    /// The conversion failed and the error was returned to the caller.
    Fault,
}

impl CodecOutcome {
    fn as_str(&self) -> &'static str {
        match self {
            CodecOutcome::Success => "success",
            CodecOutcome::Fault => "fault",
        }
    }
}

/// Emit a standardized codec event. Successes log at `DEBUG`, faults at `ERROR`.
pub fn log_codec_event(
    context: Option<&LogContext>,
    event: &str,
    message: &str,
    outcome: CodecOutcome,
) {
    let ctx = context.cloned().unwrap_or_default();
    match outcome {
        CodecOutcome::Success => tracing::event!(
            Level::DEBUG,
            event = %event,
            outcome = outcome.as_str(),
            message_type = ctx.message_type.unwrap_or(""),
            field = ctx.field.unwrap_or(""),
            format = ctx.format.unwrap_or(""),
            direction = ctx.direction_str(),
            message = %message
        ),
        CodecOutcome::Fault => tracing::event!(
            Level::ERROR,
            event = %event,
            outcome = outcome.as_str(),
            message_type = ctx.message_type.unwrap_or(""),
            field = ctx.field.unwrap_or(""),
            format = ctx.format.unwrap_or(""),
            direction = ctx.direction_str(),
            message = %message
        ),
    }
}
