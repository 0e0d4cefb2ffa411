//! ---
//! fab_section: "03-logging"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Structured logging adapters for message codecs."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
use fab_ros_logging::{
    fab_debug, fab_error, fab_info, init, log_codec_event, CodecOutcome, Direction, LogContext,
};
use once_cell::sync::Lazy;

static SUBSCRIBER: Lazy<()> = Lazy::new(init);

#[test]
fn macros_accept_owned_and_borrowed_contexts() {
    Lazy::force(&SUBSCRIBER);
    let ctx = LogContext::new()
        .with_message_type("moveit_msgs/CollisionObject")
        .with_direction(Direction::Encode);
    fab_info!(context = ctx, "encoded {} bytes", 128);
    fab_debug!(context = LogContext::new().with_field("primitives"), "walked field");
    fab_error!("plain error without context");
}

#[test]
fn codec_events_cover_both_outcomes() {
    Lazy::force(&SUBSCRIBER);
    let ctx = LogContext::new()
        .with_format("json")
        .with_direction(Direction::Decode);
    log_codec_event(Some(&ctx), "codec.decode", "ok", CodecOutcome::Success);
    log_codec_event(Some(&ctx), "codec.decode", "missing key", CodecOutcome::Fault);
    assert_eq!(Direction::Decode.as_str(), "decode");
}
