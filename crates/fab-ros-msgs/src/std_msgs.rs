//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! [std_msgs](http://docs.ros.org/kinetic/api/std_msgs/html/index-msg.html)
use serde::Serialize;

/// Absolute point in time, split into whole seconds and nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Time {
    /// Whole seconds since the epoch.
    pub secs: u32,
    /// Nanoseconds past `secs`.
    pub nsecs: u32,
}

wire_message!(Time = "std_msgs/Time" { secs: "secs", nsecs: "nsecs" });

impl Time {
    /// Construct from explicit parts.
    pub fn new(secs: u32, nsecs: u32) -> Self {
        Self { secs, nsecs }
    }
}

/// Signed span of time, split into whole seconds and nanoseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Duration {
    /// Whole seconds.
    pub secs: i32,
    /// Nanoseconds past `secs`.
    pub nsecs: i32,
}

wire_message!(Duration = "std_msgs/Duration" { secs: "secs", nsecs: "nsecs" });

impl Duration {
    const NANOS_PER_SEC: f64 = 1e9;

    /// Construct from explicit parts.
    pub fn new(secs: i32, nsecs: i32) -> Self {
        Self { secs, nsecs }
    }

    /// Split fractional seconds, rounding to the nearest nanosecond.
    pub fn from_secs_f64(seconds: f64) -> Self {
        let secs = seconds.floor();
        let mut nsecs = ((seconds - secs) * Self::NANOS_PER_SEC).round();
        let mut secs = secs as i32;
        if nsecs >= Self::NANOS_PER_SEC {
            secs += 1;
            nsecs -= Self::NANOS_PER_SEC;
        }
        Self {
            secs,
            nsecs: nsecs as i32,
        }
    }

    /// Total length in seconds.
    pub fn as_secs_f64(&self) -> f64 {
        f64::from(self.secs) + f64::from(self.nsecs) / Self::NANOS_PER_SEC
    }
}

/// Standard metadata for higher-level stamped data types.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Header {
    /// Consecutively increasing sequence id.
    pub seq: u32,
    /// Time the data refers to.
    pub stamp: Time,
    /// Frame this data is associated with.
    pub frame_id: String,
}

wire_message!(Header = "std_msgs/Header" {
    seq: "seq",
    stamp: "stamp",
    frame_id: "frame_id",
});

impl Header {
    /// Header for `frame_id` with a zero stamp.
    pub fn with_frame(frame_id: impl Into<String>) -> Self {
        Self {
            frame_id: frame_id.into(),
            ..Self::default()
        }
    }
}

/// Colour with alpha, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ColorRGBA {
    /// Red.
    pub r: f32,
    /// Green.
    pub g: f32,
    /// Blue.
    pub b: f32,
    /// Alpha.
    pub a: f32,
}

wire_message!(ColorRGBA = "std_msgs/ColorRGBA" { r: "r", g: "g", b: "b", a: "a" });

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::wire::{FromWire, ToWire};

    #[test]
    fn header_reconstructs_nested_stamp() {
        let header = Header::from_wire(&json!({
            "seq": 3,
            "stamp": {"secs": 10, "nsecs": 500},
            "frame_id": "base_link"
        }))
        .expect("header");
        assert_eq!(header.seq, 3);
        assert_eq!(header.stamp, Time::new(10, 500));
        assert_eq!(header.frame_id, "base_link");
    }

    #[test]
    fn header_flattens_with_every_key() {
        let wire = Header::with_frame("world").to_wire().expect("flatten");
        assert_eq!(
            wire,
            json!({"seq": 0, "stamp": {"secs": 0, "nsecs": 0}, "frame_id": "world"})
        );
    }

    #[test]
    fn duration_splits_fractional_seconds() {
        let d = Duration::from_secs_f64(1.25);
        assert_eq!(d, Duration::new(1, 250_000_000));
        assert!((d.as_secs_f64() - 1.25).abs() < 1e-9);
        assert_eq!(Duration::from_secs_f64(1.0), Duration::new(1, 0));
    }
}
