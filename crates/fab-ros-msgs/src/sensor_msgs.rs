//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! [sensor_msgs](http://docs.ros.org/kinetic/api/sensor_msgs/html/index-msg.html)
use serde::Serialize;

use crate::geometry_msgs::{Transform, Twist, Wrench};
use crate::std_msgs::Header;

/// State of a set of single-DOF joints.
///
/// `position`, `velocity` and `effort` are either empty or the same length as
/// `name`; nothing here checks that.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JointState {
    /// Time of the reading.
    pub header: Header,
    /// Joint names.
    pub name: Vec<String>,
    /// Positions, parallel to `name`.
    pub position: Vec<f64>,
    /// Velocities, parallel to `name` or empty.
    pub velocity: Vec<f64>,
    /// Efforts, parallel to `name` or empty.
    pub effort: Vec<f64>,
}

wire_message!(JointState = "sensor_msgs/JointState" {
    header: "header",
    name: "name",
    position: "position",
    velocity: "velocity",
    effort: "effort",
});

impl JointState {
    /// Named joints at the given positions, with empty velocity and effort.
    pub fn from_positions(header: Header, name: Vec<String>, position: Vec<f64>) -> Self {
        Self {
            header,
            name,
            position,
            ..Self::default()
        }
    }
}

/// State of a set of multi-DOF joints (planar, floating).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiDOFJointState {
    /// Time of the reading.
    pub header: Header,
    /// Joint names.
    pub joint_names: Vec<String>,
    /// One transform per joint.
    pub transforms: Vec<Transform>,
    /// One velocity per joint, or empty.
    pub twist: Vec<Twist>,
    /// One wrench per joint, or empty.
    pub wrench: Vec<Wrench>,
}

wire_message!(MultiDOFJointState = "sensor_msgs/MultiDOFJointState" {
    header: "header",
    joint_names: "joint_names",
    transforms: "transforms",
    twist: "twist",
    wrench: "wrench",
});
