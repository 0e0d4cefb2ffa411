//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! [trajectory_msgs](http://docs.ros.org/kinetic/api/trajectory_msgs/html/index-msg.html)
use serde::Serialize;

use crate::geometry_msgs::{Transform, Twist};
use crate::std_msgs::{Duration, Header};

/// One waypoint of a joint trajectory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JointTrajectoryPoint {
    /// Joint positions.
    pub positions: Vec<f64>,
    /// Joint velocities, or empty.
    pub velocities: Vec<f64>,
    /// Joint accelerations, or empty.
    pub accelerations: Vec<f64>,
    /// Joint efforts, or empty.
    pub effort: Vec<f64>,
    /// Time offset from the trajectory start.
    pub time_from_start: Duration,
}

wire_message!(JointTrajectoryPoint = "trajectory_msgs/JointTrajectoryPoint" {
    positions: "positions",
    velocities: "velocities",
    accelerations: "accelerations",
    effort: "effort",
    time_from_start: "time_from_start",
});

/// Timed sequence of joint positions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JointTrajectory {
    /// Frame and start time.
    pub header: Header,
    /// Joints each point refers to.
    pub joint_names: Vec<String>,
    /// Waypoints in time order.
    pub points: Vec<JointTrajectoryPoint>,
}

wire_message!(JointTrajectory = "trajectory_msgs/JointTrajectory" {
    header: "header",
    joint_names: "joint_names",
    points: "points",
});

impl JointTrajectory {
    /// Duration of the last point, or zero for an empty trajectory.
    pub fn time_from_start(&self) -> Duration {
        self.points
            .last()
            .map(|point| point.time_from_start)
            .unwrap_or_default()
    }
}

/// One waypoint of a multi-DOF trajectory.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiDOFJointTrajectoryPoint {
    /// One transform per joint.
    pub transforms: Vec<Transform>,
    /// Velocities, or empty.
    pub velocities: Vec<Twist>,
    /// Accelerations, or empty.
    pub accelerations: Vec<Twist>,
    /// Time offset from the trajectory start.
    pub time_from_start: Duration,
}

wire_message!(MultiDOFJointTrajectoryPoint = "trajectory_msgs/MultiDOFJointTrajectoryPoint" {
    transforms: "transforms",
    velocities: "velocities",
    accelerations: "accelerations",
    time_from_start: "time_from_start",
});

/// Timed sequence of multi-DOF joint transforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MultiDOFJointTrajectory {
    /// Frame and start time.
    pub header: Header,
    /// Joints each point refers to.
    pub joint_names: Vec<String>,
    /// Waypoints in time order.
    pub points: Vec<MultiDOFJointTrajectoryPoint>,
}

wire_message!(MultiDOFJointTrajectory = "trajectory_msgs/MultiDOFJointTrajectory" {
    header: "header",
    joint_names: "joint_names",
    points: "points",
});
