//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Result codes reported by planning, execution and kinematics services.
use std::fmt;

use serde::Serialize;

use crate::constants::{lookup_value, NamedConstants};

/// Status code carried by MoveIt responses.
///
/// Compares equal to a raw `i32`, so `response.error_code == MoveItErrorCodes::SUCCESS`
/// works without unwrapping the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoveItErrorCodes {
    /// Raw code.
    pub val: i32,
}

wire_message!(MoveItErrorCodes = "moveit_msgs/MoveItErrorCodes" { val: "val" });

impl MoveItErrorCodes {
    // overall behavior
    /// Success.
    pub const SUCCESS: i32 = 1;
    /// Failure.
    pub const FAILURE: i32 = 99999;

    /// Planning failed.
    pub const PLANNING_FAILED: i32 = -1;
    /// Invalid motion plan.
    pub const INVALID_MOTION_PLAN: i32 = -2;
    /// Motion plan invalidated by environment change.
    pub const MOTION_PLAN_INVALIDATED_BY_ENVIRONMENT_CHANGE: i32 = -3;
    /// Control failed.
    pub const CONTROL_FAILED: i32 = -4;
    /// Unable to aquire sensor data.
    pub const UNABLE_TO_AQUIRE_SENSOR_DATA: i32 = -5;
    /// Timed out.
    pub const TIMED_OUT: i32 = -6;
    /// Preempted.
    pub const PREEMPTED: i32 = -7;

    // planning & kinematics request errors
    /// Start state in collision.
    pub const START_STATE_IN_COLLISION: i32 = -10;
    /// Start state violates path constraints.
    pub const START_STATE_VIOLATES_PATH_CONSTRAINTS: i32 = -11;

    /// Goal in collision.
    pub const GOAL_IN_COLLISION: i32 = -12;
    /// Goal violates path constraints.
    pub const GOAL_VIOLATES_PATH_CONSTRAINTS: i32 = -13;
    /// Goal constraints violated.
    pub const GOAL_CONSTRAINTS_VIOLATED: i32 = -14;

    /// Invalid group name.
    pub const INVALID_GROUP_NAME: i32 = -15;
    /// Invalid goal constraints.
    pub const INVALID_GOAL_CONSTRAINTS: i32 = -16;
    /// Invalid robot state.
    pub const INVALID_ROBOT_STATE: i32 = -17;
    /// Invalid link name.
    pub const INVALID_LINK_NAME: i32 = -18;
    /// Invalid object name.
    pub const INVALID_OBJECT_NAME: i32 = -19;

    // system errors
    /// Frame transform failure.
    pub const FRAME_TRANSFORM_FAILURE: i32 = -21;
    /// Collision checking unavailable.
    pub const COLLISION_CHECKING_UNAVAILABLE: i32 = -22;
    /// Robot state stale.
    pub const ROBOT_STATE_STALE: i32 = -23;
    /// Sensor info stale.
    pub const SENSOR_INFO_STALE: i32 = -24;

    // kinematics errors
    /// No ik solution.
    pub const NO_IK_SOLUTION: i32 = -31;

    /// Wrap a raw code.
    pub fn new(val: i32) -> Self {
        Self { val }
    }

    /// True for `SUCCESS`.
    pub fn is_success(&self) -> bool {
        self.val == Self::SUCCESS
    }

    /// Code registered under `name`, e.g. `"TIMED_OUT"`.
    pub fn from_name(name: &str) -> Option<Self> {
        lookup_value(Self::NAMED, name).map(Self::new)
    }
}

impl NamedConstants for MoveItErrorCodes {
    type Value = i32;

    const NAMED: &'static [(&'static str, i32)] = &[
        ("SUCCESS", Self::SUCCESS),
        ("FAILURE", Self::FAILURE),
        ("PLANNING_FAILED", Self::PLANNING_FAILED),
        ("INVALID_MOTION_PLAN", Self::INVALID_MOTION_PLAN),
        (
            "MOTION_PLAN_INVALIDATED_BY_ENVIRONMENT_CHANGE",
            Self::MOTION_PLAN_INVALIDATED_BY_ENVIRONMENT_CHANGE,
        ),
        ("CONTROL_FAILED", Self::CONTROL_FAILED),
        ("UNABLE_TO_AQUIRE_SENSOR_DATA", Self::UNABLE_TO_AQUIRE_SENSOR_DATA),
        ("TIMED_OUT", Self::TIMED_OUT),
        ("PREEMPTED", Self::PREEMPTED),
        ("START_STATE_IN_COLLISION", Self::START_STATE_IN_COLLISION),
        (
            "START_STATE_VIOLATES_PATH_CONSTRAINTS",
            Self::START_STATE_VIOLATES_PATH_CONSTRAINTS,
        ),
        ("GOAL_IN_COLLISION", Self::GOAL_IN_COLLISION),
        ("GOAL_VIOLATES_PATH_CONSTRAINTS", Self::GOAL_VIOLATES_PATH_CONSTRAINTS),
        ("GOAL_CONSTRAINTS_VIOLATED", Self::GOAL_CONSTRAINTS_VIOLATED),
        ("INVALID_GROUP_NAME", Self::INVALID_GROUP_NAME),
        ("INVALID_GOAL_CONSTRAINTS", Self::INVALID_GOAL_CONSTRAINTS),
        ("INVALID_ROBOT_STATE", Self::INVALID_ROBOT_STATE),
        ("INVALID_LINK_NAME", Self::INVALID_LINK_NAME),
        ("INVALID_OBJECT_NAME", Self::INVALID_OBJECT_NAME),
        ("FRAME_TRANSFORM_FAILURE", Self::FRAME_TRANSFORM_FAILURE),
        ("COLLISION_CHECKING_UNAVAILABLE", Self::COLLISION_CHECKING_UNAVAILABLE),
        ("ROBOT_STATE_STALE", Self::ROBOT_STATE_STALE),
        ("SENSOR_INFO_STALE", Self::SENSOR_INFO_STALE),
        ("NO_IK_SOLUTION", Self::NO_IK_SOLUTION),
    ];

    fn value(&self) -> i32 {
        self.val
    }
}

impl Default for MoveItErrorCodes {
    fn default() -> Self {
        Self::new(Self::NO_IK_SOLUTION)
    }
}

impl PartialEq<i32> for MoveItErrorCodes {
    fn eq(&self, other: &i32) -> bool {
        self.val == *other
    }
}

impl PartialEq<MoveItErrorCodes> for i32 {
    fn eq(&self, other: &MoveItErrorCodes) -> bool {
        *self == other.val
    }
}

impl From<i32> for MoveItErrorCodes {
    fn from(val: i32) -> Self {
        Self::new(val)
    }
}

impl From<MoveItErrorCodes> for i32 {
    fn from(code: MoveItErrorCodes) -> Self {
        code.val
    }
}

impl fmt::Display for MoveItErrorCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.human_readable() {
            "" => write!(f, "{}", self.val),
            name => write!(f, "{name} ({})", self.val),
        }
    }
}
