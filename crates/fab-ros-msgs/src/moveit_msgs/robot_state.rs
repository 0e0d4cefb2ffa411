//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Robot configuration snapshots and planned motions.
use serde::Serialize;

use crate::moveit_msgs::AttachedCollisionObject;
use crate::sensor_msgs::{JointState, MultiDOFJointState};
use crate::trajectory_msgs::{JointTrajectory, MultiDOFJointTrajectory};

/// Full or partial robot configuration.
///
/// With `is_diff` set the populated fields are a delta to merge onto an
/// existing state; this crate only carries the flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RobotState {
    /// Single-DOF joint values.
    pub joint_state: JointState,
    /// Multi-DOF joint values.
    pub multi_dof_joint_state: MultiDOFJointState,
    /// Objects attached to robot links.
    pub attached_collision_objects: Vec<AttachedCollisionObject>,
    /// True when only the listed joints are meant to change.
    pub is_diff: bool,
}

wire_message!(RobotState = "moveit_msgs/RobotState" {
    joint_state: "joint_state",
    multi_dof_joint_state: "multi_dof_joint_state",
    attached_collision_objects: "attached_collision_objects",
    is_diff: "is_diff",
});

impl RobotState {
    /// Full (non-diff) state from joint values.
    pub fn new(joint_state: JointState, multi_dof_joint_state: MultiDOFJointState) -> Self {
        Self {
            joint_state,
            multi_dof_joint_state,
            ..Self::default()
        }
    }

    /// Mark this state as a delta against the current one.
    pub fn as_diff(mut self) -> Self {
        self.is_diff = true;
        self
    }

    /// Position of `joint`, if the joint state lists it with a position.
    pub fn joint_position(&self, joint: &str) -> Option<f64> {
        let index = self.joint_state.name.iter().position(|name| name == joint)?;
        self.joint_state.position.get(index).copied()
    }
}

/// Trajectory over single- and multi-DOF joints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RobotTrajectory {
    /// Single-DOF part.
    pub joint_trajectory: JointTrajectory,
    /// Multi-DOF part.
    pub multi_dof_joint_trajectory: MultiDOFJointTrajectory,
}

wire_message!(RobotTrajectory = "moveit_msgs/RobotTrajectory" {
    joint_trajectory: "joint_trajectory",
    multi_dof_joint_trajectory: "multi_dof_joint_trajectory",
});
