//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Inverse-kinematics queries and planner configuration.
use serde::Serialize;

use crate::geometry_msgs::{PoseStamped, Vector3};
use crate::moveit_msgs::{Constraints, RobotState};
use crate::std_msgs::{Duration, Header};

/// An inverse-kinematics query for one planning group.
///
/// ```
/// use fab_ros_msgs::geometry_msgs::PoseStamped;
/// use fab_ros_msgs::moveit_msgs::PositionIKRequest;
/// use fab_ros_msgs::std_msgs::Header;
///
/// let request = PositionIKRequest::new("manipulator").with_pose(PoseStamped {
///     header: Header::with_frame("base_link"),
///     ..PoseStamped::default()
/// });
/// assert_eq!(request.attempts, 8);
/// assert!(request.avoid_collisions);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionIKRequest {
    /// Planning group to solve for.
    pub group_name: String,
    /// Seed state for the solver.
    pub robot_state: RobotState,
    /// Constraints the solution must satisfy.
    pub constraints: Constraints,
    /// Reject solutions in collision.
    pub avoid_collisions: bool,
    /// Link the pose is for; empty uses the group's tip link.
    pub ik_link_name: String,
    /// Target pose for `ik_link_name`.
    pub pose_stamped: PoseStamped,
    /// Links for multi-tip solvers, paired with `pose_stamped_vector`.
    pub ik_link_names: Vec<String>,
    /// Target poses for `ik_link_names`.
    pub pose_stamped_vector: Vec<PoseStamped>,
    /// Solver time limit.
    pub timeout: Duration,
    /// Number of solver attempts.
    pub attempts: i32,
}

wire_message!(PositionIKRequest = "moveit_msgs/PositionIKRequest" {
    group_name: "group_name",
    robot_state: "robot_state",
    constraints: "constraints",
    avoid_collisions: "avoid_collisions",
    ik_link_name: "ik_link_name",
    pose_stamped: "pose_stamped",
    ik_link_names: "ik_link_names",
    pose_stamped_vector: "pose_stamped_vector",
    timeout: "timeout",
    attempts: "attempts",
});

impl PositionIKRequest {
    /// Request for `group_name` with every other field at its default.
    pub fn new(group_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            ..Self::default()
        }
    }

    /// Seed state for the solver.
    pub fn with_robot_state(mut self, robot_state: RobotState) -> Self {
        self.robot_state = robot_state;
        self
    }

    /// Constraints the solution must satisfy.
    pub fn with_constraints(mut self, constraints: Constraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Target pose for the tip link.
    pub fn with_pose(mut self, pose_stamped: PoseStamped) -> Self {
        self.pose_stamped = pose_stamped;
        self
    }

    /// Replace the solver time limit.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the attempt count.
    pub fn with_attempts(mut self, attempts: i32) -> Self {
        self.attempts = attempts;
        self
    }

    /// Set whether solutions in collision are rejected.
    pub fn avoid_collisions(mut self, avoid: bool) -> Self {
        self.avoid_collisions = avoid;
        self
    }
}

impl Default for PositionIKRequest {
    fn default() -> Self {
        Self {
            group_name: "robot".to_owned(),
            robot_state: RobotState::default(),
            constraints: Constraints::default(),
            avoid_collisions: true,
            ik_link_name: String::new(),
            pose_stamped: PoseStamped::default(),
            ik_link_names: Vec::new(),
            pose_stamped_vector: Vec::new(),
            timeout: Duration::new(1, 0),
            attempts: 8,
        }
    }
}

/// Axis-aligned box the planner may sample in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceParameters {
    /// Frame the box is expressed in.
    pub header: Header,
    /// Lower corner of the workspace box.
    pub min_corner: Vector3,
    /// Upper corner of the workspace box.
    pub max_corner: Vector3,
}

wire_message!(WorkspaceParameters = "moveit_msgs/WorkspaceParameters" {
    header: "header",
    min_corner: "min_corner",
    max_corner: "max_corner",
});

impl Default for WorkspaceParameters {
    fn default() -> Self {
        Self {
            header: Header::default(),
            min_corner: Vector3::new(-1000.0, -1000.0, -1000.0),
            max_corner: Vector3::new(1000.0, 1000.0, 1000.0),
        }
    }
}

/// Planner parameters as three parallel string arrays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlannerParams {
    /// Parameter names.
    pub keys: Vec<String>,
    /// Parameter values, parallel to `keys`.
    pub values: Vec<String>,
    /// May be empty even when `keys` is not.
    pub descriptions: Vec<String>,
}

wire_message!(PlannerParams = "moveit_msgs/PlannerParams" {
    keys: "keys",
    values: "values",
    descriptions: "descriptions",
});

impl PlannerParams {
    /// Append one parameter, keeping `keys` and `values` aligned.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.keys.push(key.into());
        self.values.push(value.into());
    }

    /// Value stored for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        let index = self.keys.iter().position(|k| k == key)?;
        self.values.get(index).map(String::as_str)
    }
}
