//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! [moveit_msgs](http://docs.ros.org/kinetic/api/moveit_msgs/html/index-msg.html)
mod collision;
mod constraints;
mod planning;
mod planning_scene;
mod robot_state;
mod status;

pub use collision::{
    AllowedCollisionEntry, AllowedCollisionMatrix, AttachedCollisionObject, CollisionObject,
    LinkPadding, LinkScale, ObjectColor,
};
pub use constraints::{
    BoundingVolume, Constraints, JointConstraint, OrientationConstraint, PositionConstraint,
    TrajectoryConstraints, VisibilityConstraint,
};
pub use planning::{PlannerParams, PositionIKRequest, WorkspaceParameters};
pub use planning_scene::{PlanningScene, PlanningSceneComponents, PlanningSceneWorld};
pub use robot_state::{RobotState, RobotTrajectory};
pub use status::MoveItErrorCodes;
