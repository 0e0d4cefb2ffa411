//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Kinematic constraints used by planning and IK requests.
use serde::Serialize;

use crate::geometry_msgs::{Pose, Quaternion, Vector3};
use crate::shape_msgs::{Mesh, SolidPrimitive};
use crate::std_msgs::Header;
use crate::wire::{FieldPolicy, FromWire, RosMessage, WireValue};
use crate::{Result, SchemaError};

/// Keeps one joint within `[position - tolerance_below, position + tolerance_above]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JointConstraint {
    /// Constrained joint.
    pub joint_name: String,
    /// Target joint position.
    pub position: f64,
    /// Allowed deviation above `position`.
    pub tolerance_above: f64,
    /// Allowed deviation below `position`.
    pub tolerance_below: f64,
    /// Relative importance when constraints compete.
    pub weight: f64,
}

wire_message!(JointConstraint = "moveit_msgs/JointConstraint" {
    joint_name: "joint_name",
    position: "position",
    tolerance_above: "tolerance_above",
    tolerance_below: "tolerance_below",
    weight: "weight",
});

impl JointConstraint {
    /// Symmetric tolerance around `position` with unit weight.
    pub fn new(joint_name: impl Into<String>, position: f64, tolerance: f64) -> Self {
        Self {
            joint_name: joint_name.into(),
            position,
            tolerance_above: tolerance,
            tolerance_below: tolerance,
            ..Self::default()
        }
    }
}

impl Default for JointConstraint {
    fn default() -> Self {
        Self {
            joint_name: String::new(),
            position: 0.0,
            tolerance_above: 0.0,
            tolerance_below: 0.0,
            weight: 1.0,
        }
    }
}

/// Region described by primitives and meshes, each paired with a pose.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BoundingVolume {
    /// Primitives whose union forms the volume.
    pub primitives: Vec<SolidPrimitive>,
    /// One pose per primitive.
    pub primitive_poses: Vec<Pose>,
    /// Meshes whose union forms the volume.
    pub meshes: Vec<Mesh>,
    /// One pose per mesh.
    pub mesh_poses: Vec<Pose>,
}

wire_message!(BoundingVolume = "moveit_msgs/BoundingVolume" {
    primitives: "primitives",
    primitive_poses: "primitive_poses",
    meshes: "meshes",
    mesh_poses: "mesh_poses",
});

impl BoundingVolume {
    /// Append a primitive and its pose.
    pub fn with_primitive(mut self, primitive: SolidPrimitive, pose: Pose) -> Self {
        self.primitives.push(primitive);
        self.primitive_poses.push(pose);
        self
    }

    /// Append a mesh and its pose.
    pub fn with_mesh(mut self, mesh: Mesh, pose: Pose) -> Self {
        self.meshes.push(mesh);
        self.mesh_poses.push(pose);
        self
    }
}

/// Keeps a point on `link_name` inside `constraint_region`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionConstraint {
    /// Frame the region is expressed in.
    pub header: Header,
    /// Link whose position is constrained.
    pub link_name: String,
    /// Offset of the constrained point from the link origin.
    pub target_point_offset: Vector3,
    /// Volume the target point must stay inside.
    pub constraint_region: BoundingVolume,
    /// Relative importance when constraints compete.
    pub weight: f64,
}

wire_message!(PositionConstraint = "moveit_msgs/PositionConstraint" {
    header: "header",
    link_name: "link_name",
    target_point_offset: "target_point_offset",
    constraint_region: "constraint_region",
    weight: "weight",
});

impl Default for PositionConstraint {
    fn default() -> Self {
        Self {
            header: Header::default(),
            link_name: String::new(),
            target_point_offset: Vector3::default(),
            constraint_region: BoundingVolume::default(),
            weight: 1.0,
        }
    }
}

/// Keeps the orientation of `link_name` within per-axis tolerances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrientationConstraint {
    /// Frame the orientation is expressed in.
    pub header: Header,
    /// Desired orientation.
    pub orientation: Quaternion,
    /// Link whose orientation is constrained.
    pub link_name: String,
    /// Tolerance about the x axis, radians.
    pub absolute_x_axis_tolerance: f64,
    /// Tolerance about the y axis, radians.
    pub absolute_y_axis_tolerance: f64,
    /// Tolerance about the z axis, radians.
    pub absolute_z_axis_tolerance: f64,
    /// Relative importance when constraints compete.
    pub weight: f64,
}

wire_message!(OrientationConstraint = "moveit_msgs/OrientationConstraint" {
    header: "header",
    orientation: "orientation",
    link_name: "link_name",
    absolute_x_axis_tolerance: "absolute_x_axis_tolerance",
    absolute_y_axis_tolerance: "absolute_y_axis_tolerance",
    absolute_z_axis_tolerance: "absolute_z_axis_tolerance",
    weight: "weight",
});

impl Default for OrientationConstraint {
    fn default() -> Self {
        Self {
            header: Header::default(),
            orientation: Quaternion::default(),
            link_name: String::new(),
            absolute_x_axis_tolerance: 0.0,
            absolute_y_axis_tolerance: 0.0,
            absolute_z_axis_tolerance: 0.0,
            weight: 1.0,
        }
    }
}

/// Sensor visibility constraint. Not supported.
///
/// The type has no values: [`VisibilityConstraint::new`] and reconstruction
/// always fail, so `Constraints::visibility_constraints` is always empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum VisibilityConstraint {}

impl VisibilityConstraint {
    /// Always fails with [`SchemaError::NotImplemented`].
    pub fn new() -> Result<Self> {
        Err(SchemaError::NotImplemented(Self::TYPE_NAME))
    }
}

impl RosMessage for VisibilityConstraint {
    const TYPE_NAME: &'static str = "moveit_msgs/VisibilityConstraint";
}

impl FromWire for VisibilityConstraint {
    fn from_wire_with(_value: &WireValue, _policy: FieldPolicy) -> Result<Self> {
        Self::new()
    }
}

/// A named bundle of constraints that must hold together.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    /// Optional label for the set.
    pub name: String,
    /// Joint-space constraints.
    pub joint_constraints: Vec<JointConstraint>,
    /// Link position constraints.
    pub position_constraints: Vec<PositionConstraint>,
    /// Link orientation constraints.
    pub orientation_constraints: Vec<OrientationConstraint>,
    /// Always empty; visibility constraints cannot be built.
    pub visibility_constraints: Vec<VisibilityConstraint>,
}

wire_message!(Constraints = "moveit_msgs/Constraints" {
    name: "name",
    joint_constraints: "joint_constraints",
    position_constraints: "position_constraints",
    orientation_constraints: "orientation_constraints",
    visibility_constraints: "visibility_constraints",
});

impl Constraints {
    /// Empty set with a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// True when no constraint of any kind is present.
    pub fn is_empty(&self) -> bool {
        self.joint_constraints.is_empty()
            && self.position_constraints.is_empty()
            && self.orientation_constraints.is_empty()
            && self.visibility_constraints.is_empty()
    }
}

/// One [`Constraints`] bundle per trajectory waypoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrajectoryConstraints {
    /// One constraint set per trajectory waypoint.
    pub constraints: Vec<Constraints>,
}

wire_message!(TrajectoryConstraints = "moveit_msgs/TrajectoryConstraints" {
    constraints: "constraints",
});
