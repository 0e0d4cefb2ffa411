//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Collision objects, attachments and the allowed-collision matrix.
use serde::Serialize;

use crate::constants::lookup_name;
use crate::geometry_msgs::Pose;
use crate::object_recognition_msgs::ObjectType;
use crate::shape_msgs::{Mesh, Plane, SolidPrimitive};
use crate::std_msgs::{ColorRGBA, Header};
use crate::trajectory_msgs::JointTrajectory;

/// A named rigid object to add to, remove from or move within a planning
/// scene.
///
/// Each geometry array is paired with a pose array of the same length
/// (`primitives`/`primitive_poses` and so on). Use the `with_*` builders to
/// keep the pairs aligned; direct field access is not checked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollisionObject {
    /// Frame used to interpret the poses.
    pub header: Header,
    /// Name of the object in the planning scene.
    pub id: String,
    /// Type of the object in a database of known objects.
    pub r#type: ObjectType,
    /// Solid primitives making up the object.
    pub primitives: Vec<SolidPrimitive>,
    /// One pose per entry of `primitives`.
    pub primitive_poses: Vec<Pose>,
    /// Triangle meshes making up the object.
    pub meshes: Vec<Mesh>,
    /// One pose per entry of `meshes`.
    pub mesh_poses: Vec<Pose>,
    /// Planes making up the object.
    pub planes: Vec<Plane>,
    /// One pose per entry of `planes`.
    pub plane_poses: Vec<Pose>,
    /// One of [`ADD`](Self::ADD), [`REMOVE`](Self::REMOVE),
    /// [`APPEND`](Self::APPEND) or [`MOVE`](Self::MOVE).
    pub operation: i8,
}

wire_message!(CollisionObject = "moveit_msgs/CollisionObject" {
    header: "header",
    id: "id",
    r#type: "type",
    primitives: "primitives",
    primitive_poses: "primitive_poses",
    meshes: "meshes",
    mesh_poses: "mesh_poses",
    planes: "planes",
    plane_poses: "plane_poses",
    operation: "operation",
});

impl CollisionObject {
    /// Add the object, replacing any with the same id.
    pub const ADD: i8 = 0;
    /// Remove the object.
    pub const REMOVE: i8 = 1;
    /// Append geometry to an existing object.
    pub const APPEND: i8 = 2;
    /// Move an existing object, geometry ignored.
    pub const MOVE: i8 = 3;

    /// Operations in declaration order.
    pub const OPERATIONS: &'static [(&'static str, i8)] = &[
        ("ADD", Self::ADD),
        ("REMOVE", Self::REMOVE),
        ("APPEND", Self::APPEND),
        ("MOVE", Self::MOVE),
    ];

    /// Empty object named `id`, using the default `ADD` operation.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Replace the header.
    pub fn with_header(mut self, header: Header) -> Self {
        self.header = header;
        self
    }

    /// Set the scene operation (`ADD`, `REMOVE`, ...).
    pub fn with_operation(mut self, operation: i8) -> Self {
        self.operation = operation;
        self
    }

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

    /// Append a plane and its pose.
    pub fn with_plane(mut self, plane: Plane, pose: Pose) -> Self {
        self.planes.push(plane);
        self.plane_poses.push(pose);
        self
    }

    /// Symbolic name of `operation`, or `""` for an unknown value.
    pub fn operation_name(&self) -> &'static str {
        lookup_name(Self::OPERATIONS, self.operation)
    }
}

impl Default for CollisionObject {
    fn default() -> Self {
        Self {
            header: Header::default(),
            id: "collision_obj".to_owned(),
            r#type: ObjectType::default(),
            primitives: Vec::new(),
            primitive_poses: Vec::new(),
            meshes: Vec::new(),
            mesh_poses: Vec::new(),
            planes: Vec::new(),
            plane_poses: Vec::new(),
            operation: Self::ADD,
        }
    }
}

/// A [`CollisionObject`] rigidly attached to a robot link.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttachedCollisionObject {
    /// Link the object is attached to.
    pub link_name: String,
    /// The attached object.
    pub object: CollisionObject,
    /// Links the object may touch without counting as a collision.
    pub touch_links: Vec<String>,
    /// Posture of the end effector used when the object is released.
    pub detach_posture: JointTrajectory,
    /// Object weight in kilograms.
    pub weight: f64,
}

wire_message!(AttachedCollisionObject = "moveit_msgs/AttachedCollisionObject" {
    link_name: "link_name",
    object: "object",
    touch_links: "touch_links",
    detach_posture: "detach_posture",
    weight: "weight",
});

impl AttachedCollisionObject {
    /// Attach `object` to `link_name`, allowing contact with `touch_links`.
    pub fn new(
        link_name: impl Into<String>,
        object: CollisionObject,
        touch_links: Vec<String>,
    ) -> Self {
        Self {
            link_name: link_name.into(),
            object,
            touch_links,
            ..Self::default()
        }
    }
}

/// One row of an [`AllowedCollisionMatrix`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllowedCollisionEntry {
    /// One flag per matrix entry name.
    pub enabled: Vec<bool>,
}

wire_message!(AllowedCollisionEntry = "moveit_msgs/AllowedCollisionEntry" { enabled: "enabled" });

/// Square matrix of pairs whose collisions are ignored.
///
/// `entry_values` has one row per `entry_names` element and each row has one
/// column per name. The `default_*` arrays are paired the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllowedCollisionMatrix {
    /// Names indexing both rows and columns.
    pub entry_names: Vec<String>,
    /// One row per entry name.
    pub entry_values: Vec<AllowedCollisionEntry>,
    /// Names with a default collision setting.
    pub default_entry_names: Vec<String>,
    /// Default setting for each of `default_entry_names`.
    pub default_entry_values: Vec<bool>,
}

wire_message!(AllowedCollisionMatrix = "moveit_msgs/AllowedCollisionMatrix" {
    entry_names: "entry_names",
    entry_values: "entry_values",
    default_entry_names: "default_entry_names",
    default_entry_values: "default_entry_values",
});

impl AllowedCollisionMatrix {
    /// Whether collisions between `a` and `b` are allowed, if both are listed.
    pub fn is_allowed(&self, a: &str, b: &str) -> Option<bool> {
        let row = self.entry_names.iter().position(|name| name == a)?;
        let col = self.entry_names.iter().position(|name| name == b)?;
        self.entry_values.get(row)?.enabled.get(col).copied()
    }
}

/// Padding applied to one link during collision checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkPadding {
    /// Padded link.
    pub link_name: String,
    /// Padding in metres.
    pub padding: f64,
}

wire_message!(LinkPadding = "moveit_msgs/LinkPadding" {
    link_name: "link_name",
    padding: "padding",
});

/// Scaling applied to one link during collision checking.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LinkScale {
    /// Scaled link.
    pub link_name: String,
    /// Scale factor.
    pub scale: f64,
}

wire_message!(LinkScale = "moveit_msgs/LinkScale" { link_name: "link_name", scale: "scale" });

/// Display colour for a scene object.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ObjectColor {
    /// Id of the object or link the colour applies to.
    pub id: String,
    /// RGBA colour.
    pub color: ColorRGBA,
}

wire_message!(ObjectColor = "moveit_msgs/ObjectColor" { id: "id", color: "color" });
