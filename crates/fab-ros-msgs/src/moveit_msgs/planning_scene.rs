//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Planning scenes and the bitmask used to request parts of one.
use std::fmt;

use serde::Serialize;

use crate::constants::NamedConstants;
use crate::geometry_msgs::TransformStamped;
use crate::moveit_msgs::{
    AllowedCollisionMatrix, CollisionObject, LinkPadding, LinkScale, ObjectColor, RobotState,
};
use crate::octomap_msgs::OctomapWithPose;

/// Everything in a scene that is not part of the robot.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanningSceneWorld {
    /// Objects in the world.
    pub collision_objects: Vec<CollisionObject>,
    /// Occupancy map of the world.
    pub octomap: OctomapWithPose,
}

wire_message!(PlanningSceneWorld = "moveit_msgs/PlanningSceneWorld" {
    collision_objects: "collision_objects",
    octomap: "octomap",
});

/// Full or partial planning scene state.
///
/// `is_diff` has the same meaning as on [`RobotState`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlanningScene {
    /// Scene name.
    pub name: String,
    /// Current robot state.
    pub robot_state: RobotState,
    /// Name of the robot model.
    pub robot_model_name: String,
    /// Transforms between fixed frames.
    pub fixed_frame_transforms: Vec<TransformStamped>,
    /// Pairs allowed to collide.
    pub allowed_collision_matrix: AllowedCollisionMatrix,
    /// Per-link padding.
    pub link_padding: Vec<LinkPadding>,
    /// Per-link scaling.
    pub link_scale: Vec<LinkScale>,
    /// Display colours.
    pub object_colors: Vec<ObjectColor>,
    /// World geometry.
    pub world: PlanningSceneWorld,
    /// True when this scene is a diff against the current one.
    pub is_diff: bool,
}

wire_message!(PlanningScene = "moveit_msgs/PlanningScene" {
    name: "name",
    robot_state: "robot_state",
    robot_model_name: "robot_model_name",
    fixed_frame_transforms: "fixed_frame_transforms",
    allowed_collision_matrix: "allowed_collision_matrix",
    link_padding: "link_padding",
    link_scale: "link_scale",
    object_colors: "object_colors",
    world: "world",
    is_diff: "is_diff",
});

impl PlanningScene {
    /// Diff scene that applies `objects` to the world, leaving the rest untouched.
    pub fn world_diff(objects: Vec<CollisionObject>) -> Self {
        Self {
            world: PlanningSceneWorld {
                collision_objects: objects,
                ..PlanningSceneWorld::default()
            },
            robot_state: RobotState::default().as_diff(),
            is_diff: true,
            ..Self::default()
        }
    }

    /// Collision object named `id`, if the world contains one.
    pub fn collision_object(&self, id: &str) -> Option<&CollisionObject> {
        self.world
            .collision_objects
            .iter()
            .find(|object| object.id == id)
    }
}

/// Bitmask selecting which parts of a scene to fetch.
///
/// Compares equal to a raw `u32` so it can be checked against the flag
/// constants directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlanningSceneComponents {
    /// Raw bitmask.
    pub components: u32,
}

wire_message!(PlanningSceneComponents = "moveit_msgs/PlanningSceneComponents" {
    components: "components",
});

impl PlanningSceneComponents {
    /// Scene name, model name and fixed frame transforms.
    pub const SCENE_SETTINGS: u32 = 1;
    /// Joint values of the robot state.
    pub const ROBOT_STATE: u32 = 2;
    /// Objects attached to the robot.
    pub const ROBOT_STATE_ATTACHED_OBJECTS: u32 = 4;
    /// Names of world objects.
    pub const WORLD_OBJECT_NAMES: u32 = 8;
    /// Geometry of world objects.
    pub const WORLD_OBJECT_GEOMETRY: u32 = 16;
    /// The occupancy map.
    pub const OCTOMAP: u32 = 32;
    /// Fixed frame transforms.
    pub const TRANSFORMS: u32 = 64;
    /// The allowed collision matrix.
    pub const ALLOWED_COLLISION_MATRIX: u32 = 128;
    /// Link padding and scaling.
    pub const LINK_PADDING_AND_SCALING: u32 = 256;
    /// Object colours.
    pub const OBJECT_COLORS: u32 = 512;

    /// Wrap a raw bitmask.
    pub fn new(components: u32) -> Self {
        Self { components }
    }

    /// Every flag set.
    pub fn all() -> Self {
        Self::new(Self::NAMED.iter().fold(0, |mask, (_, flag)| mask | flag))
    }

    /// Copy with `flag` added.
    pub fn with(self, flag: u32) -> Self {
        Self::new(self.components | flag)
    }

    /// Whether every bit of `flag` is set. The empty flag is never contained.
    pub fn contains(&self, flag: u32) -> bool {
        flag != 0 && self.components & flag == flag
    }

    /// Names of the individual flags that are set, in declaration order.
    pub fn flag_names(&self) -> Vec<&'static str> {
        Self::NAMED
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(name, _)| *name)
            .collect()
    }
}

impl NamedConstants for PlanningSceneComponents {
    type Value = u32;

    const NAMED: &'static [(&'static str, u32)] = &[
        ("SCENE_SETTINGS", Self::SCENE_SETTINGS),
        ("ROBOT_STATE", Self::ROBOT_STATE),
        ("ROBOT_STATE_ATTACHED_OBJECTS", Self::ROBOT_STATE_ATTACHED_OBJECTS),
        ("WORLD_OBJECT_NAMES", Self::WORLD_OBJECT_NAMES),
        ("WORLD_OBJECT_GEOMETRY", Self::WORLD_OBJECT_GEOMETRY),
        ("OCTOMAP", Self::OCTOMAP),
        ("TRANSFORMS", Self::TRANSFORMS),
        ("ALLOWED_COLLISION_MATRIX", Self::ALLOWED_COLLISION_MATRIX),
        ("LINK_PADDING_AND_SCALING", Self::LINK_PADDING_AND_SCALING),
        ("OBJECT_COLORS", Self::OBJECT_COLORS),
    ];

    fn value(&self) -> u32 {
        self.components
    }
}

impl Default for PlanningSceneComponents {
    fn default() -> Self {
        Self::new(Self::SCENE_SETTINGS)
    }
}

impl PartialEq<u32> for PlanningSceneComponents {
    fn eq(&self, other: &u32) -> bool {
        self.components == *other
    }
}

impl PartialEq<PlanningSceneComponents> for u32 {
    fn eq(&self, other: &PlanningSceneComponents) -> bool {
        *self == other.components
    }
}

impl From<u32> for PlanningSceneComponents {
    fn from(components: u32) -> Self {
        Self::new(components)
    }
}

impl From<PlanningSceneComponents> for u32 {
    fn from(value: PlanningSceneComponents) -> Self {
        value.components
    }
}

impl fmt::Display for PlanningSceneComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = self.flag_names();
        if names.is_empty() {
            write!(f, "{}", self.components)
        } else {
            write!(f, "{}", names.join("|"))
        }
    }
}
