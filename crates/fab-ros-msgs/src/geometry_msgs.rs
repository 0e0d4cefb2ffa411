//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! [geometry_msgs](http://docs.ros.org/kinetic/api/geometry_msgs/html/index-msg.html)
use serde::Serialize;

use crate::std_msgs::Header;

/// Position in free space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

wire_message!(Point = "geometry_msgs/Point" { x: "x", y: "y", z: "z" });

impl Point {
    /// Point at `(x, y, z)`.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Direction or magnitude in free space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

wire_message!(Vector3 = "geometry_msgs/Vector3" { x: "x", y: "y", z: "z" });

impl Vector3 {
    /// Vector with the given components.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Orientation in free space, in quaternion form.
///
/// Defaults to the identity rotation rather than the all-zero quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quaternion {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// Scalar component.
    pub w: f64,
}

wire_message!(Quaternion = "geometry_msgs/Quaternion" { x: "x", y: "y", z: "z", w: "w" });

impl Quaternion {
    /// Quaternion from raw components, not normalised.
    pub fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }
}

/// Position plus orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Pose {
    /// Translation from the frame origin.
    pub position: Point,
    /// Rotation relative to the frame.
    pub orientation: Quaternion,
}

wire_message!(Pose = "geometry_msgs/Pose" {
    position: "position",
    orientation: "orientation",
});

/// A [`Pose`] with a reference coordinate frame and timestamp.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PoseStamped {
    /// Frame and time of the pose.
    pub header: Header,
    /// The pose itself.
    pub pose: Pose,
}

wire_message!(PoseStamped = "geometry_msgs/PoseStamped" { header: "header", pose: "pose" });

/// Rigid transform between two frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Transform {
    /// Translation part.
    pub translation: Vector3,
    /// Rotation part.
    pub rotation: Quaternion,
}

wire_message!(Transform = "geometry_msgs/Transform" {
    translation: "translation",
    rotation: "rotation",
});

/// Transform from `header.frame_id` to `child_frame_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransformStamped {
    /// Parent frame and time.
    pub header: Header,
    /// Frame the transform maps into the parent.
    pub child_frame_id: String,
    /// The transform itself.
    pub transform: Transform,
}

wire_message!(TransformStamped = "geometry_msgs/TransformStamped" {
    header: "header",
    child_frame_id: "child_frame_id",
    transform: "transform",
});

/// Linear and angular velocity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Twist {
    /// Linear velocity.
    pub linear: Vector3,
    /// Angular velocity.
    pub angular: Vector3,
}

wire_message!(Twist = "geometry_msgs/Twist" { linear: "linear", angular: "angular" });

/// Force and torque.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Wrench {
    /// Force vector.
    pub force: Vector3,
    /// Torque vector.
    pub torque: Vector3,
}

wire_message!(Wrench = "geometry_msgs/Wrench" { force: "force", torque: "torque" });

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::wire::{FromWire, ToWire};

    #[test]
    fn default_orientation_is_identity() {
        assert_eq!(Pose::default().orientation, Quaternion::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn pose_stamped_survives_flatten_and_rebuild() {
        let original = PoseStamped {
            header: Header::with_frame("base_link"),
            pose: Pose {
                position: Point::new(0.42, -0.025, 0.459),
                orientation: Quaternion::new(0.0, 1.0, 0.0, 0.0),
            },
        };
        let wire = original.to_wire().expect("flatten");
        assert_eq!(wire["pose"]["position"]["x"], json!(0.42));
        let rebuilt = PoseStamped::from_wire(&wire).expect("rebuild");
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn integer_coordinates_are_accepted_for_floats() {
        let v = Vector3::from_wire(&json!({"x": 1, "y": 2, "z": 3})).expect("vector");
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }
}
