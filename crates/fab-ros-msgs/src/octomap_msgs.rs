//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! [octomap_msgs](http://docs.ros.org/kinetic/api/octomap_msgs/html/index-msg.html)
use serde::Serialize;

use crate::geometry_msgs::Pose;
use crate::std_msgs::Header;

/// Serialized octree. `data` is opaque to this crate.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Octomap {
    /// Frame and time of the map.
    pub header: Header,
    /// True when `data` holds only occupied/free bits.
    pub binary: bool,
    /// Class id of the serialized tree.
    pub id: String,
    /// Leaf size in metres.
    pub resolution: f64,
    /// Serialised tree.
    pub data: Vec<i8>,
}

wire_message!(Octomap = "octomap_msgs/Octomap" {
    header: "header",
    binary: "binary",
    id: "id",
    resolution: "resolution",
    data: "data",
});

/// An [`Octomap`] placed at `origin` in `header.frame_id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OctomapWithPose {
    /// Frame of `origin`.
    pub header: Header,
    /// Pose of the map origin.
    pub origin: Pose,
    /// The map.
    pub octomap: Octomap,
}

wire_message!(OctomapWithPose = "octomap_msgs/OctomapWithPose" {
    header: "header",
    origin: "origin",
    octomap: "octomap",
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::{FromWire, ToWire};

    #[test]
    fn signed_payload_bytes_survive() {
        let map = OctomapWithPose {
            octomap: Octomap {
                binary: true,
                id: "OcTree".into(),
                resolution: 0.05,
                data: vec![-128, 0, 127],
                ..Octomap::default()
            },
            ..OctomapWithPose::default()
        };
        let rebuilt =
            OctomapWithPose::from_wire(&map.to_wire().expect("flatten")).expect("rebuild");
        assert_eq!(rebuilt, map);
    }
}
