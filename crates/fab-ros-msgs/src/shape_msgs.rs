//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! [shape_msgs](http://docs.ros.org/kinetic/api/shape_msgs/html/index-msg.html)
use serde::Serialize;

use crate::constants::lookup_name;
use crate::geometry_msgs::Point;

/// A box, sphere, cylinder or cone; `dimensions` is indexed by the
/// per-shape constants below.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SolidPrimitive {
    /// Shape kind, one of `BOX`, `SPHERE`, `CYLINDER`, `CONE`.
    pub r#type: u8,
    /// Shape dimensions, indexed by the `*_X`/`*_RADIUS`/... constants.
    pub dimensions: Vec<f64>,
}

wire_message!(SolidPrimitive = "shape_msgs/SolidPrimitive" {
    r#type: "type",
    dimensions: "dimensions",
});

impl SolidPrimitive {
    /// Box, dimensions `[x, y, z]`.
    pub const BOX: u8 = 1;
    /// Sphere, dimensions `[radius]`.
    pub const SPHERE: u8 = 2;
    /// Cylinder, dimensions `[height, radius]`.
    pub const CYLINDER: u8 = 3;
    /// Cone, dimensions `[height, radius]`.
    pub const CONE: u8 = 4;

    /// Index of the box x edge.
    pub const BOX_X: usize = 0;
    /// Index of the box y edge.
    pub const BOX_Y: usize = 1;
    /// Index of the box z edge.
    pub const BOX_Z: usize = 2;

    /// Index of the sphere radius.
    pub const SPHERE_RADIUS: usize = 0;

    /// Index of the cylinder height.
    pub const CYLINDER_HEIGHT: usize = 0;
    /// Index of the cylinder radius.
    pub const CYLINDER_RADIUS: usize = 1;

    /// Index of the cone height.
    pub const CONE_HEIGHT: usize = 0;
    /// Index of the cone radius.
    pub const CONE_RADIUS: usize = 1;

    /// Shape kinds in declaration order.
    pub const TYPES: &'static [(&'static str, u8)] = &[
        ("BOX", Self::BOX),
        ("SPHERE", Self::SPHERE),
        ("CYLINDER", Self::CYLINDER),
        ("CONE", Self::CONE),
    ];

    /// Box with the given edge lengths.
    pub fn new_box(x: f64, y: f64, z: f64) -> Self {
        Self {
            r#type: Self::BOX,
            dimensions: vec![x, y, z],
        }
    }

    /// Sphere with the given radius.
    pub fn new_sphere(radius: f64) -> Self {
        Self {
            r#type: Self::SPHERE,
            dimensions: vec![radius],
        }
    }

    /// Cylinder along z.
    pub fn new_cylinder(height: f64, radius: f64) -> Self {
        Self {
            r#type: Self::CYLINDER,
            dimensions: vec![height, radius],
        }
    }

    /// Cone along z.
    pub fn new_cone(height: f64, radius: f64) -> Self {
        Self {
            r#type: Self::CONE,
            dimensions: vec![height, radius],
        }
    }

    /// Symbolic name of `type`, or `""` for an unknown value.
    pub fn type_name(&self) -> &'static str {
        lookup_name(Self::TYPES, self.r#type)
    }
}

/// Indices into [`Mesh::vertices`] forming one triangle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MeshTriangle {
    /// Indices into `Mesh::vertices`.
    pub vertex_indices: [u32; 3],
}

wire_message!(MeshTriangle = "shape_msgs/MeshTriangle" { vertex_indices: "vertex_indices" });

/// Triangle mesh.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    /// Faces.
    pub triangles: Vec<MeshTriangle>,
    /// Vertex positions.
    pub vertices: Vec<Point>,
}

wire_message!(Mesh = "shape_msgs/Mesh" { triangles: "triangles", vertices: "vertices" });

/// Plane `a*x + b*y + c*z + d = 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Plane {
    /// Coefficients `a, b, c, d` of `ax + by + cz + d = 0`.
    pub coef: [f64; 4],
}

wire_message!(Plane = "shape_msgs/Plane" { coef: "coef" });
