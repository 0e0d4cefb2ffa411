//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Typed records mirroring the MoveIt motion-planning message schemas and the
//! supporting ROS packages they nest (`std_msgs`, `geometry_msgs`, ...).
//!
//! Every record implements [`wire::FromWire`] so a rosbridge-style keyed
//! mapping can be reconstructed into a typed object graph, and is
//! `serde::Serialize` so it can be flattened back through [`wire::ToWire`].
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod codec;
pub mod config;
pub mod constants;
pub mod geometry_msgs;
pub mod metrics;
pub mod moveit_msgs;
pub mod object_recognition_msgs;
pub mod octomap_msgs;
pub mod sensor_msgs;
pub mod shape_msgs;
pub mod std_msgs;
pub mod trajectory_msgs;
pub mod wire;

/// Shared result type for schema and codec operations.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while reconstructing, encoding or decoding messages.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A key declared by the local schema is absent from the wire mapping.
    #[error("{message}: missing field `{field}`")]
    MissingField {
        /// Message type being reconstructed.
        message: &'static str,
        /// Key that was looked up.
        field: &'static str,
    },
    /// A message was expected but the wire value is not a mapping.
    #[error("{message}: expected a mapping, found {found}")]
    NotAMapping {
        /// Message type being reconstructed.
        message: &'static str,
        /// Kind of wire value that was found instead.
        found: &'static str,
    },
    /// A repeated field was expected but the wire value is not a sequence.
    #[error("expected a sequence, found {found}")]
    NotASequence {
        /// Kind of wire value that was found instead.
        found: &'static str,
    },
    /// A fixed-size array field has the wrong number of elements.
    #[error("expected {expected} elements, found {found}")]
    LengthMismatch {
        /// Declared array length.
        expected: usize,
        /// Length present on the wire.
        found: usize,
    },
    /// A primitive value could not be read as its declared type.
    #[error("invalid {expected} value: {source}")]
    Decode {
        /// Declared primitive type.
        expected: &'static str,
        /// Underlying deserializer error.
        #[source]
        source: serde_json::Error,
    },
    /// Failure inside a nested field.
    #[error("{message}.{field}: {source}")]
    Field {
        /// Message type owning the field.
        message: &'static str,
        /// Field whose value failed to reconstruct.
        field: &'static str,
        /// Failure raised by the nested value.
        #[source]
        source: Box<SchemaError>,
    },
    /// Failure inside one element of a repeated field.
    #[error("[{index}]: {source}")]
    Element {
        /// Position of the offending element.
        index: usize,
        /// Failure raised by the element.
        #[source]
        source: Box<SchemaError>,
    },
    /// A float field holds NaN or an infinity, which the wire form cannot carry.
    #[error("non-finite float {value} at `{path}`")]
    NonFiniteFloat {
        /// Dotted field path to the value, e.g. `joint_constraints[0].tolerance_above`.
        path: String,
        /// The offending value.
        value: f64,
    },
    /// The message schema is not supported.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
    /// Wrapper for JSON serialization or deserialization problems.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Wrapper for CBOR serialization or deserialization problems.
    #[error("cbor error: {0}")]
    Cbor(#[from] serde_cbor::Error),
}

impl SchemaError {
    /// Innermost error, skipping the `Field`/`Element` wrappers.
    pub fn root_cause(&self) -> &SchemaError {
        let mut current = self;
        while let SchemaError::Field { source, .. } | SchemaError::Element { source, .. } = current
        {
            current = source.as_ref();
        }
        current
    }

    /// True when the failure is a missing key at any depth.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.root_cause(), SchemaError::MissingField { .. })
    }

    /// Dotted field path to the failure, e.g. `world.collision_objects[1].id`.
    pub fn path(&self) -> String {
        let mut path = String::new();
        let mut current = self;
        loop {
            match current {
                SchemaError::Field { field, source, .. } => {
                    push_segment(&mut path, field);
                    current = source.as_ref();
                }
                SchemaError::Element { index, source } => {
                    path.push_str(&format!("[{index}]"));
                    current = source.as_ref();
                }
                SchemaError::MissingField { field, .. } => {
                    push_segment(&mut path, field);
                    break;
                }
                SchemaError::NonFiniteFloat { path: inner, .. } => {
                    push_segment(&mut path, inner);
                    break;
                }
                _ => break,
            }
        }
        path
    }
}

fn push_segment(path: &mut String, segment: &str) {
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(segment);
}

pub use codec::{WireCodec, WireFormat};
pub use config::{CodecConfig, LoadedCodecConfig};
pub use constants::{lookup_name, lookup_value, NamedConstants};
pub use metrics::CodecMetrics;
pub use wire::{FieldPolicy, FromWire, RosMessage, ToWire, WireMap, WireReader, WireValue};

#[cfg(test)]
mod tests {
    use super::*;

    fn nested_missing() -> SchemaError {
        SchemaError::Field {
            message: "moveit_msgs/PlanningScene",
            field: "world",
            source: Box::new(SchemaError::Field {
                message: "moveit_msgs/PlanningSceneWorld",
                field: "collision_objects",
                source: Box::new(SchemaError::Element {
                    index: 1,
                    source: Box::new(SchemaError::MissingField {
                        message: "moveit_msgs/CollisionObject",
                        field: "id",
                    }),
                }),
            }),
        }
    }

    #[test]
    fn root_cause_and_path_walk_wrappers() {
        let err = nested_missing();
        assert!(err.is_missing_field());
        assert!(matches!(
            err.root_cause(),
            SchemaError::MissingField { field: "id", .. }
        ));
        assert_eq!(err.path(), "world.collision_objects[1].id");
    }

    #[test]
    fn display_names_the_full_chain() {
        let rendered = nested_missing().to_string();
        assert!(rendered.starts_with("moveit_msgs/PlanningScene.world: "));
        assert!(rendered.ends_with("moveit_msgs/CollisionObject: missing field `id`"));
    }

    #[test]
    fn non_lookup_errors_are_not_missing_fields() {
        let err = SchemaError::NotImplemented("moveit_msgs/VisibilityConstraint");
        assert!(!err.is_missing_field());
        assert_eq!(err.path(), "");
    }

    #[test]
    fn non_finite_float_reports_its_path() {
        let err = SchemaError::NonFiniteFloat {
            path: "joint_constraints[0].tolerance_above".into(),
            value: f64::INFINITY,
        };
        assert_eq!(err.path(), "joint_constraints[0].tolerance_above");
        assert_eq!(
            err.to_string(),
            "non-finite float inf at `joint_constraints[0].tolerance_above`"
        );
    }
}
