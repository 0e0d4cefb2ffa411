//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Conversion between typed records and the keyed-mapping wire form.
//!
//! Flattening is generic: any `Serialize` record becomes a [`WireValue`].
//! NaN and infinities are rejected there, since the mapping would otherwise
//! carry them as `null`.
//! Reconstruction goes through [`FromWire`], which every record implements by
//! reading each declared key with a [`WireReader`] and recursing into nested
//! records and sequences.
use serde::{Deserialize, Serialize};

use crate::{Result, SchemaError};

/// One wire value: a mapping, sequence or primitive.
pub type WireValue = serde_json::Value;

/// Keyed mapping representing a single wire message.
pub type WireMap = serde_json::Map<String, WireValue>;

/// How reconstruction treats keys missing from a wire mapping.
///
/// An explicit `null` counts as missing under either policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPolicy {
    /// Every declared key must be present.
    #[default]
    StrictPresent,
    /// Missing keys take the record's declared default.
    DefaultOnAbsent,
}

/// Static identity of a message record on the wire.
pub trait RosMessage {
    /// Package-qualified type name, e.g. `moveit_msgs/RobotState`.
    const TYPE_NAME: &'static str;
}

/// Capability to rebuild a typed value from wire data.
pub trait FromWire: Sized {
    /// Reconstruct using the default [`FieldPolicy`].
    fn from_wire(value: &WireValue) -> Result<Self> {
        Self::from_wire_with(value, FieldPolicy::default())
    }

    /// Reconstruct with an explicit policy applied at every depth.
    fn from_wire_with(value: &WireValue, policy: FieldPolicy) -> Result<Self>;
}

/// Generic flattening into wire form.
pub trait ToWire {
    /// Produce a wire value with one key per declared field.
    fn to_wire(&self) -> Result<WireValue>;
}

impl<T: Serialize + ?Sized> ToWire for T {
    fn to_wire(&self) -> Result<WireValue> {
        ensure_finite(&serde_cbor::value::to_value(self)?, &mut String::new())?;
        Ok(serde_json::to_value(self)?)
    }
}

// The CBOR value model keeps floats intact, so it is walked for NaN/inf
// before the JSON value model collapses them.
fn ensure_finite(value: &serde_cbor::Value, path: &mut String) -> Result<()> {
    use serde_cbor::Value;

    match value {
        Value::Float(v) if !v.is_finite() => Err(SchemaError::NonFiniteFloat {
            path: path.clone(),
            value: *v,
        }),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                let mark = path.len();
                path.push_str(&format!("[{index}]"));
                ensure_finite(item, path)?;
                path.truncate(mark);
            }
            Ok(())
        }
        Value::Map(entries) => {
            for (key, item) in entries {
                let mark = path.len();
                if !path.is_empty() {
                    path.push('.');
                }
                match key {
                    Value::Text(name) => path.push_str(name),
                    other => path.push_str(&format!("{other:?}")),
                }
                ensure_finite(item, path)?;
                path.truncate(mark);
            }
            Ok(())
        }
        Value::Tag(_, inner) => ensure_finite(inner, path),
        _ => Ok(()),
    }
}

/// Read-only view over one wire mapping.
#[derive(Debug, Clone, Copy)]
pub struct WireReader<'a> {
    message: &'static str,
    map: &'a WireMap,
    policy: FieldPolicy,
}

impl<'a> WireReader<'a> {
    /// Wrap `value`, failing when it is not a mapping.
    pub fn new(message: &'static str, value: &'a WireValue, policy: FieldPolicy) -> Result<Self> {
        match value {
            WireValue::Object(map) => Ok(Self {
                message,
                map,
                policy,
            }),
            other => Err(SchemaError::NotAMapping {
                message,
                found: kind_of(other),
            }),
        }
    }

    /// Reconstruct the value stored under `key`.
    ///
    /// `default` is only invoked for an absent key under
    /// [`FieldPolicy::DefaultOnAbsent`].
    pub fn field<T: FromWire>(&self, key: &'static str, default: impl FnOnce() -> T) -> Result<T> {
        match self.map.get(key) {
            Some(value) if !value.is_null() => {
                T::from_wire_with(value, self.policy).map_err(|source| SchemaError::Field {
                    message: self.message,
                    field: key,
                    source: Box::new(source),
                })
            }
            _ => match self.policy {
                FieldPolicy::StrictPresent => Err(SchemaError::MissingField {
                    message: self.message,
                    field: key,
                }),
                FieldPolicy::DefaultOnAbsent => Ok(default()),
            },
        }
    }

    /// Type name of the message being read.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Policy applied to this mapping and everything nested below it.
    pub fn policy(&self) -> FieldPolicy {
        self.policy
    }
}

/// Short label for the kind of a wire value, used in error messages.
pub fn kind_of(value: &WireValue) -> &'static str {
    match value {
        WireValue::Null => "null",
        WireValue::Bool(_) => "bool",
        WireValue::Number(_) => "number",
        WireValue::String(_) => "string",
        WireValue::Array(_) => "sequence",
        WireValue::Object(_) => "mapping",
    }
}

// Primitives are copied verbatim; the deserializer rejects mismatched kinds.
macro_rules! primitive_from_wire {
    ($($ty:ty),* $(,)?) => {$(
        impl FromWire for $ty {
            fn from_wire_with(value: &WireValue, _policy: FieldPolicy) -> Result<Self> {
                <$ty as Deserialize>::deserialize(value).map_err(|source| SchemaError::Decode {
                    expected: stringify!($ty),
                    source,
                })
            }
        }
    )*};
}

primitive_from_wire!(bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String);

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire_with(value: &WireValue, policy: FieldPolicy) -> Result<Self> {
        let items = value.as_array().ok_or_else(|| SchemaError::NotASequence {
            found: kind_of(value),
        })?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                T::from_wire_with(item, policy).map_err(|source| SchemaError::Element {
                    index,
                    source: Box::new(source),
                })
            })
            .collect()
    }
}

impl<T: FromWire, const N: usize> FromWire for [T; N] {
    fn from_wire_with(value: &WireValue, policy: FieldPolicy) -> Result<Self> {
        let items = Vec::<T>::from_wire_with(value, policy)?;
        let found = items.len();
        items
            .try_into()
            .map_err(|_| SchemaError::LengthMismatch { expected: N, found })
    }
}
