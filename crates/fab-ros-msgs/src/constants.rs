//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! Ordered `(name, value)` tables backing the symbolic view of integer fields.

/// A message whose single integer field has named values.
pub trait NamedConstants {
    /// Integer type carried on the wire.
    type Value: Copy + PartialEq + 'static;

    /// Named constants in declaration order.
    const NAMED: &'static [(&'static str, Self::Value)];

    /// Raw value held by this instance.
    fn value(&self) -> Self::Value;

    /// Name of the first constant equal to the held value, or `""`.
    fn human_readable(&self) -> &'static str {
        lookup_name(Self::NAMED, self.value())
    }
}

/// First name in `table` whose value equals `value`, or `""` when none does.
pub fn lookup_name<V: PartialEq>(table: &'static [(&'static str, V)], value: V) -> &'static str {
    table
        .iter()
        .find(|(_, candidate)| *candidate == value)
        .map(|(name, _)| *name)
        .unwrap_or("")
}

/// Value registered under `name`, if any.
pub fn lookup_value<V: Copy>(table: &'static [(&'static str, V)], name: &str) -> Option<V> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, value)| *value)
}
