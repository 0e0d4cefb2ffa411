//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
/// Implement [`RosMessage`](crate::wire::RosMessage) and
/// [`FromWire`](crate::wire::FromWire) for a record.
///
/// Each listed field is read through a [`WireReader`](crate::wire::WireReader);
/// when the policy allows absent keys the record's own `Default` supplies the
/// value, so per-type defaults (not the field type's) are honoured.
macro_rules! wire_message {
    ($ty:ident = $type_name:literal { $($field:ident : $key:literal),* $(,)? }) => {
        impl $crate::wire::RosMessage for $ty {
            const TYPE_NAME: &'static str = $type_name;
        }

        impl $crate::wire::FromWire for $ty {
            fn from_wire_with(
                value: &$crate::wire::WireValue,
                policy: $crate::wire::FieldPolicy,
            ) -> $crate::Result<Self> {
                let reader = $crate::wire::WireReader::new($type_name, value, policy)?;
                Ok(Self {
                    $($field: reader.field($key, || <$ty as Default>::default().$field)?,)*
                })
            }
        }
    };
}
