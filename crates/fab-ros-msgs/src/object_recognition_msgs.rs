//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
//! [object_recognition_msgs](http://docs.ros.org/kinetic/api/object_recognition_msgs/html/index-msg.html)
use serde::Serialize;

/// Key of an object type in a database of known objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ObjectType {
    /// Object key in the database.
    pub key: String,
    /// Database description.
    pub db: String,
}

wire_message!(ObjectType = "object_recognition_msgs/ObjectType" { key: "key", db: "db" });
