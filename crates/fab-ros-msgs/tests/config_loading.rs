//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
use std::fs;

use anyhow::Result;
use fab_ros_msgs::moveit_msgs::CollisionObject;
use fab_ros_msgs::{CodecConfig, FieldPolicy, WireCodec, WireFormat};

#[test]
fn first_existing_candidate_is_loaded() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = dir.path().join("missing.toml");
    let present = dir.path().join("codec.toml");
    fs::write(&present, "format = \"cbor\"\npolicy = \"default_on_absent\"\n")?;

    let loaded = CodecConfig::load_with_source(&[&missing, &present])?;
    assert_eq!(loaded.source, present);
    assert_eq!(loaded.config.format, WireFormat::Cbor);
    assert_eq!(loaded.config.policy, FieldPolicy::DefaultOnAbsent);

    let codec = WireCodec::from_config(&loaded.config);
    let bytes = codec.encode(&CollisionObject::new("crate"))?;
    let decoded: CollisionObject = codec.decode(&bytes)?;
    assert_eq!(decoded.id, "crate");
    Ok(())
}

#[test]
fn no_candidates_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("nowhere.toml");
    let err = CodecConfig::load(&[missing]).unwrap_err();
    assert!(err.to_string().contains("no codec configuration found"));
}

#[test]
fn malformed_file_reports_its_path() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("broken.toml");
    fs::write(&path, "format = 12")?;
    let err = CodecConfig::load(&[&path]).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
    Ok(())
}
