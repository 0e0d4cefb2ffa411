//! ---
//! fab_section: "02-message-schemas"
//! fab_subsection: "module"
//! fab_type: "source"
//! fab_scope: "code"
//! fab_description: "Message schema records and wire reconstruction."
//! fab_version: "v0.1.0"
//! fab_owner: "motion-planning"
//! ---
use fab_ros_msgs::geometry_msgs::{
    Point, Pose, PoseStamped, Quaternion, Transform, TransformStamped, Twist, Vector3, Wrench,
};
use fab_ros_msgs::moveit_msgs::{
    AllowedCollisionEntry, AllowedCollisionMatrix, AttachedCollisionObject, CollisionObject,
    Constraints, JointConstraint, LinkPadding, LinkScale, MoveItErrorCodes, ObjectColor,
    PlannerParams, PlanningScene, PlanningSceneComponents, PlanningSceneWorld, PositionIKRequest,
    RobotState, RobotTrajectory, VisibilityConstraint,
};
use fab_ros_msgs::octomap_msgs::{Octomap, OctomapWithPose};
use fab_ros_msgs::sensor_msgs::{JointState, MultiDOFJointState};
use fab_ros_msgs::shape_msgs::{Mesh, MeshTriangle, Plane, SolidPrimitive};
use fab_ros_msgs::std_msgs::{ColorRGBA, Duration, Header, Time};
use fab_ros_msgs::trajectory_msgs::{
    JointTrajectory, JointTrajectoryPoint, MultiDOFJointTrajectory, MultiDOFJointTrajectoryPoint,
};
use fab_ros_msgs::{
    FieldPolicy, FromWire, NamedConstants, SchemaError, ToWire, WireCodec, WireFormat,
};
use serde_json::json;

fn header(frame: &str, seq: u32) -> Header {
    Header {
        seq,
        stamp: Time::new(1_700_000_000, 250),
        frame_id: frame.to_owned(),
    }
}

fn table(id: &str, z: f64) -> CollisionObject {
    CollisionObject::new(id)
        .with_header(header("world", 1))
        .with_primitive(
            SolidPrimitive::new_box(1.2, 0.8, 0.05),
            Pose {
                position: Point::new(0.6, 0.0, z),
                orientation: Quaternion::default(),
            },
        )
        .with_mesh(
            Mesh {
                triangles: vec![MeshTriangle {
                    vertex_indices: [0, 1, 2],
                }],
                vertices: vec![
                    Point::new(0.0, 0.0, 0.0),
                    Point::new(1.0, 0.0, 0.0),
                    Point::new(0.0, 1.0, 0.0),
                ],
            },
            Pose::default(),
        )
        .with_plane(
            Plane {
                coef: [0.0, 0.0, 1.0, -z],
            },
            Pose::default(),
        )
}

fn robot_state() -> RobotState {
    let joint_names: Vec<String> = [
        "shoulder_pan_joint",
        "shoulder_lift_joint",
        "elbow_joint",
        "wrist_1_joint",
        "wrist_2_joint",
        "wrist_3_joint",
    ]
    .iter()
    .map(|name| name.to_string())
    .collect();
    let joint_state = JointState {
        header: header("base_link", 2),
        name: joint_names.clone(),
        position: vec![3.39, -1.47, -2.05, 0.38, -4.96, -6.28],
        velocity: vec![0.0; 6],
        effort: Vec::new(),
    };
    let multi_dof = MultiDOFJointState {
        header: header("base_link", 3),
        joint_names: vec!["virtual_joint".into()],
        transforms: vec![Transform {
            translation: Vector3::new(0.1, 0.2, 0.3),
            rotation: Quaternion::new(0.0, 0.0, 0.7071, 0.7071),
        }],
        twist: vec![Twist::default()],
        wrench: vec![Wrench {
            force: Vector3::new(0.0, 0.0, -9.81),
            torque: Vector3::default(),
        }],
    };
    let mut state = RobotState::new(joint_state, multi_dof);
    state.attached_collision_objects.push(AttachedCollisionObject {
        link_name: "tool0".into(),
        object: table("gripper_payload", 0.0),
        touch_links: vec!["finger_left".into(), "finger_right".into()],
        detach_posture: JointTrajectory {
            header: header("tool0", 4),
            joint_names: vec!["finger_joint".into()],
            points: vec![JointTrajectoryPoint {
                positions: vec![0.04],
                time_from_start: Duration::new(0, 500_000_000),
                ..JointTrajectoryPoint::default()
            }],
        },
        weight: 0.35,
    });
    state
}

fn full_scene() -> PlanningScene {
    PlanningScene {
        name: "bench".into(),
        robot_state: robot_state(),
        robot_model_name: "ur5".into(),
        fixed_frame_transforms: vec![TransformStamped {
            header: header("world", 5),
            child_frame_id: "base_link".into(),
            transform: Transform::default(),
        }],
        allowed_collision_matrix: AllowedCollisionMatrix {
            entry_names: vec!["base_link".into(), "table".into()],
            entry_values: vec![
                AllowedCollisionEntry {
                    enabled: vec![false, true],
                },
                AllowedCollisionEntry {
                    enabled: vec![true, false],
                },
            ],
            default_entry_names: vec!["table".into()],
            default_entry_values: vec![true],
        },
        link_padding: vec![LinkPadding {
            link_name: "tool0".into(),
            padding: 0.01,
        }],
        link_scale: vec![LinkScale {
            link_name: "tool0".into(),
            scale: 1.1,
        }],
        object_colors: vec![ObjectColor {
            id: "table".into(),
            color: ColorRGBA {
                r: 0.5,
                g: 0.25,
                b: 0.0,
                a: 1.0,
            },
        }],
        world: PlanningSceneWorld {
            collision_objects: vec![table("table", 0.0), table("shelf", 0.9)],
            octomap: OctomapWithPose {
                header: header("world", 6),
                origin: Pose::default(),
                octomap: Octomap {
                    header: header("world", 6),
                    binary: true,
                    id: "OcTree".into(),
                    resolution: 0.02,
                    data: vec![1, -1, 0, 64],
                },
            },
        },
        is_diff: false,
    }
}

#[test]
fn default_instances_never_share_containers() {
    let mut first = CollisionObject::default();
    let second = CollisionObject::default();
    first.primitives.push(SolidPrimitive::new_sphere(0.1));
    first.primitive_poses.push(Pose::default());
    assert!(second.primitives.is_empty());
    assert!(second.primitive_poses.is_empty());

    let mut scene_a = PlanningScene::default();
    let scene_b = PlanningScene::default();
    scene_a.world.collision_objects.push(CollisionObject::default());
    scene_a.robot_state.joint_state.name.push("j1".into());
    assert!(scene_b.world.collision_objects.is_empty());
    assert!(scene_b.robot_state.joint_state.name.is_empty());
}

#[test]
fn deeply_nested_scene_round_trips_through_wire_form() {
    let scene = full_scene();
    let wire = scene.to_wire().expect("flatten");
    let rebuilt = PlanningScene::from_wire(&wire).expect("rebuild");
    assert_eq!(rebuilt, scene);
    // Reconstruction reads the mapping without touching it.
    assert_eq!(wire, scene.to_wire().expect("flatten again"));
}

#[test]
fn deeply_nested_scene_round_trips_through_both_codecs() {
    let scene = full_scene();
    for format in [WireFormat::Json, WireFormat::Cbor] {
        let codec = WireCodec::new(format, FieldPolicy::StrictPresent);
        let bytes = codec.encode(&scene).expect("encode");
        let decoded: PlanningScene = codec.decode(&bytes).expect("decode");
        assert_eq!(decoded, scene, "format {}", format.as_str());
    }
}

#[test]
fn other_composite_messages_round_trip() {
    let request = PositionIKRequest::new("manipulator")
        .with_robot_state(robot_state())
        .with_constraints(Constraints {
            name: "keep_elbow".into(),
            joint_constraints: vec![JointConstraint::new("elbow_joint", -2.05, 0.1)],
            ..Constraints::default()
        })
        .with_pose(PoseStamped {
            header: header("base_link", 7),
            pose: Pose {
                position: Point::new(0.42, -0.025, 0.459),
                orientation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
            },
        });
    let rebuilt = PositionIKRequest::from_wire(&request.to_wire().expect("flatten"))
        .expect("rebuild");
    assert_eq!(rebuilt, request);

    let trajectory = RobotTrajectory {
        joint_trajectory: robot_state().attached_collision_objects[0]
            .detach_posture
            .clone(),
        multi_dof_joint_trajectory: MultiDOFJointTrajectory {
            header: header("world", 8),
            joint_names: vec!["virtual_joint".into()],
            points: vec![MultiDOFJointTrajectoryPoint {
                transforms: vec![Transform::default()],
                velocities: vec![Twist::default()],
                accelerations: Vec::new(),
                time_from_start: Duration::new(2, 0),
            }],
        },
    };
    let rebuilt = RobotTrajectory::from_wire(&trajectory.to_wire().expect("flatten"))
        .expect("rebuild");
    assert_eq!(rebuilt, trajectory);

    let mut params = PlannerParams::default();
    params.insert("range", "0.5");
    let rebuilt = PlannerParams::from_wire(&params.to_wire().expect("flatten")).expect("rebuild");
    assert_eq!(rebuilt, params);
}

#[test]
fn error_codes_compare_against_integers() {
    let code = MoveItErrorCodes::new(1);
    assert!(code == 1);
    assert!(code != 99999);
    assert_eq!(code.human_readable(), "SUCCESS");
}

#[test]
fn scene_components_resolve_exact_flags_only() {
    assert_eq!(
        PlanningSceneComponents::new(8).human_readable(),
        "WORLD_OBJECT_NAMES"
    );
    assert_eq!(PlanningSceneComponents::new(3).human_readable(), "");
}

#[test]
fn robot_state_without_is_diff_fails_lookup() {
    let mut wire = robot_state().to_wire().expect("flatten");
    wire.as_object_mut().expect("mapping").remove("is_diff");
    let err = RobotState::from_wire(&wire).unwrap_err();
    assert!(err.is_missing_field());
    assert_eq!(err.path(), "is_diff");

    // The lenient policy falls back to the declared default instead.
    let state = RobotState::from_wire_with(&wire, FieldPolicy::DefaultOnAbsent).expect("lenient");
    assert!(!state.is_diff);
}

#[test]
fn visibility_constraint_is_never_constructed() {
    assert!(matches!(
        VisibilityConstraint::new(),
        Err(SchemaError::NotImplemented(_))
    ));
    for payload in [json!({}), json!(null), json!({"target_radius": 1.0})] {
        assert!(matches!(
            VisibilityConstraint::from_wire(&payload),
            Err(SchemaError::NotImplemented(_))
        ));
    }
}

#[test]
fn scene_world_objects_rebuild_in_order() {
    let scene = PlanningScene::world_diff(vec![table("first", 0.1), table("second", 0.2)]);
    let wire = scene.to_wire().expect("flatten");
    assert_eq!(wire["world"]["collision_objects"].as_array().map(Vec::len), Some(2));

    let rebuilt = PlanningScene::from_wire(&wire).expect("rebuild");
    let objects = &rebuilt.world.collision_objects;
    assert_eq!(objects.len(), 2);
    assert_eq!(objects[0].id, "first");
    assert_eq!(objects[1].id, "second");
    for (object, original) in objects.iter().zip(&scene.world.collision_objects) {
        assert_eq!(object, original);
        let again = CollisionObject::from_wire(&object.to_wire().expect("flatten"))
            .expect("rebuild");
        assert_eq!(&again, original);
    }
}

#[test]
fn nested_failures_report_their_path() {
    let mut wire = full_scene().to_wire().expect("flatten");
    wire["world"]["collision_objects"][1]
        .as_object_mut()
        .expect("mapping")
        .remove("operation");
    let err = PlanningScene::from_wire(&wire).unwrap_err();
    assert!(err.is_missing_field());
    assert_eq!(err.path(), "world.collision_objects[1].operation");
    assert!(matches!(
        err.root_cause(),
        SchemaError::MissingField {
            message: "moveit_msgs/CollisionObject",
            field: "operation"
        }
    ));
}

#[test]
fn explicit_null_counts_as_absent() {
    let mut wire = full_scene().to_wire().expect("flatten");
    wire["name"] = json!(null);
    assert!(PlanningScene::from_wire(&wire)
        .unwrap_err()
        .is_missing_field());
    let scene =
        PlanningScene::from_wire_with(&wire, FieldPolicy::DefaultOnAbsent).expect("lenient");
    assert_eq!(scene.name, "");
    assert_eq!(scene.world, full_scene().world);
}

#[test]
fn non_finite_floats_are_rejected_when_flattening() {
    let joint = JointConstraint {
        tolerance_above: f64::INFINITY,
        ..JointConstraint::new("elbow", 0.5, 0.1)
    };
    let constraints = Constraints {
        joint_constraints: vec![JointConstraint::new("shoulder", 0.0, 0.1), joint],
        ..Constraints::named("reach")
    };

    let err = constraints.to_wire().unwrap_err();
    assert!(matches!(err, SchemaError::NonFiniteFloat { value, .. } if value.is_infinite()));
    assert_eq!(err.path(), "joint_constraints[1].tolerance_above");

    for format in [WireFormat::Json, WireFormat::Cbor] {
        let codec = WireCodec::new(format, FieldPolicy::DefaultOnAbsent);
        let err = codec.encode(&constraints).unwrap_err();
        assert_eq!(err.path(), "joint_constraints[1].tolerance_above", "{format:?}");
    }

    let nan = JointConstraint {
        position: f64::NAN,
        ..JointConstraint::default()
    };
    let err = nan.to_wire().unwrap_err();
    assert_eq!(err.path(), "position");

    let finite = JointConstraint::new("elbow", -1.5e300, f64::MAX);
    let rebuilt = JointConstraint::from_wire(&finite.to_wire().expect("flatten")).expect("rebuild");
    assert_eq!(rebuilt, finite);
}
