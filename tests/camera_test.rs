use cgmath::{Deg, InnerSpace, Vector3};
use indoor_ar::camera::{Camera, Projection};

const EPS: f32 = 1e-5;

fn assert_vec3_near(a: Vector3<f32>, b: Vector3<f32>) {
    assert!(
        (a - b).magnitude() < EPS,
        "vectors differ: {:?} vs {:?}",
        a,
        b
    );
}

#[test]
fn resize_updates_aspect_exactly() {
    let mut projection = Projection::new(1920, 1080, Deg(70.0), 0.01, 20.0);
    assert_eq!(projection.aspect, 1920.0 / 1080.0);

    projection.resize(1024, 768);
    assert_eq!(projection.aspect, 1024.0 / 768.0);
}

#[test]
fn resize_is_idempotent() {
    let mut projection = Projection::new(800, 600, Deg(70.0), 0.01, 20.0);
    projection.resize(800, 600);
    let first = projection.aspect;
    projection.resize(800, 600);
    assert_eq!(projection.aspect, first);
}

#[test]
fn start_pose_looks_down_negative_z() {
    let camera = Camera::new((0.0, 0.0, 5.0), Deg(-90.0), Deg(0.0));
    assert_vec3_near(camera.forward(), Vector3::new(0.0, 0.0, -1.0));

    // With the view axis on -Z the pointer orientation is the identity.
    let orientation = camera.orientation();
    assert!((orientation.s - 1.0).abs() < EPS);
    assert!(orientation.v.magnitude() < EPS);
}

#[test]
fn orientation_maps_local_forward_onto_view_direction() {
    let camera = Camera::new((1.0, 2.0, 3.0), Deg(-45.0), Deg(20.0));
    let rotated = camera.orientation() * Vector3::new(0.0, 0.0, -1.0);
    assert_vec3_near(rotated, camera.forward());
}

#[test]
fn world_transform_carries_position_and_orientation() {
    let camera = Camera::new((0.0, 1.6, 5.0), Deg(-90.0), Deg(0.0));
    let pose = camera.world_transform();
    assert_eq!(pose.position, Vector3::new(0.0, 1.6, 5.0));
    assert_eq!(pose.scale, Vector3::new(1.0, 1.0, 1.0));
    assert_eq!(pose.rotation, camera.orientation());
}
