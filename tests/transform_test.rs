use cgmath::{Deg, One, Quaternion, Rotation3, Vector3};
use indoor_ar::data_structures::transform::Transform;

const EPS: f32 = 1e-5;

fn assert_matrix_near(a: cgmath::Matrix4<f32>, b: cgmath::Matrix4<f32>) {
    let a: [[f32; 4]; 4] = a.into();
    let b: [[f32; 4]; 4] = b.into();
    for col in 0..4 {
        for row in 0..4 {
            assert!(
                (a[col][row] - b[col][row]).abs() < EPS,
                "matrices differ at [{}][{}]: {} vs {}",
                col,
                row,
                a[col][row],
                b[col][row]
            );
        }
    }
}

#[test]
fn identity_composes_to_identity() {
    let id = Transform::default();
    let composed = &id * &id;
    assert_eq!(composed.position, Vector3::new(0.0, 0.0, 0.0));
    assert_eq!(composed.rotation, Quaternion::one());
    assert_eq!(composed.scale, Vector3::new(1.0, 1.0, 1.0));
}

#[test]
fn identity_parent_leaves_child_untouched() {
    let child = Transform {
        position: Vector3::new(0.1, -1.0, -4.05),
        rotation: Quaternion::one(),
        scale: Vector3::new(10.0, 3.0, 0.06),
    };
    let composed = &Transform::default() * &child;
    assert_eq!(composed.position, child.position);
    assert_eq!(composed.scale, child.scale);
}

// Composition agrees with 4x4 matrix composition (for uniformly scaled
// parents, which is the only kind the scene graph ever nests).
#[test]
fn composition_matches_matrix_composition() {
    let parent = Transform {
        position: Vector3::new(1.0, 2.0, 3.0),
        rotation: Quaternion::from_angle_y(Deg(37.0)),
        scale: Vector3::new(2.0, 2.0, 2.0),
    };
    let child = Transform {
        position: Vector3::new(-0.5, 0.25, 4.0),
        rotation: Quaternion::from_angle_x(Deg(12.0)),
        scale: Vector3::new(1.0, 3.0, 1.0),
    };

    let composed = (&parent * &child).to_matrix();
    let expected = parent.to_matrix() * child.to_matrix();
    assert_matrix_near(composed, expected);
}

#[test]
fn translation_only_composition_is_vector_addition() {
    let parent = Transform::from(Vector3::new(-2.8, -0.1, 2.0));
    let child = Transform::from(Vector3::new(4.86, -1.0, -0.01));
    let composed = &parent * &child;
    assert_eq!(composed.position, parent.position + child.position);
    assert_eq!(composed.rotation, Quaternion::one());
}
