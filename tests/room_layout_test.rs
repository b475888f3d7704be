use std::rc::Rc;

use cgmath::{Deg, One, Quaternion, Rotation3, Vector3};
use indoor_ar::{
    data_structures::{material::MaterialKind, scene_graph::SceneNode, transform::Transform},
    room::{
        self, FLOOR_POSITION, FLOOR_RENDER_ORDER, NAVIGATION_AREA_OFFSET, RoomNavigation,
        WALL_ELEMENTS, WALL_RENDER_ORDER,
    },
};

const EPS: f32 = 1e-5;

fn floor_image() -> image::DynamicImage {
    image::DynamicImage::new_rgba8(2, 2)
}

// The wall factory stores the literal survey inputs untouched.
#[test]
fn wall_factory_is_identity_on_position_and_scale() {
    let material = room::occluder_material();
    for (position, rotation, scale) in WALL_ELEMENTS {
        let wall = room::create_wall_element(
            position.into(),
            rotation.into(),
            scale.into(),
            &material,
        );
        let local = wall.local_transform();
        assert_eq!(local.position, Vector3::from(position));
        assert_eq!(local.scale, Vector3::from(scale));
        // Rotation inputs are currently unapplied; walls stay axis-aligned.
        assert_eq!(local.rotation, Quaternion::one());
        assert_eq!(wall.render_order(), WALL_RENDER_ORDER);
    }
}

#[test]
fn all_walls_reference_the_identical_material() {
    let room = RoomNavigation::with_floor_image(floor_image());
    let children = room.navigation_area().children();

    for wall in &children[..WALL_ELEMENTS.len()] {
        let material = wall.material().expect("wall has a material");
        assert!(Rc::ptr_eq(material, room.occluder_material()));
        assert!(matches!(material.kind, MaterialKind::Occluder));
    }
}

#[test]
fn navigation_area_offset_is_applied_once_to_every_child() {
    let mut room = RoomNavigation::with_floor_image(floor_image());
    room.update_world_transforms();

    let offset = Vector3::from(NAVIGATION_AREA_OFFSET);
    let children = room.navigation_area().children();

    for (i, (position, _, _)) in WALL_ELEMENTS.iter().enumerate() {
        let world = children[i].world_transform();
        assert_eq!(world.position, Vector3::from(*position) + offset);
    }

    let floor = children[WALL_ELEMENTS.len()].world_transform();
    assert_eq!(floor.position, Vector3::from(FLOOR_POSITION) + offset);
}

#[test]
fn floor_lies_flat_behind_the_markers() {
    let room = RoomNavigation::with_floor_image(floor_image());
    let children = room.navigation_area().children();
    let floor = &children[WALL_ELEMENTS.len()];

    assert_eq!(floor.render_order(), FLOOR_RENDER_ORDER);
    // Occluders submit in an earlier pass than everything visible.
    assert!(WALL_RENDER_ORDER < FLOOR_RENDER_ORDER);
    assert!(WALL_RENDER_ORDER < room::MARKER_RENDER_ORDER);

    let expected: Quaternion<f32> = Quaternion::from_angle_x(Deg(270.0));
    let rotation = floor.local_transform().rotation;
    assert!((rotation.s - expected.s).abs() < EPS);
    assert!((rotation.v.x - expected.v.x).abs() < EPS);

    let material = floor.material().expect("floor has a material");
    assert!(matches!(material.kind, MaterialKind::Textured { .. }));
}

#[test]
fn area_group_carries_the_offset_as_local_transform() {
    let room = RoomNavigation::with_floor_image(floor_image());
    let local: Transform = room.navigation_area().local_transform();
    assert_eq!(local.position, Vector3::from(NAVIGATION_AREA_OFFSET));
    assert_eq!(local.rotation, Quaternion::one());
}
