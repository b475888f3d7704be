//! The static room layout: occlusion mask, floor map and tap markers.
//!
//! Everything here is declarative. The four wall occluders carry literal,
//! pre-measured transforms matching one surveyed physical room; there is no
//! room-geometry solver and no collision detection. The walls share a single
//! color-write-disabled material, so virtual content behind a real wall is
//! masked without anything visible being drawn. The only runtime behavior is
//! the per-select tap marker insertion.

use std::rc::Rc;

use cgmath::{Deg, One, Quaternion, Rotation3, Vector3};
use instant::Duration;
use rand::Rng;
use winit::event::{DeviceEvent, WindowEvent};

use crate::{
    context::{Context, InitContext},
    data_structures::{
        material::Material,
        mesh::MeshGeometry,
        scene_graph::{GroupNode, MeshNode, SceneNode},
        transform::Transform,
    },
    flow::SceneFlow,
    render::{DrawCall, Render},
    resources,
};

/// One global translation aligning the room with the designated starting
/// point, applied once to the whole navigation area.
pub const NAVIGATION_AREA_OFFSET: [f32; 3] = [-2.8, -0.1, 2.0];

/// The surveyed wall transforms as position / rotation / scale triples: two
/// coplanar pairs forming the rectangular room boundary. Rotations are
/// carried with the survey data but all current walls are axis-aligned.
pub const WALL_ELEMENTS: [([f32; 3], [f32; 3], [f32; 3]); 4] = [
    ([0.1, -1.0, -4.05], [0.0, 0.0, 0.0], [10.0, 3.0, 0.06]),
    ([0.1, -1.0, 4.1], [0.0, 0.0, 0.0], [10.0, 3.0, 0.06]),
    ([4.86, -1.0, -0.01], [0.0, 0.0, 0.0], [0.06, 3.0, 9.114]),
    ([-5.0, -1.0, -0.01], [0.0, 0.0, 0.0], [0.06, 3.0, 9.114]),
];

pub const WALL_RENDER_ORDER: i32 = 2;
pub const FLOOR_RENDER_ORDER: i32 = 3;
pub const MARKER_RENDER_ORDER: i32 = 3;

/// Extents of the floor map plane in meters.
pub const FLOOR_SIZE: [f32; 2] = [10.2, 8.5];
pub const FLOOR_POSITION: [f32; 3] = [0.0, -2.0, 0.0];
pub const FLOOR_MAP_FILE: &str = "casual_flat_map.png";

/// Edge length of a spawned tap marker cube.
pub const MARKER_EXTENT: f32 = 0.06;
/// Markers spawn this far along the pointer's local forward (-Z) axis.
pub const MARKER_FORWARD_OFFSET: f32 = -0.3;

/// The one material all wall occluders share. Restyling it restyles every
/// wall at once.
pub fn occluder_material() -> Rc<Material> {
    Material::occluder()
}

/// Pure factory for one wall occluder box.
///
/// The caller supplies literal, pre-measured coordinates; no plausibility
/// checking happens here. `rotation` is accepted for parity with the survey
/// data but not applied: axis-aligned geometry is the current guaranteed
/// behavior.
pub fn create_wall_element(
    position: Vector3<f32>,
    _rotation: Vector3<f32>,
    scale: Vector3<f32>,
    material: &Rc<Material>,
) -> MeshNode {
    MeshNode::new(
        MeshGeometry::unit_box(),
        Rc::clone(material),
        WALL_RENDER_ORDER,
    )
    .with_local_transform(Transform {
        position,
        rotation: Quaternion::one(),
        scale,
    })
}

/// Build the navigation area: four wall occluders, the group offset, and the
/// floor plane textured with the top-down room map.
pub fn assemble_navigation_area(
    floor_map: image::DynamicImage,
    occluder: &Rc<Material>,
) -> GroupNode {
    let mut area = GroupNode::new();

    for (position, rotation, scale) in WALL_ELEMENTS {
        area.add_child(Box::new(create_wall_element(
            position.into(),
            rotation.into(),
            scale.into(),
            occluder,
        )));
    }

    // set starting point to start-room center
    area.set_local_transform(Transform::from(Vector3::from(NAVIGATION_AREA_OFFSET)));

    // The floor plane is authored in XY, so a 270 degree turn about X lays
    // it flat with the map facing up.
    let floor = MeshNode::new(
        MeshGeometry::plane(FLOOR_SIZE[0], FLOOR_SIZE[1]),
        Material::textured(floor_map),
        FLOOR_RENDER_ORDER,
    )
    .with_local_transform(Transform {
        position: FLOOR_POSITION.into(),
        rotation: Quaternion::from_angle_x(Deg(270.0)),
        scale: Vector3::new(1.0, 1.0, 1.0),
    });
    area.add_child(Box::new(floor));

    area
}

/// Create one tap marker at the given pointer pose: a small cube pushed
/// [`MARKER_FORWARD_OFFSET`] units along the pointer's forward axis,
/// oriented like the pointer and randomly colored per instance.
pub fn spawn_tap_marker(pose: &Transform, rng: &mut impl Rng) -> MeshNode {
    let color = [
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        rng.gen_range(0.0..1.0),
        1.0,
    ];

    let local = pose * &Transform {
        position: Vector3::new(0.0, 0.0, MARKER_FORWARD_OFFSET),
        rotation: Quaternion::one(),
        scale: Vector3::new(MARKER_EXTENT, MARKER_EXTENT, MARKER_EXTENT),
    };

    MeshNode::new(
        MeshGeometry::unit_box(),
        Material::solid(color),
        MARKER_RENDER_ORDER,
    )
    .with_local_transform(local)
}

/// The demo scene: the assembled room plus the accumulating tap markers.
pub struct RoomNavigation {
    navigation_area: GroupNode,
    markers: GroupNode,
    occluder: Rc<Material>,
}

impl RoomNavigation {
    /// Load the floor map and assemble the room.
    pub async fn new(_ctx: InitContext) -> anyhow::Result<Self> {
        let floor_map = resources::load_image(FLOOR_MAP_FILE).await?;
        Ok(Self::with_floor_image(floor_map))
    }

    /// Assemble the room around an already-decoded floor map image.
    pub fn with_floor_image(floor_map: image::DynamicImage) -> Self {
        let occluder = occluder_material();
        let navigation_area = assemble_navigation_area(floor_map, &occluder);
        Self {
            navigation_area,
            markers: GroupNode::new(),
            occluder,
        }
    }

    pub fn navigation_area(&self) -> &GroupNode {
        &self.navigation_area
    }

    pub fn markers(&self) -> &GroupNode {
        &self.markers
    }

    pub fn occluder_material(&self) -> &Rc<Material> {
        &self.occluder
    }

    pub fn marker_count(&self) -> usize {
        self.markers.children().len()
    }

    /// Insert one marker at the given pointer pose. Markers accumulate for
    /// the whole session; the layout defines no cap.
    pub fn spawn_marker(&mut self, pose: &Transform) {
        let marker = spawn_tap_marker(pose, &mut rand::thread_rng());
        self.markers.add_child(Box::new(marker));
    }

    /// Recompute world transforms from the roots down.
    pub fn update_world_transforms(&mut self) {
        self.navigation_area.update_world_transform_all();
        self.markers.update_world_transform_all();
    }
}

impl<S> SceneFlow<S> for RoomNavigation {
    fn on_init(&mut self, _ctx: &mut Context, _state: &mut S) {
        log::info!(
            "navigation area assembled: {} occluder walls, floor {}x{}",
            WALL_ELEMENTS.len(),
            FLOOR_SIZE[0],
            FLOOR_SIZE[1],
        );
    }

    fn on_select(&mut self, _ctx: &Context, _state: &mut S, pose: Transform) {
        self.spawn_marker(&pose);
        log::debug!("tap marker {} spawned", self.marker_count());
    }

    fn on_update(&mut self, _ctx: &Context, _state: &mut S, _dt: Duration) {
        // The room is static and markers never move once placed.
    }

    fn on_device_events(&mut self, _ctx: &Context, _state: &mut S, _event: &DeviceEvent) {}

    fn on_window_events(&mut self, _ctx: &Context, _state: &mut S, _event: &WindowEvent) {}

    fn write_to_buffers(&mut self, ctx: &Context) {
        self.update_world_transforms();
        self.navigation_area.write_to_buffers(ctx);
        self.markers.write_to_buffers(ctx);
    }

    fn on_render(&self) -> Render<'_> {
        let mut draws: Vec<DrawCall> = Vec::new();
        self.navigation_area.collect_draws(&mut draws);
        self.markers.collect_draws(&mut draws);
        Render::Calls(draws)
    }

    #[cfg(feature = "integration-tests")]
    fn render_to_texture(
        &self,
        _ctx: &Context,
        _state: &mut S,
        _texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<crate::flow::ImageTestResult, anyhow::Error> {
        Ok(crate::flow::ImageTestResult::Passed)
    }
}
