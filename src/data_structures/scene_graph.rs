//! Scene graph and hierarchical scene organization.
//!
//! A scene is a tree of nodes, each carrying a local [`Transform`] relative
//! to its parent. [`GroupNode`] is a pure grouping transform (the navigation
//! area); [`MeshNode`] additionally carries geometry, a shared material and a
//! draw-order priority. Graph construction is CPU-only; GPU buffers are
//! created lazily on the first [`SceneNode::write_to_buffers`] call so the
//! layout can be assembled and inspected without a device.

use std::rc::Rc;

use crate::{
    context::Context,
    data_structures::{
        material::Material,
        mesh::{MeshGeometry, MeshGpu},
        transform::Transform,
    },
    render::DrawCall,
};

pub trait SceneNode {
    fn local_transform(&self) -> Transform;

    fn set_local_transform(&mut self, transform: Transform);

    /// The world transform as of the last [`Self::update_world_transforms`]
    /// pass.
    fn world_transform(&self) -> Transform;

    /// Recompute this node's world transform from the parent's and recurse
    /// into the children.
    fn update_world_transforms(&mut self, parent_world: &Transform);

    fn children(&self) -> &[Box<dyn SceneNode>];

    fn add_child(&mut self, child: Box<dyn SceneNode>);

    /// The shared material, if this node draws anything.
    fn material(&self) -> Option<&Rc<Material>> {
        None
    }

    /// Draw-order priority among nodes at the same depth. Lower orders are
    /// submitted first.
    fn render_order(&self) -> i32 {
        0
    }

    /// Create missing GPU resources and refresh stale transform buffers.
    fn write_to_buffers(&mut self, ctx: &Context);

    /// Append this subtree's draw calls, unsorted.
    fn collect_draws<'a>(&'a self, draws: &mut Vec<DrawCall<'a>>);
}

/// A node with children and a transform but no geometry of its own.
pub struct GroupNode {
    local: Transform,
    world: Transform,
    children: Vec<Box<dyn SceneNode>>,
}

impl GroupNode {
    pub fn new() -> Self {
        Self {
            local: Transform::default(),
            world: Transform::default(),
            children: Vec::new(),
        }
    }

    /// Convenience for root-level nodes with no parent transform.
    pub fn update_world_transform_all(&mut self) {
        self.update_world_transforms(&Transform::default());
    }
}

impl Default for GroupNode {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneNode for GroupNode {
    fn local_transform(&self) -> Transform {
        self.local.clone()
    }

    fn set_local_transform(&mut self, transform: Transform) {
        self.local = transform;
    }

    fn world_transform(&self) -> Transform {
        self.world.clone()
    }

    fn update_world_transforms(&mut self, parent_world: &Transform) {
        self.world = parent_world * &self.local;
        for child in self.children.iter_mut() {
            child.update_world_transforms(&self.world);
        }
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }

    fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }

    fn write_to_buffers(&mut self, ctx: &Context) {
        for child in self.children.iter_mut() {
            child.write_to_buffers(ctx);
        }
    }

    fn collect_draws<'a>(&'a self, draws: &mut Vec<DrawCall<'a>>) {
        for child in self.children.iter() {
            child.collect_draws(draws);
        }
    }
}

/// A node that draws a mesh with a shared material.
pub struct MeshNode {
    local: Transform,
    world: Transform,
    geometry: MeshGeometry,
    material: Rc<Material>,
    render_order: i32,
    children: Vec<Box<dyn SceneNode>>,
    gpu: Option<MeshGpu>,
    buffer_is_stale: bool,
}

impl MeshNode {
    pub fn new(geometry: MeshGeometry, material: Rc<Material>, render_order: i32) -> Self {
        Self {
            local: Transform::default(),
            world: Transform::default(),
            geometry,
            material,
            render_order,
            children: Vec::new(),
            gpu: None,
            buffer_is_stale: true,
        }
    }

    pub fn with_local_transform(mut self, transform: Transform) -> Self {
        self.local = transform;
        self
    }
}

impl SceneNode for MeshNode {
    fn local_transform(&self) -> Transform {
        self.local.clone()
    }

    fn set_local_transform(&mut self, transform: Transform) {
        self.local = transform;
        self.buffer_is_stale = true;
    }

    fn world_transform(&self) -> Transform {
        self.world.clone()
    }

    fn update_world_transforms(&mut self, parent_world: &Transform) {
        let world = parent_world * &self.local;
        if world != self.world {
            self.world = world;
            self.buffer_is_stale = true;
        }
        for child in self.children.iter_mut() {
            child.update_world_transforms(&self.world);
        }
    }

    fn children(&self) -> &[Box<dyn SceneNode>] {
        &self.children
    }

    fn add_child(&mut self, child: Box<dyn SceneNode>) {
        self.children.push(child);
    }

    fn material(&self) -> Option<&Rc<Material>> {
        Some(&self.material)
    }

    fn render_order(&self) -> i32 {
        self.render_order
    }

    fn write_to_buffers(&mut self, ctx: &Context) {
        self.material.upload(&ctx.device, &ctx.queue);
        match &self.gpu {
            None => {
                self.gpu = Some(MeshGpu::new(&ctx.device, &self.geometry, self.world.to_raw()));
                self.buffer_is_stale = false;
            }
            Some(gpu) if self.buffer_is_stale => {
                ctx.queue.write_buffer(
                    &gpu.transform_buffer,
                    0,
                    bytemuck::cast_slice(&[self.world.to_raw()]),
                );
                self.buffer_is_stale = false;
            }
            Some(_) => (),
        }
        for child in self.children.iter_mut() {
            child.write_to_buffers(ctx);
        }
    }

    fn collect_draws<'a>(&'a self, draws: &mut Vec<DrawCall<'a>>) {
        match &self.gpu {
            Some(gpu) => draws.push(DrawCall {
                render_order: self.render_order,
                pipeline: (&self.material.kind).into(),
                material_bind_group: self.material.bind_group(),
                vertex: &gpu.vertex_buffer,
                index: &gpu.index_buffer,
                transform: &gpu.transform_buffer,
                num_indices: gpu.num_indices,
            }),
            None => log::warn!("you attempted to render a mesh node before its first upload"),
        }
        for child in self.children.iter() {
            child.collect_draws(draws);
        }
    }
}
