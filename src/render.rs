//! Render composition and draw ordering.
//!
//! Scene flows hand the engine a [`Render`] each frame. The engine flattens
//! it into [`DrawCall`]s and submits them sorted by render order, so the
//! color-write-disabled occluders (order 2) lay down depth before the floor
//! and tap markers (order 3) are drawn. The sort is stable: nodes with equal
//! order keep their scene graph insertion order.

use crate::data_structures::material::MaterialKind;

/// Which render pipeline a draw call is issued on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineKind {
    /// Depth-only masking geometry, color writes disabled.
    Occluder,
    /// Unlit textured geometry (the floor map).
    Textured,
    /// Hemisphere-lit solid color (tap markers).
    Solid,
}

impl From<&MaterialKind> for PipelineKind {
    fn from(kind: &MaterialKind) -> Self {
        match kind {
            MaterialKind::Occluder => PipelineKind::Occluder,
            MaterialKind::Textured { .. } => PipelineKind::Textured,
            MaterialKind::Solid { .. } => PipelineKind::Solid,
        }
    }
}

/// One mesh node's draw submission: buffers, bindings and ordering.
pub struct DrawCall<'a> {
    pub render_order: i32,
    pub pipeline: PipelineKind,
    pub material_bind_group: Option<&'a wgpu::BindGroup>,
    pub vertex: &'a wgpu::Buffer,
    pub index: &'a wgpu::Buffer,
    pub transform: &'a wgpu::Buffer,
    pub num_indices: u32,
}

/// What a scene flow wants drawn this frame.
pub enum Render<'a> {
    None,
    Calls(Vec<DrawCall<'a>>),
    Composed(Vec<Render<'a>>),
}

impl<'a> Render<'a> {
    pub(crate) fn collect(self, out: &mut Vec<DrawCall<'a>>) {
        match self {
            Render::None => (),
            Render::Calls(mut calls) => out.append(&mut calls),
            Render::Composed(renders) => {
                for render in renders {
                    render.collect(out);
                }
            }
        }
    }
}

/// Order draw calls by their manually assigned priority, stably.
pub(crate) fn sort_draws(draws: &mut [DrawCall<'_>]) {
    draws.sort_by_key(|call| call.render_order);
}
