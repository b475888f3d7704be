use crate::{
    data_structures::{
        mesh::{MeshVertex, Vertex},
        texture::Texture,
        transform::TransformRaw,
    },
    pipelines::basic::mk_render_pipeline,
};

/// Pipeline for the room's masking geometry.
///
/// The color write mask is empty, so occluder boxes draw into the depth
/// buffer only: virtual content behind a real-world wall fails the depth
/// test and disappears, while the wall itself stays invisible.
pub fn mk_occluder_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Occluder Pipeline Layout"),
        bind_group_layouts: &[camera_bind_group_layout],
        push_constant_ranges: &[],
    });

    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Occluder Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("occluder.wgsl").into()),
    };

    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        None,
        wgpu::ColorWrites::empty(),
        Some(Texture::DEPTH_FORMAT),
        &[MeshVertex::desc(), TransformRaw::desc()],
        shader,
    )
}
