use crate::{
    data_structures::{
        material::solid_color_layout,
        mesh::{MeshVertex, Vertex},
        texture::Texture,
        transform::TransformRaw,
    },
    pipelines::basic::mk_render_pipeline,
};

/// Pipeline for hemisphere-lit solid-color geometry: the tap markers.
pub fn mk_solid_pipeline(
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    camera_bind_group_layout: &wgpu::BindGroupLayout,
    light_bind_group_layout: &wgpu::BindGroupLayout,
) -> wgpu::RenderPipeline {
    let render_pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Solid Pipeline Layout"),
        bind_group_layouts: &[
            &solid_color_layout(device),
            camera_bind_group_layout,
            light_bind_group_layout,
        ],
        push_constant_ranges: &[],
    });

    let shader = wgpu::ShaderModuleDescriptor {
        label: Some("Solid Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("solid.wgsl").into()),
    };

    mk_render_pipeline(
        device,
        &render_pipeline_layout,
        config.format,
        Some(wgpu::BlendState {
            alpha: wgpu::BlendComponent::REPLACE,
            color: wgpu::BlendComponent::REPLACE,
        }),
        wgpu::ColorWrites::ALL,
        Some(Texture::DEPTH_FORMAT),
        &[MeshVertex::desc(), TransformRaw::desc()],
        shader,
    )
}
