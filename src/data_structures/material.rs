//! Materials shared between scene graph nodes.
//!
//! A [`Material`] decides which pipeline a mesh is drawn with and carries the
//! data that pipeline binds (floor map texture, marker color, or nothing at
//! all for occluders). Materials are shared by reference: the four occluder
//! walls hold the same `Rc<Material>`, so they behave identically and could
//! be restyled in one operation. A material is never written after
//! construction; its GPU bindings are created once on first upload.

use std::cell::OnceCell;
use std::rc::Rc;

use crate::data_structures::texture::Texture;

/// What a material binds and which pipeline it selects.
#[derive(Debug)]
pub enum MaterialKind {
    /// Unlit, textured. Used for the floor map.
    Textured { image: image::DynamicImage },
    /// Hemisphere-lit flat color. Used for tap markers.
    Solid { color: [f32; 4] },
    /// Writes depth only, no color. Masks virtual geometry behind
    /// real-world structures without rendering anything visible.
    Occluder,
}

#[derive(Debug)]
pub struct Material {
    pub kind: MaterialKind,
    gpu: OnceCell<MaterialGpu>,
}

#[derive(Debug)]
struct MaterialGpu {
    bind_group: Option<wgpu::BindGroup>,
}

impl Material {
    pub fn textured(image: image::DynamicImage) -> Rc<Self> {
        Rc::new(Self {
            kind: MaterialKind::Textured { image },
            gpu: OnceCell::new(),
        })
    }

    pub fn solid(color: [f32; 4]) -> Rc<Self> {
        Rc::new(Self {
            kind: MaterialKind::Solid { color },
            gpu: OnceCell::new(),
        })
    }

    pub fn occluder() -> Rc<Self> {
        Rc::new(Self {
            kind: MaterialKind::Occluder,
            gpu: OnceCell::new(),
        })
    }

    /// Create the material's bind group if it does not exist yet. Occluder
    /// materials bind nothing; their pipeline only reads the camera.
    pub fn upload(&self, device: &wgpu::Device, queue: &wgpu::Queue) {
        self.gpu.get_or_init(|| {
            let bind_group = match &self.kind {
                MaterialKind::Textured { image } => {
                    let texture = Texture::from_image(device, queue, image, Some("floor map"));
                    Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
                        layout: &diffuse_layout(device),
                        entries: &[
                            wgpu::BindGroupEntry {
                                binding: 0,
                                resource: wgpu::BindingResource::TextureView(&texture.view),
                            },
                            wgpu::BindGroupEntry {
                                binding: 1,
                                resource: wgpu::BindingResource::Sampler(
                                    texture.sampler.as_ref().expect("texture sampler"),
                                ),
                            },
                        ],
                        label: Some("textured_material_bind_group"),
                    }))
                }
                MaterialKind::Solid { color } => {
                    use wgpu::util::DeviceExt;
                    let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some("Material Color Buffer"),
                        contents: bytemuck::cast_slice(color),
                        usage: wgpu::BufferUsages::UNIFORM,
                    });
                    Some(device.create_bind_group(&wgpu::BindGroupDescriptor {
                        layout: &solid_color_layout(device),
                        entries: &[wgpu::BindGroupEntry {
                            binding: 0,
                            resource: buffer.as_entire_binding(),
                        }],
                        label: Some("solid_material_bind_group"),
                    }))
                }
                MaterialKind::Occluder => None,
            };
            MaterialGpu { bind_group }
        });
    }

    pub(crate) fn bind_group(&self) -> Option<&wgpu::BindGroup> {
        self.gpu.get().and_then(|gpu| gpu.bind_group.as_ref())
    }
}

pub fn diffuse_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Texture {
                    multisampled: false,
                    view_dimension: wgpu::TextureViewDimension::D2,
                    sample_type: wgpu::TextureSampleType::Float { filterable: true },
                },
                count: None,
            },
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                count: None,
            },
        ],
        label: Some("Material diffuse_bind_group_layout"),
    })
}

pub fn solid_color_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: Some("Material solid_color_bind_group_layout"),
    })
}
