use wgpu::util::DeviceExt;

/// The scene's single hemisphere light: white sky, blue-tinted ground,
/// matching the demo room's fixed lighting.
#[derive(Debug)]
pub struct LightResources {
    pub uniform: HemisphereLightUniform,
    pub buffer: wgpu::Buffer,
    pub bind_group: wgpu::BindGroup,
    pub bind_group_layout: wgpu::BindGroupLayout,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct HemisphereLightUniform {
    pub sky_color: [f32; 3],
    // Uniforms require 16 byte (4 float) spacing, hence the padding fields
    pub _padding: u32,
    pub ground_color: [f32; 3],
    pub _padding2: u32,
    /// Direction towards the sky half, normalized in the shader.
    pub direction: [f32; 3],
    pub intensity: f32,
}

impl Default for HemisphereLightUniform {
    fn default() -> Self {
        Self {
            sky_color: [1.0, 1.0, 1.0],
            _padding: 0,
            ground_color: [0.733, 0.733, 1.0],
            _padding2: 0,
            direction: [0.5, 1.0, 0.25],
            intensity: 1.0,
        }
    }
}

impl LightResources {
    pub fn new(uniform: HemisphereLightUniform, device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Hemisphere Light Buffer"),
            contents: bytemuck::cast_slice(&[uniform]),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let bind_group_layout = mk_bind_group_layout(device);
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: buffer.as_entire_binding(),
            }],
            label: None,
        });

        Self {
            uniform,
            buffer,
            bind_group,
            bind_group_layout,
        }
    }
}

pub fn mk_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        entries: &[wgpu::BindGroupLayoutEntry {
            binding: 0,
            visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: None,
            },
            count: None,
        }],
        label: None,
    })
}
