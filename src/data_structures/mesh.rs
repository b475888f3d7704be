//! Procedural mesh geometry and its GPU buffers.
//!
//! The room demo only ever needs two shapes: a unit box (walls, tap markers,
//! scaled per node via the transform) and a plane (the floor map). Both are
//! generated on the CPU so scene construction never touches the GPU; buffers
//! are created lazily on the first upload.

use wgpu::util::DeviceExt;

/// Anything with a vertex buffer layout the render pipelines can consume.
pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex for MeshVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<MeshVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// CPU-side triangle mesh: interleaved vertices plus a u32 index list.
#[derive(Clone, Debug)]
pub struct MeshGeometry {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshGeometry {
    /// An axis-aligned 1x1x1 box centered on the origin, with per-face
    /// normals and texture coordinates. Node transforms scale it to the
    /// required extents.
    pub fn unit_box() -> Self {
        let h = 0.5f32;
        // face order: +X, -X, +Y, -Y, +Z, -Z
        let faces: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
            ([1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]),
            ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
            ([0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, -1.0]),
            ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
            ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
            ([0.0, 0.0, -1.0], [-1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, tangent, bitangent) in faces {
            let base = vertices.len() as u32;
            for (u, v) in [(0.0f32, 0.0f32), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
                let position = [
                    h * (normal[0] + (u * 2.0 - 1.0) * tangent[0] + (v * 2.0 - 1.0) * bitangent[0]),
                    h * (normal[1] + (u * 2.0 - 1.0) * tangent[1] + (v * 2.0 - 1.0) * bitangent[1]),
                    h * (normal[2] + (u * 2.0 - 1.0) * tangent[2] + (v * 2.0 - 1.0) * bitangent[2]),
                ];
                vertices.push(MeshVertex {
                    position,
                    tex_coords: [u, 1.0 - v],
                    normal,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }

        Self { vertices, indices }
    }

    /// A `width` x `height` plane in the XY plane facing +Z, centered on the
    /// origin. Rotating it 270 degrees about X lays it flat with the texture
    /// facing up.
    pub fn plane(width: f32, height: f32) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        let normal = [0.0, 0.0, 1.0];
        let vertices = vec![
            MeshVertex {
                position: [-hw, -hh, 0.0],
                tex_coords: [0.0, 1.0],
                normal,
            },
            MeshVertex {
                position: [hw, -hh, 0.0],
                tex_coords: [1.0, 1.0],
                normal,
            },
            MeshVertex {
                position: [hw, hh, 0.0],
                tex_coords: [1.0, 0.0],
                normal,
            },
            MeshVertex {
                position: [-hw, hh, 0.0],
                tex_coords: [0.0, 0.0],
                normal,
            },
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];

        Self { vertices, indices }
    }
}

/// GPU-side buffers for one mesh node: vertex and index data plus the
/// single-entry transform buffer the shaders read at slot 1.
#[derive(Debug)]
pub struct MeshGpu {
    pub vertex_buffer: wgpu::Buffer,
    pub index_buffer: wgpu::Buffer,
    pub transform_buffer: wgpu::Buffer,
    pub num_indices: u32,
}

impl MeshGpu {
    pub fn new(
        device: &wgpu::Device,
        geometry: &MeshGeometry,
        transform: crate::data_structures::transform::TransformRaw,
    ) -> Self {
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Vertex Buffer"),
            contents: bytemuck::cast_slice(&geometry.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Mesh Index Buffer"),
            contents: bytemuck::cast_slice(&geometry.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        let transform_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Node Transform Buffer"),
            contents: bytemuck::cast_slice(&[transform]),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            vertex_buffer,
            index_buffer,
            transform_buffer,
            num_indices: geometry.indices.len() as u32,
        }
    }
}
