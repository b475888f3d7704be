//! indoor-ar
//!
//! A small, cross-platform AR indoor-navigation demo focused on native and
//! WASM compatibility. The crate constructs a scene for one surveyed
//! physical room: invisible occluder boxes that mask virtual content behind
//! real walls, a floor plane textured with a top-down map, and tap markers
//! spawned at the tracked pointer's select location.
//!
//! High-level modules
//! - `camera`: camera types, controller and uniforms for view/projection
//! - `context`: central GPU and window context that owns device/queue/pipelines
//! - `data_structures`: scene data models (transforms, meshes, materials)
//! - `flow`: high level flow control (scenes / update loops)
//! - `pipelines`: definitions for the render pipelines (textured, solid, occluder)
//! - `render`: draw-call composition ordered by render priority
//! - `resources`: helpers to load bundled assets
//! - `room`: the static room layout and tap-to-place behavior
//!

pub mod camera;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod pipelines;
pub mod render;
pub mod resources;
pub mod room;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
pub use wgpu::*;
pub use winit::event::DeviceEvent;
pub use winit::event::WindowEvent;
