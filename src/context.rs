//! Central GPU and window context.
//!
//! [`Context`] owns everything created once at startup: surface, device,
//! queue, the three render pipelines, the camera and hemisphere light, the
//! depth buffer and the tracked pointer. Nothing here is torn down before
//! the process ends.

use std::sync::Arc;

use winit::window::Window;

use crate::{
    camera::{Camera, CameraController, CameraResources, Projection},
    data_structures::{texture, transform::Transform},
    pipelines::{
        basic::mk_textured_pipeline,
        light::{HemisphereLightUniform, LightResources},
        occluder::mk_occluder_pipeline,
        solid::mk_solid_pipeline,
    },
};

/// The mouse button currently held, used to distinguish camera drags from
/// select taps.
#[derive(Debug)]
pub enum MouseButtonState {
    Left,
    Right,
    None,
}

#[derive(Debug)]
pub struct MouseState {
    pub pressed: MouseButtonState,
}

/// The tracked pointer.
///
/// Without an immersive session there is no headset controller, so the pose
/// follows the camera each frame; select events capture it as-is.
#[derive(Debug, Default)]
pub struct Controller {
    pub world: Transform,
}

impl Controller {
    pub fn update_from_camera(&mut self, camera: &Camera) {
        self.world = camera.world_transform();
    }
}

/// The three fixed pipelines the demo draws with.
#[derive(Debug)]
pub struct Pipelines {
    pub textured: wgpu::RenderPipeline,
    pub solid: wgpu::RenderPipeline,
    pub occluder: wgpu::RenderPipeline,
}

#[derive(Debug)]
pub struct Context {
    pub(crate) window: Arc<Window>,
    pub(crate) depth_texture: texture::Texture,
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub camera: CameraResources,
    pub projection: Projection,
    pub light: LightResources,
    pub pipelines: Pipelines,
    pub controller: Controller,
    pub mouse: MouseState,
    pub clear_colour: wgpu::Color,
}

impl Context {
    pub async fn new(window: Arc<Window>) -> anyhow::Result<Self> {
        let size = window.inner_size();

        // The instance is a handle to our GPU
        // BackendBit::PRIMARY => Vulkan + Metal + DX12 + Browser WebGPU
        log::info!("WGPU setup");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            #[cfg(not(target_arch = "wasm32"))]
            backends: wgpu::Backends::PRIMARY,
            #[cfg(target_arch = "wasm32")]
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(window.clone())?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;
        log::info!("device and queue");
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: None,
                required_features: wgpu::Features::empty(),
                // WebGL doesn't support all of wgpu's features, so if
                // we're building for the web we'll have to disable some.
                required_limits: if cfg!(target_arch = "wasm32") {
                    wgpu::Limits::downlevel_webgl2_defaults()
                } else {
                    wgpu::Limits::default()
                },
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        log::info!("surface");
        let surface_caps = surface.get_capabilities(&adapter);
        // The original page renders in sRGB, so prefer an sRGB surface
        // format and fall back to whatever the adapter offers first.
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width,
            height: size.height,
            present_mode: surface_caps.present_modes[0],
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        // Viewer starts a step back from the room origin, looking down -Z.
        let camera = Camera::new((0.0, 0.0, 5.0), cgmath::Deg(-90.0), cgmath::Deg(0.0));
        let projection =
            Projection::new(config.width, config.height, cgmath::Deg(70.0), 0.01, 20.0);
        let camera_controller = CameraController::new(4.0, 0.4);

        let camera = CameraResources::new(&device, camera, camera_controller, &projection);

        let depth_texture = texture::Texture::create_depth_texture(
            &device,
            [config.width, config.height],
            "depth_texture",
        );

        let light = LightResources::new(HemisphereLightUniform::default(), &device);

        let pipelines = Pipelines {
            textured: mk_textured_pipeline(&device, &config, &camera.bind_group_layout),
            solid: mk_solid_pipeline(
                &device,
                &config,
                &camera.bind_group_layout,
                &light.bind_group_layout,
            ),
            occluder: mk_occluder_pipeline(&device, &config, &camera.bind_group_layout),
        };

        let controller = Controller {
            world: camera.camera.world_transform(),
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            camera,
            projection,
            light,
            pipelines,
            controller,
            mouse: MouseState {
                pressed: MouseButtonState::None,
            },
            // Transparent, standing in for the AR camera passthrough.
            clear_colour: wgpu::Color::TRANSPARENT,
            window,
            depth_texture,
        })
    }
}

/// The slice of the context that flow constructors receive while loading
/// their resources.
///
/// Device and queue are internally reference counted, so the clones only
/// copy handles.
#[derive(Debug)]
pub struct InitContext {
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
}

impl From<&Context> for InitContext {
    fn from(ctx: &Context) -> Self {
        Self {
            device: ctx.device.clone(),
            queue: ctx.queue.clone(),
        }
    }
}
