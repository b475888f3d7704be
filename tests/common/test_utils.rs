#[cfg(feature = "integration-tests")]
use indoor_ar::{
    context::Context,
    flow::{ImageTestResult, SceneFlow},
    render::Render,
};

/// Shared test state: counts rendered frames so validators can wait for the
/// first presented image.
pub(crate) struct FrameCounter(pub(crate) u32);

impl Default for FrameCounter {
    fn default() -> Self {
        Self(0)
    }
}

impl FrameCounter {
    pub(crate) fn frame(&self) -> u32 {
        self.0
    }

    pub(crate) fn progress(&mut self) {
        self.0 += 1;
    }
}

/// A minimal flow for image tests: a setup hook run at init and a validator
/// run against every rendered frame until it passes or fails.
#[cfg(feature = "integration-tests")]
pub(crate) struct TestRender {
    pub(crate) setup: fn(&mut Context, &mut FrameCounter),
    pub(crate) validate: fn(
        &Context,
        &mut FrameCounter,
        &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error>,
}

#[cfg(feature = "integration-tests")]
impl SceneFlow<FrameCounter> for TestRender {
    fn on_init(&mut self, ctx: &mut Context, state: &mut FrameCounter) {
        (self.setup)(ctx, state);
    }

    fn on_select(
        &mut self,
        _: &Context,
        _: &mut FrameCounter,
        _: indoor_ar::data_structures::transform::Transform,
    ) {
    }

    fn on_update(&mut self, _: &Context, state: &mut FrameCounter, _: std::time::Duration) {
        state.progress();
    }

    fn on_device_events(&mut self, _: &Context, _: &mut FrameCounter, _: &indoor_ar::DeviceEvent) {}

    fn on_window_events(&mut self, _: &Context, _: &mut FrameCounter, _: &indoor_ar::WindowEvent) {}

    fn write_to_buffers(&mut self, _: &Context) {}

    fn on_render(&self) -> Render<'_> {
        Render::None
    }

    fn render_to_texture(
        &self,
        ctx: &Context,
        state: &mut FrameCounter,
        texture: &mut image::ImageBuffer<image::Rgba<u8>, wgpu::BufferView>,
    ) -> Result<ImageTestResult, anyhow::Error> {
        (self.validate)(ctx, state, texture)
    }
}

#[macro_export]
macro_rules! image_test {
    ($test_render:expr) => {{
        use crate::common::test_utils::FrameCounter;
        use indoor_ar::flow::{FlowConstructor, SceneFlow};

        let constructor: FlowConstructor<FrameCounter> = Box::new(|_| {
            Box::pin(async move {
                let flow: Box<dyn SceneFlow<FrameCounter>> = Box::new($test_render);
                Ok(flow)
            })
        });

        indoor_ar::flow::run(vec![constructor]).expect("Failed to run flow for integration test.");
    }};
}
