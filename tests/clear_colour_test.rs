//! GPU smoke test: an empty scene presents exactly the configured clear
//! colour. Needs a display and an adapter, hence the feature gate.

#[cfg(feature = "integration-tests")]
mod common;

#[test]
#[cfg(feature = "integration-tests")]
fn should_render_clear_colour() {
    use crate::common::test_utils::TestRender;
    use indoor_ar::flow::ImageTestResult;
    use wgpu::Color;

    image_test!(TestRender {
        setup: |ctx, _| {
            ctx.clear_colour = Color::WHITE;
        },
        validate: |_, state, texture| {
            if state.frame() == 0 {
                return Ok(ImageTestResult::Waiting);
            }
            let f_to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            let desired_pixel = image::Rgba([
                f_to_u8(Color::WHITE.r),
                f_to_u8(Color::WHITE.g),
                f_to_u8(Color::WHITE.b),
                f_to_u8(Color::WHITE.a),
            ]);
            for pixel in texture.pixels() {
                assert_eq!(*pixel, desired_pixel);
            }
            Ok(ImageTestResult::Passed)
        },
    });
}
