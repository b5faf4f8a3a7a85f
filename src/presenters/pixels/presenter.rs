use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::data::surface_size::SurfaceSize;
use crate::errors::GuiError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use log::error;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use std::time::Duration;
use winit::window::Window;

/// Holds the window framebuffer. The pixel buffer always matches the
/// configured surface one to one; only the window surface follows DPI.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    window_width: u32,
    window_height: u32,
    last_render_duration: Option<Duration>,
}

impl InteractiveControllerPresenterPort for PixelsPresenter {
    fn present(&mut self, frame: FrameData) {
        let src = frame.pixel_buffer.buffer();
        let dest = self.pixels.frame_mut();

        if src.len() != dest.len() {
            error!(
                "frame {} holds {} bytes but the pixels buffer holds {}",
                frame.frame_number,
                src.len(),
                dest.len()
            );
            return;
        }

        dest.copy_from_slice(src);
        self.last_render_duration = Some(frame.render_duration);
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError> {
        if self.window_width == 0 || self.window_height == 0 {
            return Ok(());
        }

        self.pixels.render_with(|encoder, render_target, context| {
            // First, the framebuffer (the scaling pass)
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels: [self.window_width, self.window_height],
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                self.egui_renderer
                    .update_texture(&context.device, &context.queue, *id, delta);
            }

            let _ = self.egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            // Overlay on top of the framebuffer
            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                self.egui_renderer.render(
                    &mut render_pass,
                    &clipped_primitives,
                    &screen_descriptor,
                );
            }

            for id in &textures_delta.free {
                self.egui_renderer.free_texture(id);
            }

            Ok(())
        })?;

        Ok(())
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        self.window_width = width;
        self.window_height = height;

        self.pixels.resize_surface(width, height)?;

        Ok(())
    }

    fn last_render_duration(&self) -> Option<Duration> {
        self.last_render_duration
    }
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, surface: SurfaceSize) -> Result<Self, GuiError> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);

        // Pixel density 1: one RGBA texel per surface pixel, whatever the DPI.
        let pixels = Pixels::new(surface.width(), surface.height(), surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            window_width: size.width,
            window_height: size.height,
            last_render_duration: None,
        })
    }
}
