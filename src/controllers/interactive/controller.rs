use crate::config::RendererConfig;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_frame::render;
use crate::core::data::surface_size::SurfaceSize;
use crate::core::data::viewport::{Viewport, ZoomLimits, ZoomStep};
use crate::core::fractals::mandelbrot::params::MandelbrotParams;
use log::{debug, info};
use std::time::Instant;

/// Owns the viewport and turns lifecycle and scroll events into renders.
///
/// Rendering is synchronous: each call that triggers a render returns only
/// after the frame has been computed and handed to the presenter.
pub struct InteractiveController<P: InteractiveControllerPresenterPort> {
    viewport: Viewport,
    surface: SurfaceSize,
    params: MandelbrotParams,
    zoom_step: ZoomStep,
    zoom_limits: ZoomLimits,
    presenter: P,
    render_count: u64,
}

impl<P: InteractiveControllerPresenterPort> InteractiveController<P> {
    pub fn new(config: &RendererConfig, presenter: P) -> Self {
        Self {
            viewport: Viewport::default(),
            surface: config.surface,
            params: config.params,
            zoom_step: config.zoom_step,
            zoom_limits: config.zoom_limits,
            presenter,
            render_count: 0,
        }
    }

    /// Startup hook: draws the first frame.
    pub fn initialize(&mut self) {
        info!(
            "initial render: {}x{} surface, {} max iterations",
            self.surface.width(),
            self.surface.height(),
            self.params.max_iterations()
        );

        self.redraw();
    }

    /// Scroll hook: adjusts zoom by one step and redraws exactly once.
    pub fn scroll(&mut self, delta: f64) {
        let factor = self.viewport.scroll(delta, self.zoom_step, self.zoom_limits);

        debug!(
            "scroll delta {delta} applied factor {factor}, zoom now {}",
            self.viewport.zoom
        );

        self.redraw();
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn redraw(&mut self) {
        let start = Instant::now();
        let pixel_buffer = render(&self.viewport, self.surface, self.params);
        let render_duration = start.elapsed();

        self.render_count += 1;

        info!(
            "frame {} rendered in {:?} (zoom {})",
            self.render_count, render_duration, self.viewport.zoom
        );

        self.presenter.present(FrameData {
            frame_number: self.render_count,
            viewport: self.viewport,
            pixel_buffer,
            render_duration,
        });
    }
}
