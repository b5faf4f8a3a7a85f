use std::marker::PhantomData;

use log::{error, info};
use winit::{
    dpi::PhysicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::config::RendererConfig;
use crate::errors::GuiError;
use crate::input::gui::{
    app::{gui_app::GuiApp, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    scroll::scroll_delta,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: RendererConfig,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: RendererConfig) -> Self {
        Self {
            presenter_factory,
            config,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), GuiError> {
        let event_loop = EventLoop::new()?;
        // Frames are drawn on demand only.
        event_loop.set_control_flow(ControlFlow::Wait);

        let surface = self.config.surface;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title("Mandelbrot Zoom")
                .with_inner_size(PhysicalSize::new(surface.width(), surface.height()))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let presenter: P = self.presenter_factory.build(window, surface)?;
        let mut app = GuiApp::new(window, &event_loop, &self.config, presenter);
        let mut failure: Option<GuiError> = None;

        app.initialize();
        window.request_redraw();

        event_loop.run(|event, elwt| {
            if let Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id()
            {
                let (egui_consumed, egui_repaint) = app.handle_window_event(window, event);

                match event {
                    WindowEvent::CloseRequested => {
                        info!("window closed after {} frames", app.controller.render_count());
                        elwt.exit();
                    }
                    WindowEvent::RedrawRequested => {
                        let egui_output = app.update_ui(window);

                        app.egui_state
                            .handle_platform_output(window, egui_output.platform_output.clone());

                        if let Err(e) = app.render(egui_output) {
                            error!("render error: {e}");
                            failure = Some(e);
                            elwt.exit();
                        }
                    }
                    WindowEvent::MouseWheel { delta, .. } if !egui_consumed => {
                        app.scroll(scroll_delta(*delta));
                        window.request_redraw();
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(e) = app.resize(size.width, size.height) {
                            error!("resize error: {e}");
                            failure = Some(e);
                            elwt.exit();
                        }
                        window.request_redraw();
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        window.request_redraw();
                    }
                    _ => {
                        if egui_repaint {
                            window.request_redraw();
                        }
                    }
                }
            }
        })?;

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}
