use crate::config::RendererConfig;
use crate::controllers::interactive::InteractiveController;
use crate::errors::GuiError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

pub struct GuiApp<P: GuiPresenterPort> {
    pub controller: InteractiveController<P>,
    show_hud: bool,
    pub egui_ctx: Context,
    pub egui_state: EguiWinitState,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        config: &RendererConfig,
        presenter: P,
    ) -> Self {
        let scale_factor = window.scale_factor();
        let egui_ctx = Context::default();

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(scale_factor as f32),
            None, // max_texture_side, use default
        );

        Self {
            controller: InteractiveController::new(config, presenter),
            show_hud: config.show_hud,
            egui_ctx,
            egui_state,
        }
    }

    pub fn initialize(&mut self) {
        self.controller.initialize();
    }

    pub fn scroll(&mut self, delta: f64) {
        self.controller.scroll(delta);
    }

    pub fn render(&mut self, egui_output: egui::FullOutput) -> Result<(), GuiError> {
        self.controller
            .presenter_mut()
            .render(egui_output, &self.egui_ctx)
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        self.controller.presenter_mut().resize(width, height)
    }

    pub fn update_ui(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let show_hud = self.show_hud;
        let viewport = self.controller.viewport();
        let render_count = self.controller.render_count();
        let last_render = self.controller.presenter().last_render_duration();

        self.egui_ctx.run(raw_input, |ctx| {
            if !show_hud {
                return;
            }

            egui::Window::new("Viewport")
                .default_pos([10.0, 10.0])
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(format!("Zoom: {:.6}", viewport.zoom));
                    ui.label(format!(
                        "Center: ({:.6}, {:.6})",
                        viewport.offset_x, viewport.offset_y
                    ));
                    ui.label(format!("Frames rendered: {render_count}"));
                    if let Some(duration) = last_render {
                        ui.label(format!("Last render: {} ms", duration.as_millis()));
                    }
                    ui.separator();
                    ui.label("Scroll up to zoom in, down to zoom out");
                });
        })
    }

    /// Forwards the event to egui. Returns `(consumed, repaint)`.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (bool, bool) {
        let response = self.egui_state.on_window_event(window, event);
        (response.consumed, response.repaint)
    }
}
