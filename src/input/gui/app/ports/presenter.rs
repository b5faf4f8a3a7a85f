use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::errors::GuiError;
use egui::Context as EguiContext;
use std::time::Duration;

pub trait GuiPresenterPort: InteractiveControllerPresenterPort {
    /// Commits the framebuffer and the egui overlay to the window.
    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), GuiError>;
    fn resize(&mut self, width: u32, height: u32) -> Result<(), GuiError>;
    fn last_render_duration(&self) -> Option<Duration>;
}
