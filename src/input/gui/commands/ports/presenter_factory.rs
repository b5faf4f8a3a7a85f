use crate::core::data::surface_size::SurfaceSize;
use crate::errors::GuiError;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use winit::window::Window;

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(&self, window: &'static Window, surface: SurfaceSize) -> Result<T, GuiError>;
}
