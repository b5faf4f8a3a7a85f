use winit::window::Window;

use crate::core::data::surface_size::SurfaceSize;
use crate::errors::GuiError;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(&self, window: &'static Window, surface: SurfaceSize) -> Result<PixelsPresenter, GuiError> {
        PixelsPresenter::new(window, surface)
    }
}

impl PixelsPresenterFactory {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}
