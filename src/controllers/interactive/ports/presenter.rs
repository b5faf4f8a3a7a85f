use crate::controllers::interactive::data::frame_data::FrameData;

/// Receives every frame the controller renders.
pub trait InteractiveControllerPresenterPort {
    fn present(&mut self, frame: FrameData);
}
