use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use std::time::Duration;

/// One finished render, numbered from 1 in the order frames were produced.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameData {
    pub frame_number: u64,
    pub viewport: Viewport,
    pub pixel_buffer: PixelBuffer,
    pub render_duration: Duration,
}
