use winit::event::MouseScrollDelta;

/// Converts a winit wheel delta into the wheel-event convention the
/// controller expects, where a negative delta means the wheel moved up.
///
/// winit reports wheel-up as a positive `y`, so the vertical component is
/// negated. Only the sign matters downstream.
#[must_use]
pub fn scroll_delta(delta: MouseScrollDelta) -> f64 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -f64::from(y),
        MouseScrollDelta::PixelDelta(position) => -position.y,
    }
}
