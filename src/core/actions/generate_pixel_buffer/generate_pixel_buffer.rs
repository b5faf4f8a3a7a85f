use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::surface_size::SurfaceSize;

/// Colours one value per pixel into a fresh RGBA buffer, alpha always opaque.
///
/// # Panics
/// Panics if `input` does not hold exactly one value per pixel of `size`.
pub fn generate_pixel_buffer<CMap: ColourMap>(
    input: Vec<CMap::T>,
    mapper: &CMap,
    size: SurfaceSize,
) -> PixelBuffer {
    assert_eq!(
        input.len(),
        size.pixel_count(),
        "{} values do not cover a {}x{} surface",
        input.len(),
        size.width(),
        size.height()
    );

    let mut buffer = PixelBuffer::new(size);

    for (value, rgba) in input.into_iter().zip(buffer.pixels_mut()) {
        let colour = mapper.map(value);
        rgba.copy_from_slice(&[colour.r, colour.g, colour.b, u8::MAX]);
    }

    buffer
}
