use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes frames as binary PPM (P6). Alpha is dropped; parent directories are created.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(File::create(filepath)?);
        write_ppm(buffer, &mut file)?;
        file.flush()
    }
}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

pub fn write_ppm(buffer: &PixelBuffer, out: &mut impl Write) -> std::io::Result<()> {
    let size = buffer.size();

    // P6 header: magic, width height, max colour value
    writeln!(out, "P6")?;
    writeln!(out, "{} {}", size.width(), size.height())?;
    writeln!(out, "255")?;

    for rgb in buffer.rgb_pixels() {
        out.write_all(rgb)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::surface_size::SurfaceSize;

    #[test]
    fn test_write_ppm_header_and_rgb_payload() {
        let size = SurfaceSize::new(2, 1).unwrap();
        let buffer = PixelBuffer::from_data(size, vec![1, 2, 3, 255, 9, 8, 7, 255]).unwrap();
        let mut out = Vec::new();

        write_ppm(&buffer, &mut out).unwrap();

        let mut expected = b"P6\n2 1\n255\n".to_vec();
        expected.extend_from_slice(&[1, 2, 3, 9, 8, 7]);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_present_creates_parent_directory() {
        let dir = std::env::temp_dir().join(format!("mandelbrot_zoom_ppm_{}", std::process::id()));
        let path = dir.join("nested").join("frame.ppm");
        let buffer = PixelBuffer::new(SurfaceSize::new(3, 3).unwrap());

        PpmFilePresenter::new().present(&buffer, &path).unwrap();

        let written = fs::read(&path).unwrap();
        assert!(written.starts_with(b"P6\n3 3\n255\n"));
        assert_eq!(written.len(), b"P6\n3 3\n255\n".len() + 27);

        fs::remove_dir_all(&dir).unwrap();
    }
}
