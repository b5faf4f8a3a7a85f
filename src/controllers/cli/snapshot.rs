use crate::config::RendererConfig;
use crate::controllers::interactive::InteractiveController;
use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use log::info;
use std::path::Path;

/// Keeps only the most recent frame.
#[derive(Debug, Default)]
pub struct LatestFrame {
    frame: Option<FrameData>,
}

impl InteractiveControllerPresenterPort for LatestFrame {
    fn present(&mut self, frame: FrameData) {
        self.frame = Some(frame);
    }
}

impl LatestFrame {
    #[must_use]
    pub fn frame(&self) -> Option<&FrameData> {
        self.frame.as_ref()
    }
}

/// Drives the interactive controller without a window: initial render,
/// then one render per replayed scroll delta.
pub struct SnapshotController<F: FilePresenterPort> {
    controller: InteractiveController<LatestFrame>,
    file_presenter: F,
}

impl<F: FilePresenterPort> SnapshotController<F> {
    pub fn new(config: &RendererConfig, file_presenter: F) -> Self {
        Self {
            controller: InteractiveController::new(config, LatestFrame::default()),
            file_presenter,
        }
    }

    pub fn generate(&mut self, scroll_deltas: &[f64]) {
        self.controller.initialize();

        for &delta in scroll_deltas {
            self.controller.scroll(delta);
        }
    }

    #[must_use]
    pub fn latest_frame(&self) -> Option<&FrameData> {
        self.controller.presenter().frame()
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.controller.render_count()
    }

    /// Writes the latest frame. Fails if nothing has been rendered yet.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let Some(frame) = self.latest_frame() else {
            return Err(std::io::Error::other("no frame has been rendered"));
        };

        self.file_presenter.present(&frame.pixel_buffer, &filepath)?;

        info!(
            "saved frame {} (zoom {}) to {}",
            frame.frame_number,
            frame.viewport.zoom,
            filepath.as_ref().display()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_buffer::PixelBuffer;
    use crate::core::data::surface_size::SurfaceSize;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct StubFilePresenter {
        written: RefCell<Vec<(PathBuf, usize)>>,
    }

    impl FilePresenterPort for StubFilePresenter {
        fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written
                .borrow_mut()
                .push((filepath.as_ref().to_path_buf(), buffer.buffer().len()));
            Ok(())
        }
    }

    fn small_config() -> RendererConfig {
        RendererConfig {
            surface: SurfaceSize::new(30, 20).unwrap(),
            ..RendererConfig::default()
        }
    }

    #[test]
    fn test_write_before_generate_is_an_error() {
        let controller = SnapshotController::new(&small_config(), StubFilePresenter::default());

        let err = controller.write("unused.ppm").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::Other);
        assert!(controller.file_presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_renders_initial_frame_plus_one_per_scroll() {
        let mut controller = SnapshotController::new(&small_config(), StubFilePresenter::default());

        controller.generate(&[-1.0, -1.0, 2.0]);

        assert_eq!(controller.render_count(), 4);
        let frame = controller.latest_frame().unwrap();
        assert_eq!(frame.frame_number, 4);
        assert_eq!(frame.viewport.zoom, 1.1 * 1.1 * 0.9);
    }

    #[test]
    fn test_write_hands_latest_frame_to_presenter() {
        let mut controller = SnapshotController::new(&small_config(), StubFilePresenter::default());
        controller.generate(&[]);

        controller.write("out/frame.ppm").unwrap();

        let written = controller.file_presenter.written.borrow();
        assert_eq!(written.as_slice(), &[(PathBuf::from("out/frame.ppm"), 4 * 30 * 20)]);
    }
}
