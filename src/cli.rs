use crate::config::{ConfigError, RawRendererConfig, RendererConfig};
use crate::core::data::surface_size::{DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH};
use crate::core::data::viewport::{DEFAULT_ZOOM_IN_FACTOR, DEFAULT_ZOOM_OUT_FACTOR};
use crate::core::fractals::mandelbrot::params::{DEFAULT_ESCAPE_THRESHOLD, DEFAULT_MAX_ITERATIONS};
use clap::Args;
use std::path::PathBuf;

pub const DEFAULT_OUTPUT_PATH: &str = "output/mandelbrot.ppm";

/// Renderer flags shared by every binary.
#[derive(Args, Debug, Clone, PartialEq)]
pub struct RendererArgs {
    /// Surface width in pixels
    #[arg(long, default_value_t = DEFAULT_SURFACE_WIDTH)]
    pub width: u32,

    /// Surface height in pixels
    #[arg(long, default_value_t = DEFAULT_SURFACE_HEIGHT)]
    pub height: u32,

    /// Iteration ceiling; points reaching it are drawn black
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: u32,

    /// Escape threshold for |re(z) + im(z)|
    #[arg(long, default_value_t = DEFAULT_ESCAPE_THRESHOLD)]
    pub escape_threshold: f64,

    /// Zoom multiplier applied when scrolling up
    #[arg(long, default_value_t = DEFAULT_ZOOM_IN_FACTOR)]
    pub zoom_in_factor: f64,

    /// Zoom multiplier applied when scrolling down
    #[arg(long, default_value_t = DEFAULT_ZOOM_OUT_FACTOR)]
    pub zoom_out_factor: f64,

    /// Lower zoom clamp (unclamped when omitted)
    #[arg(long)]
    pub min_zoom: Option<f64>,

    /// Upper zoom clamp (unclamped when omitted)
    #[arg(long)]
    pub max_zoom: Option<f64>,
}

impl RendererArgs {
    pub fn to_config(&self, show_hud: bool) -> Result<RendererConfig, ConfigError> {
        RendererConfig::try_from(RawRendererConfig {
            width: self.width,
            height: self.height,
            max_iterations: self.max_iterations,
            escape_threshold: self.escape_threshold,
            zoom_in_factor: self.zoom_in_factor,
            zoom_out_factor: self.zoom_out_factor,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            show_hud,
        })
    }
}

/// Headless snapshot: replay scroll events, then save the final frame.
#[derive(clap::Parser, Debug, Clone, PartialEq)]
#[command(name = "mandelbrot_zoom", about = "Render the Mandelbrot set to a PPM file")]
pub struct SnapshotCli {
    #[command(flatten)]
    pub renderer: RendererArgs,

    /// Scroll deltas to apply in order; negative zooms in, anything else zooms out
    #[arg(long = "scroll", allow_hyphen_values = true, value_delimiter = ',')]
    pub scroll: Vec<f64>,

    /// Where to write the binary PPM image
    #[arg(long, short, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

/// Interactive window.
#[derive(clap::Parser, Debug, Clone, PartialEq)]
#[command(name = "gui", about = "Scroll to zoom into the Mandelbrot set")]
pub struct GuiCli {
    #[command(flatten)]
    pub renderer: RendererArgs,

    /// Hide the zoom/offset overlay
    #[arg(long)]
    pub no_hud: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_snapshot_defaults() {
        let cli = SnapshotCli::try_parse_from(["mandelbrot_zoom"]).unwrap();

        assert!(cli.scroll.is_empty());
        assert_eq!(cli.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(
            cli.renderer.to_config(false).unwrap(),
            RendererConfig {
                show_hud: false,
                ..RendererConfig::default()
            }
        );
    }

    #[test]
    fn test_snapshot_parses_negative_scroll_deltas() {
        let cli = SnapshotCli::try_parse_from([
            "mandelbrot_zoom",
            "--scroll",
            "-1,-1,3",
            "--scroll=-120",
        ])
        .unwrap();

        assert_eq!(cli.scroll, vec![-1.0, -1.0, 3.0, -120.0]);
    }

    #[test]
    fn test_gui_no_hud_flag() {
        let cli = GuiCli::try_parse_from(["gui", "--no-hud", "--max-iterations", "50"]).unwrap();

        let config = cli.renderer.to_config(!cli.no_hud).unwrap();

        assert!(!config.show_hud);
        assert_eq!(config.params.max_iterations(), 50);
    }

    #[test]
    fn test_invalid_flags_surface_as_config_errors() {
        let cli = SnapshotCli::try_parse_from(["mandelbrot_zoom", "--width", "0"]).unwrap();

        assert!(cli.renderer.to_config(false).is_err());
    }
}
