use clap::Parser;
use mandelbrot_zoom::{AppError, PpmFilePresenter, SnapshotCli, SnapshotController};

fn main() -> Result<(), AppError> {
    env_logger::init();

    let cli = SnapshotCli::parse();
    let config = cli.renderer.to_config(false)?;

    let mut controller = SnapshotController::new(&config, PpmFilePresenter::new());
    controller.generate(&cli.scroll);
    controller.write(&cli.output)?;

    Ok(())
}
