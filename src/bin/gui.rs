use clap::Parser;
use mandelbrot_zoom::{AppError, GuiCli, PixelsPresenterFactory, RunGuiCommand};

fn main() -> Result<(), AppError> {
    env_logger::init();

    let cli = GuiCli::parse();
    let config = cli.renderer.to_config(!cli.no_hud)?;

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);
    command.execute()?;

    Ok(())
}
