use crate::controllers::cli::render_config::{OutputFormat, RenderConfig};
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::actions::render::{RenderError, render, render_parallel};
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::presenters::file::png::PngFilePresenter;
use crate::presenters::file::ppm::PpmFilePresenter;
use log::{info, warn};
use std::error::Error;
use std::fs;
use std::path::Path;
use std::time::Instant;

pub struct CliController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> CliController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn generate(&mut self, config: &RenderConfig) -> Result<(), RenderError> {
        let params = config.params;

        info!(
            "Rendering {} set, {}x{}, max iterations {}",
            params.mode().kind(),
            config.width,
            config.height,
            params.max_iterations()
        );

        let start = Instant::now();
        let buffer = if config.parallel {
            render_parallel(config.viewport, params, config.width, config.height)?
        } else {
            render(config.viewport, params, config.width, config.height)?
        };

        info!("Rendered in {:?}", start.elapsed());

        self.buffer = Some(buffer);
        Ok(())
    }

    #[must_use]
    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Hands the last frame to the presenter, creating missing parent
    /// directories first. Does nothing before the first `generate`.
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        let Some(buffer) = &self.buffer else {
            warn!("Nothing rendered yet, skipping write to {}", filepath.display());
            return Ok(());
        };

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        self.presenter.present(buffer, filepath)?;
        info!("Saved to {}", filepath.display());

        Ok(())
    }
}

fn generate_and_write<P: FilePresenterPort>(
    presenter: P,
    config: &RenderConfig,
) -> Result<(), Box<dyn Error>> {
    let mut controller = CliController::new(presenter);

    controller.generate(config)?;
    controller.write(&config.output)?;

    Ok(())
}

/// Renders `config` and writes it in the format its output path asks for.
pub fn run(config: &RenderConfig) -> Result<(), Box<dyn Error>> {
    match config.output_format() {
        OutputFormat::Png => generate_and_write(PngFilePresenter::new(), config),
        OutputFormat::Ppm => generate_and_write(PpmFilePresenter::new(), config),
    }
}
