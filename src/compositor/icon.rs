//! Load, flatten and save a single icon.

use std::path::Path;

use image::RgbImage;

use crate::error::{Error, Result};
use crate::image::{load_image, save_image};

use super::flatten::{flatten, Mode};

/// Configuration for flattening an icon onto white.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Which transform resolves each pixel.
    pub mode: Mode,

    /// Pixels with alpha at or below this value stay white. `None` uses
    /// the mode's default. Ignored by [`Mode::Composite`].
    pub alpha_threshold: Option<u8>,

    /// In [`Mode::Filtered`], pixels whose R, G and B all exceed this value
    /// are treated as halo and dropped.
    pub white_threshold: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            alpha_threshold: None,
            white_threshold: 200,
        }
    }
}

impl Config {
    /// Effective alpha cutoff for the configured mode.
    #[must_use]
    pub fn alpha_cutoff(&self) -> u8 {
        self.alpha_threshold
            .unwrap_or_else(|| self.mode.default_alpha_threshold())
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any parameter is out of valid range.
    pub fn validate(&self) -> Result<()> {
        if self.mode != Mode::Composite && self.alpha_cutoff() == u8::MAX {
            return Err(Error::InvalidParameter {
                name: "alpha_threshold".to_string(),
                reason: "must be below 255, no pixel could pass it".to_string(),
            });
        }

        Ok(())
    }
}

/// Flattens icons from disk according to a validated [`Config`].
#[derive(Debug, Clone)]
pub struct Compositor {
    config: Config,
}

impl Compositor {
    /// Create a new compositor with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        tracing::debug!("Compositor config: {config:?}");
        Ok(Self { config })
    }

    /// The configuration this compositor was built with.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Flatten the image at `input_path` and write it to `output_path` as an
    /// RGB PNG, overwriting any existing file.
    ///
    /// Returns the flattened canvas.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded or the output cannot
    /// be written.
    pub fn process<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<RgbImage> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        tracing::info!("Processing image: {}", input_path.display());
        let source = load_image(input_path)?;

        let canvas = flatten(&source, &self.config);

        tracing::info!("Saving output to: {}", output_path.display());
        save_image(&canvas, output_path)?;

        Ok(canvas)
    }
}
