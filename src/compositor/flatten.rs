//! Per-pixel flattening of an RGBA source onto a white canvas.

use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::image::WHITE;

use super::icon::Config;

/// How transparent regions and foreground pixels are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Alpha-blend the source over white ("over" compositing).
    #[default]
    Composite,
    /// Copy RGB for every pixel whose alpha exceeds the cutoff.
    Opaque,
    /// Like [`Mode::Opaque`], but also drop near-white pixels so
    /// anti-aliasing halos disappear and only icon colour survives.
    Filtered,
}

impl Mode {
    /// Alpha cutoff used when the config does not override it.
    #[must_use]
    pub const fn default_alpha_threshold(self) -> u8 {
        match self {
            Self::Composite | Self::Opaque => 0,
            Self::Filtered => 128,
        }
    }

    /// Suffix appended to the source file stem for the default output name.
    #[must_use]
    pub const fn output_suffix(self) -> &'static str {
        match self {
            Self::Composite => "white",
            Self::Opaque => "opaque",
            Self::Filtered => "pure-white",
        }
    }
}

/// Flatten `source` onto an opaque white canvas of the same size.
///
/// The returned canvas never carries alpha. Pixels that are not kept by
/// the configured mode stay exactly (255, 255, 255).
#[must_use]
pub fn flatten(source: &RgbaImage, config: &Config) -> RgbImage {
    let (width, height) = source.dimensions();
    let mut canvas = RgbImage::from_pixel(width, height, WHITE);

    match config.mode {
        Mode::Composite => {
            for (x, y, pixel) in source.enumerate_pixels() {
                canvas.put_pixel(x, y, over_white(*pixel));
            }
        }
        Mode::Opaque | Mode::Filtered => {
            let mut kept = 0usize;
            for (x, y, pixel) in source.enumerate_pixels() {
                if retains(*pixel, config) {
                    let [r, g, b, _] = pixel.0;
                    canvas.put_pixel(x, y, Rgb([r, g, b]));
                    kept += 1;
                }
            }
            tracing::debug!(
                "Kept {kept} of {} pixels",
                u64::from(width) * u64::from(height)
            );
        }
    }

    canvas
}

/// Whether a copy-mode pixel keeps its RGB on the canvas.
fn retains(pixel: Rgba<u8>, config: &Config) -> bool {
    let [r, g, b, a] = pixel.0;
    if a <= config.alpha_cutoff() {
        return false;
    }

    match config.mode {
        Mode::Filtered => {
            let limit = config.white_threshold;
            !(r > limit && g > limit && b > limit)
        }
        Mode::Opaque | Mode::Composite => true,
    }
}

/// Composite a single pixel over opaque white, rounding half up.
#[inline]
fn over_white(pixel: Rgba<u8>) -> Rgb<u8> {
    let [r, g, b, a] = pixel.0;
    Rgb([blend(r, a), blend(g, a), blend(b, a)])
}

#[inline]
#[allow(clippy::cast_possible_truncation)]
fn blend(channel: u8, alpha: u8) -> u8 {
    let alpha = u16::from(alpha);
    // Max numerator is 255 * 255 + 127, so the quotient fits in u8.
    ((u16::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255) as u8
}
