//! Image loading and saving utilities.

mod load;
mod save;

pub use load::load_image;
pub use save::{encode_png, save_image};

use image::Rgb;

/// Opaque white, the background every flattened canvas starts from.
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
