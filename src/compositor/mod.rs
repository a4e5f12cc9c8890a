//! Flattening of transparent icons onto an opaque white background.

mod flatten;
mod icon;

pub use flatten::{flatten, Mode};
pub use icon::{Compositor, Config};
