//! # whitebg
//!
//! Flatten transparent icons onto an opaque white background.
//!
//! Three modes are available: plain "over" compositing, an opacity cutoff
//! that copies visible pixels as-is, and a colour filter that additionally
//! drops near-white anti-aliasing halos so only real icon colour remains.
//!
//! ## Example
//!
//! ```no_run
//! use whitebg::{Compositor, Config, Mode};
//!
//! # fn main() -> whitebg::Result<()> {
//! let config = Config {
//!     mode: Mode::Filtered,
//!     ..Config::default()
//! };
//! let compositor = Compositor::new(config)?;
//!
//! compositor.process("icon.png", "icon-pure-white.png")?;
//! # Ok(())
//! # }
//! ```

pub mod compositor;
pub mod error;
pub mod image;

pub use compositor::{flatten, Compositor, Config, Mode};
pub use error::{Error, Result};
