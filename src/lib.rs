//! ascii-image library crate.
//!
//! Converts raster images to text using a fixed density ramp. The
//! [`ascii`] module is the pure renderer; [`session`] wraps it with
//! load/save handlers for front ends.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod error;
pub mod session;

pub use ascii::{render, AsciiArt, PixelGrid, RenderError};
pub use error::ConvertError;
pub use session::Session;
