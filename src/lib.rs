#![warn(missing_docs)]
#![doc = include_str!("../readme.md")]

/// A software raster canvas implementing the drawing surface
pub mod canvas;
/// 24-bit stroke colours and their hex tokens
pub mod colour;
/// Contains functions for doing various math tasks, including working with vectors
pub mod math;
/// Useful structs to have imported
pub mod prelude;
/// The line splatter routine and its driver
pub mod splatter;
/// The drawing surface abstraction
pub mod surface;
#[cfg(feature = "window")]
/// Contains functions for presenting a finished canvas in a window
pub mod window;

/// The image crate backs the canvas pixel storage
pub use image;
#[cfg(feature = "window")]
/// The minifb crate is used to put a canvas on screen
pub use minifb;
/// The nalgebra crate is used for vectors and matracies, have fun with math!
pub use nalgebra;
/// The rand crate is used to generate random numbers
pub use rand;

pub use canvas::Canvas;
pub use colour::Colour;
pub use surface::Surface;
