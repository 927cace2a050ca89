//! Good set of default imports

pub use crate::canvas::Canvas;
pub use crate::colour::Colour;
pub use crate::math::{Fl, Vec2};
pub use crate::surface::{Recorder, Surface};
