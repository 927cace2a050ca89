use std::fmt::{self, Display};

/// Number of representable 24-bit colours, and the exclusive upper bound for
/// sampling one at random
pub const COLOUR_SPACE: u32 = 1 << 24;

/// A 24-bit RGB stroke colour
///
/// The canonical textual form is the hex token `#rrggbb`: lowercase, always
/// exactly six digits, zero-padded on the left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(::serde::Deserialize, ::serde::Serialize))]
pub struct Colour(u32);

impl Colour {
    /// Create a colour from a packed 24-bit RGB value, masking off anything
    /// above the low 24 bits
    #[inline(always)]
    pub fn from_rgb24(value: u32) -> Self {
        Self(value & (COLOUR_SPACE - 1))
    }
    /// Create a colour from separate channel values
    pub fn from_channels(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }
    /// The packed 24-bit RGB value
    #[inline(always)]
    pub fn value(&self) -> u32 {
        self.0
    }
    /// The red channel
    pub fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }
    /// The green channel
    pub fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }
    /// The blue channel
    pub fn blue(&self) -> u8 {
        self.0 as u8
    }
    /// The `#rrggbb` hex token for this colour
    pub fn token(&self) -> String {
        self.to_string()
    }
}

impl Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
