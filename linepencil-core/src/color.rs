//! Palette colors and handles to them.

use crate::util::{compare_tuple, COLOR_MATCH_PLACES};

/// Index of a color within a document's palette.
///
/// Strokes hold one of these rather than a color of their own - the palette
/// owns the actual value for the document's lifetime.
#[repr(transparent)]
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
pub struct PaletteIndex(pub usize);

/// An RGB color with channels in `[0, 1]`.
///
/// Equality between palette entries is decided by *rounded* channel
/// comparison ([`Color::matches`]), never by exact float equality.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color([f32; 3]);

impl Color {
    pub const BLACK: Self = Self([0.0; 3]);
    pub const WHITE: Self = Self([1.0; 3]);

    /// Create a color from rgb channels. Non-finite channels are rejected.
    pub fn new(r: f32, g: f32, b: f32) -> Result<Self, ColorError> {
        if r.is_finite() && g.is_finite() && b.is_finite() {
            Ok(Self([r, g, b]))
        } else {
            Err(ColorError::NotFinite)
        }
    }

    /// Create a color from an rgb array. Non-finite channels are rejected.
    pub fn from_array([r, g, b]: [f32; 3]) -> Result<Self, ColorError> {
        Self::new(r, g, b)
    }

    #[must_use]
    pub fn as_array(&self) -> [f32; 3] {
        self.0
    }

    /// Rounded-channel equality at [`COLOR_MATCH_PLACES`] decimal places.
    ///
    /// This, not `==`, is the comparison the palette dedups by.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        compare_tuple(self.0, other.0, COLOR_MATCH_PLACES)
    }
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorError {
    #[error("not finite")]
    NotFinite,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_finite() {
        assert_eq!(Color::new(f32::NAN, 0.0, 0.0), Err(ColorError::NotFinite));
        assert_eq!(Color::new(0.0, f32::INFINITY, 0.0), Err(ColorError::NotFinite));
        assert!(Color::new(0.1, 0.2, 0.3).is_ok());
    }

    #[test]
    fn matches_is_rounded_not_exact() {
        let a = Color::new(0.5, 0.25, 0.125).unwrap();
        // One ulp above 0.125 - well inside the 7-place tolerance.
        let b = Color::new(0.5, 0.25, 0.125_000_015).unwrap();
        assert_ne!(a, b);
        assert!(a.matches(&b));
    }
}
