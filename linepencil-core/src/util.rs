//! Fixed-precision rounding, used wherever two float tuples are asked "are
//! you the same color/point?".
//!
//! The tolerances are part of the dedup contract - changing the number of
//! places changes which palette entries merge, and thus which color existing
//! strokes end up referencing.

/// Decimal places for deciding whether two palette colors are the same.
pub const COLOR_MATCH_PLACES: u32 = 7;
/// Decimal places for the generic tuple comparison.
pub const TUPLE_MATCH_PLACES: u32 = 5;

/// Round a value to a fixed number of decimal places.
///
/// Intermediate math is done in `f64` so the quantization step itself doesn't
/// introduce error larger than the tolerance it implements.
#[must_use]
pub fn round_places(value: f32, places: u32) -> f32 {
    let scale = 10.0_f64.powi(places.try_into().unwrap_or(i32::MAX));
    ((f64::from(value) * scale).round() / scale) as f32
}

/// Componentwise rounded equality of two triples.
#[must_use]
pub fn compare_tuple(a: [f32; 3], b: [f32; 3], places: u32) -> bool {
    a.iter()
        .zip(&b)
        .all(|(&x, &y)| round_places(x, places) == round_places(y, places))
}
