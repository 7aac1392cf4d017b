//! # Strokes
//!
//! The polylines a frame stores: ordered points with per-point attributes,
//! tagged with a palette color and the space their coordinates live in.

use crate::color::PaletteIndex;

/// The coordinate space a stroke's point positions are expressed in.
///
/// The string forms are the identifiers the host configuration uses
/// (`3DSPACE`, `SCREEN`, ..). Only [`WorldSpace`](DrawMode::WorldSpace) and
/// [`ScreenSpace`](DrawMode::ScreenSpace) have projections implemented; the
/// other two exist in the host enum but are rejected by the pipeline.
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
pub enum DrawMode {
    /// Scene-anchored 3D coordinates, via the camera's local-to-world
    /// transform.
    #[default]
    #[strum(serialize = "3DSPACE")]
    WorldSpace,
    /// Coordinates normalized to the render dimensions.
    #[strum(serialize = "SCREEN")]
    ScreenSpace,
    /// Unsupported flat 2D export.
    #[strum(serialize = "2DSPACE")]
    Flat2d,
    /// Unsupported 2D image export.
    #[strum(serialize = "2DIMAGE")]
    Image2d,
}

impl DrawMode {
    /// Whether a projection exists for this mode.
    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, Self::WorldSpace | Self::ScreenSpace)
    }
}

/// One emitted point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    /// Position in the stroke's draw-mode space.
    pub co: [f32; 3],
    pub select: bool,
    /// Pen pressure, in `[0, 1]`.
    pub pressure: f32,
    /// Color strength, in `[0, 1]`.
    pub strength: f32,
}

/// An ordered polyline of [`Point`]s referencing one palette color.
///
/// Strokes are built once by the converter and never edited afterwards by
/// this pipeline.
#[derive(Clone, Debug)]
pub struct Stroke {
    points: Vec<Point>,
    /// Handle into the document palette. The palette owns the color.
    pub color: PaletteIndex,
    pub draw_mode: DrawMode,
}

impl Stroke {
    #[must_use]
    pub fn new(color: PaletteIndex, draw_mode: DrawMode) -> Self {
        Self::with_capacity(color, draw_mode, 0)
    }
    /// Create an empty stroke with room for `count` points.
    #[must_use]
    pub fn with_capacity(color: PaletteIndex, draw_mode: DrawMode, count: usize) -> Self {
        Self {
            points: Vec::with_capacity(count),
            color,
            draw_mode,
        }
    }
    /// Append a point at the end.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    /// Number of points in this stroke.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
