//! The upstream stroke producer surface.
//!
//! The line-rendering system that decides which strokes are visible and
//! chains them into polylines is an external collaborator. This module only
//! names its contract: an ordered, finite set of strokes per render, each an
//! ordered sequence of vertices. The pipeline never looks behind it.

/// One vertex of a stylized source stroke.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SourceVertex {
    /// Position in scene world space.
    pub point_3d: [f32; 3],
    /// Projection onto the render, in pixels. Off-screen vertices may carry
    /// negative coordinates.
    pub point_2d: [f32; 2],
}

/// An ordered polyline of source vertices, read-only for the duration of one
/// conversion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SourceStroke {
    pub vertices: Vec<SourceVertex>,
}

impl SourceStroke {
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl FromIterator<SourceVertex> for SourceStroke {
    fn from_iter<I: IntoIterator<Item = SourceVertex>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

/// Which upstream selection/chaining recipe produced the stroke set.
///
/// The recipes themselves run upstream; this tag only records which one the
/// configuration asked for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ProducerKind {
    /// Every currently visible chained silhouette stroke.
    VisibleStrokes,
    /// Visible strokes of outer-contour nature, chained by shared shape
    /// continuity. The (disabled) fill pass would consume these.
    ExternalContour,
}

/// An opaque source of the current render's strokes.
pub trait StrokeProducer {
    /// The recipe this producer implements.
    fn kind(&self) -> ProducerKind;
    /// The finite, ordered stroke set for the current render.
    fn strokes(&self) -> Vec<SourceStroke>;
}
