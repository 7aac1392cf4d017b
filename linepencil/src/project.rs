//! Source-vertex projection into the destination coordinate space.

use cgmath::prelude::*;
use linepencil_core::stroke::DrawMode;

use crate::scene::RenderDimensions;
use crate::source::SourceVertex;

#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum ProjectError {
    /// The selected draw mode has no projection. Reaching this is a
    /// configuration error, not a runtime condition to recover from.
    #[error("draw mode {0} is not supported")]
    UnsupportedMode(DrawMode),
}

/// Map one source vertex into the destination space for `mode`.
///
/// * [`DrawMode::WorldSpace`]: the camera's local-to-world transform applied
///   to the vertex's 3D position. Pure linear map, no state.
/// * [`DrawMode::ScreenSpace`]: `(|x / width|, |y / height|, 0) * 100` from
///   the vertex's 2D projection. The absolute value folds negative screen
///   coordinates onto the positive quadrant; downstream documents rely on
///   exactly this normalization, so it must not be "fixed".
pub fn project(
    vertex: &SourceVertex,
    mode: DrawMode,
    camera_to_world: &cgmath::Matrix4<f32>,
    dimensions: RenderDimensions,
) -> Result<[f32; 3], ProjectError> {
    match mode {
        DrawMode::WorldSpace => {
            let [x, y, z] = vertex.point_3d;
            let world = camera_to_world.transform_point(cgmath::Point3::new(x, y, z));
            Ok([world.x, world.y, world.z])
        }
        DrawMode::ScreenSpace => {
            let [x, y] = vertex.point_2d;
            Ok([
                (x / dimensions.width as f32).abs() * 100.0,
                (y / dimensions.height as f32).abs() * 100.0,
                0.0,
            ])
        }
        mode => Err(ProjectError::UnsupportedMode(mode)),
    }
}
