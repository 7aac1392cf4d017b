//! The stroke converter: source polylines into document strokes.

use linepencil_core::state::{Frame, Palette};
use linepencil_core::stroke::{DrawMode, Point, Stroke};

use crate::project::{project, ProjectError};
use crate::scene::SceneContext;
use crate::source::SourceStroke;

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Project(#[from] ProjectError),
}

/// Convert a batch of source strokes into `frame`.
///
/// For each source stroke, in input order: resolve the active palette color
/// (one color per stroke, shared by all its points), project every vertex
/// per the snapshot's draw mode, and append the finished stroke to the
/// frame.
///
/// The draw mode is a batch-level parameter and is validated before any
/// stroke is touched: with an unsupported mode the whole batch fails and the
/// frame is left exactly as it was. There is no per-stroke partial success.
///
/// `pressure` is stamped on every point in world space; the screen-space
/// branch fixes pressure at 1 regardless, mirroring the original exporter.
pub fn convert_strokes(
    strokes: &[SourceStroke],
    frame: &mut Frame,
    palette: &mut Palette,
    scene: &SceneContext,
    pressure: f32,
) -> Result<(), ConvertError> {
    let mode = scene.settings.draw_mode;
    if !mode.is_supported() {
        return Err(ProjectError::UnsupportedMode(mode).into());
    }
    log::debug!(
        "converting {} strokes into frame {} ({mode})",
        strokes.len(),
        frame.frame_number(),
    );
    for source in strokes {
        let color = palette.active_or_default();
        let mut stroke = Stroke::with_capacity(color, mode, source.len());
        for vertex in &source.vertices {
            let co = project(vertex, mode, &scene.camera_to_world, scene.dimensions)?;
            stroke.push(Point {
                co,
                select: true,
                strength: 1.0,
                pressure: if mode == DrawMode::WorldSpace {
                    pressure
                } else {
                    1.0
                },
            });
        }
        frame.strokes.push(stroke);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::ExportSettings;
    use crate::scene::RenderDimensions;
    use crate::source::SourceVertex;
    use cgmath::prelude::*;
    use linepencil_core::state::Document;

    fn scene_with(draw_mode: DrawMode) -> SceneContext {
        SceneContext {
            camera_to_world: cgmath::Matrix4::identity(),
            dimensions: RenderDimensions::new(800, 600, 100),
            frame_current: 1,
            settings: ExportSettings {
                draw_mode,
                ..ExportSettings::default()
            },
        }
    }

    fn triangle() -> SourceStroke {
        [
            ([0.0, 0.0, 0.0], [0.0, 0.0]),
            ([1.0, 0.0, 0.0], [-50.0, 25.0]),
            ([0.0, 1.0, 1.0], [800.0, 600.0]),
        ]
        .into_iter()
        .map(|(point_3d, point_2d)| SourceVertex { point_3d, point_2d })
        .collect()
    }

    #[test]
    fn world_space_preserves_positions_under_identity() {
        let mut document = Document::default();
        let scene = scene_with(DrawMode::WorldSpace);
        let (frame, palette) = document.resolve_targets("layer", 1, true);
        convert_strokes(&[triangle()], frame, palette, &scene, 1.0).unwrap();

        assert_eq!(frame.strokes.len(), 1);
        let stroke = &frame.strokes[0];
        assert_eq!(stroke.draw_mode, DrawMode::WorldSpace);
        assert_eq!(stroke.len(), 3);
        for (point, source) in stroke.points().iter().zip(&triangle().vertices) {
            assert_eq!(point.co, source.point_3d);
            assert!(point.select);
            assert_eq!(point.pressure, 1.0);
            assert_eq!(point.strength, 1.0);
        }
    }

    #[test]
    fn world_space_honors_the_pressure_parameter() {
        let mut document = Document::default();
        let scene = scene_with(DrawMode::WorldSpace);
        let (frame, palette) = document.resolve_targets("layer", 1, true);
        convert_strokes(&[triangle()], frame, palette, &scene, 0.25).unwrap();
        assert!(frame.strokes[0]
            .points()
            .iter()
            .all(|point| point.pressure == 0.25));
    }

    #[test]
    fn screen_space_normalizes_and_ignores_pressure() {
        let mut document = Document::default();
        let scene = scene_with(DrawMode::ScreenSpace);
        let (frame, palette) = document.resolve_targets("layer", 1, true);
        convert_strokes(&[triangle()], frame, palette, &scene, 0.25).unwrap();

        let points = frame.strokes[0].points();
        // (-50, 25) at 800x600: abs-normalized into [0, 100].
        assert_eq!(points[1].co[0], 6.25);
        assert!((points[1].co[1] - 25.0 / 600.0 * 100.0).abs() < 1e-6);
        assert_eq!(points[1].co[2], 0.0);
        // Screen space hard-codes pressure to 1, the parameter is ignored.
        assert!(points.iter().all(|point| point.pressure == 1.0));
    }

    #[test]
    fn strokes_share_the_active_color() {
        let mut document = Document::default();
        let red = document.resolve_color(
            linepencil_core::color::Color::new(1.0, 0.0, 0.0).unwrap(),
        );
        let scene = scene_with(DrawMode::WorldSpace);
        let (frame, palette) = document.resolve_targets("layer", 1, true);
        convert_strokes(&[triangle(), triangle()], frame, palette, &scene, 1.0).unwrap();
        assert!(frame.strokes.iter().all(|stroke| stroke.color == red));
    }

    #[test]
    fn unsupported_mode_fails_the_batch_without_writes() {
        let mut document = Document::default();
        let scene = scene_with(DrawMode::Flat2d);
        let (frame, palette) = document.resolve_targets("layer", 1, false);
        let result = convert_strokes(&[triangle()], frame, palette, &scene, 1.0);
        assert!(matches!(
            result,
            Err(ConvertError::Project(ProjectError::UnsupportedMode(
                DrawMode::Flat2d
            )))
        ));
        assert!(frame.strokes.is_empty());
    }
}
