//! Per-invocation snapshot of the host scene.
//!
//! Everything the pipeline reads from the host is captured here once, at
//! entry, so a batch cannot tear if the host mutates scene state while a
//! conversion is in flight.

use crate::export::ExportSettings;

/// Effective render output size, in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RenderDimensions {
    pub width: u32,
    pub height: u32,
}

impl RenderDimensions {
    /// Base resolution scaled by the render percentage, truncated - the exact
    /// size the line renderer projected against.
    #[must_use]
    pub fn new(resolution_x: u32, resolution_y: u32, percentage: u32) -> Self {
        Self {
            width: resolution_x * percentage / 100,
            height: resolution_y * percentage / 100,
        }
    }
}

/// Snapshot of the scene state one conversion batch runs against.
#[derive(Clone, Debug)]
pub struct SceneContext {
    /// The camera's local-to-world transform.
    pub camera_to_world: cgmath::Matrix4<f32>,
    pub dimensions: RenderDimensions,
    /// Current position on the animation timeline. The destination frame is
    /// keyed by this.
    pub frame_current: i32,
    pub settings: ExportSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions_scale_and_truncate() {
        assert_eq!(
            RenderDimensions::new(1920, 1080, 100),
            RenderDimensions {
                width: 1920,
                height: 1080
            }
        );
        assert_eq!(
            RenderDimensions::new(1920, 1080, 50),
            RenderDimensions {
                width: 960,
                height: 540
            }
        );
        // 33% of 5 px truncates, it does not round.
        assert_eq!(
            RenderDimensions::new(5, 3, 33),
            RenderDimensions {
                width: 1,
                height: 0
            }
        );
    }
}
