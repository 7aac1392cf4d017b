//! Export drivers and the host-facing configuration surface.
//!
//! Two passes exist: the "stroke" pass, which writes the full stylized
//! stroke set, and the "fill" pass, which is a deliberate no-op (see
//! [`export_fill`]). The host invokes them through [`Hooks`] around its
//! lineset processing.

use anyhow::Context as _;
use linepencil_core::state::Document;
use linepencil_core::stroke::DrawMode;

use crate::convert::convert_strokes;
use crate::scene::SceneContext;
use crate::source::{SourceStroke, StrokeProducer};

/// Layer receiving the raw stroke pass.
pub const STROKE_LAYER: &str = "freestyle stroke";
/// Layer the fill pass would target, were it enabled.
pub const FILL_LAYER: &str = "freestyle fill";

/// The user-facing toggles, snapshotted into the [`SceneContext`]. Pure
/// configuration - none of these carry logic of their own.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ExportSettings {
    /// Master switch. When off, the hooks skip both passes entirely.
    pub enabled: bool,
    pub draw_mode: DrawMode,
    /// Fill external contours with the object color. Inert while the fill
    /// pass is disabled.
    pub fill: bool,
    /// Clear previously exported strokes from the layer before writing new
    /// ones.
    pub overwrite: bool,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            draw_mode: DrawMode::WorldSpace,
            fill: false,
            overwrite: true,
        }
    }
}

/// Owner of the session's document.
///
/// The document is created lazily on its first access and lives for the rest
/// of the editing session - nothing in this pipeline ever destroys it.
/// Callers must never assume the document (or its palette) already has
/// content.
#[derive(Default)]
pub struct Session {
    document: Option<Document>,
}

impl Session {
    /// The session document, created on first access.
    pub fn document_mut(&mut self) -> &mut Document {
        if self.document.is_none() {
            log::info!("creating session pencil document");
        }
        self.document.get_or_insert_with(Document::default)
    }
    /// The session document, if one has been created.
    #[must_use]
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }
}

/// The "stroke" pass: converts the full, unfiltered stroke set into the
/// [`STROKE_LAYER`], honoring the overwrite setting.
pub fn export_strokes(
    document: &mut Document,
    strokes: &[SourceStroke],
    scene: &SceneContext,
) -> anyhow::Result<()> {
    log::info!(
        "stroke pass: {} strokes at frame {}",
        strokes.len(),
        scene.frame_current
    );
    let (frame, palette) =
        document.resolve_targets(STROKE_LAYER, scene.frame_current, scene.settings.overwrite);
    convert_strokes(strokes, frame, palette, scene, 1.0)
        .with_context(|| format!("stroke pass into layer {STROKE_LAYER:?}"))
}

/// The "fill" pass hook.
///
/// Deliberately inert: filling external contours mis-renders concave 3D
/// geometry, so until that is solved this only reserves the extension point
/// (and the [`FILL_LAYER`] name). It never touches the document.
pub fn export_fill(
    _document: &mut Document,
    _strokes: &[SourceStroke],
    _scene: &SceneContext,
) -> anyhow::Result<()> {
    log::debug!("fill pass requested - disabled for concave 3D contours");
    Ok(())
}

/// A render-lifecycle callback invoked around lineset processing.
pub type LinesetCallback =
    fn(&mut Document, &[SourceStroke], &SceneContext) -> anyhow::Result<()>;

/// The callback lists the host runs before and after lineset processing.
#[derive(Default)]
pub struct Hooks {
    pre: Vec<LinesetCallback>,
    post: Vec<LinesetCallback>,
}

impl Hooks {
    /// Install the exporter: fill before lineset processing, strokes after.
    pub fn register(&mut self) {
        self.pre.push(export_fill);
        self.post.push(export_strokes);
    }
    /// Remove the exporter's callbacks.
    pub fn unregister(&mut self) {
        self.pre.retain(|&callback| callback != export_fill as LinesetCallback);
        self.post
            .retain(|&callback| callback != export_strokes as LinesetCallback);
    }
    /// Run the pre-lineset callbacks. Skipped wholesale when the exporter is
    /// disabled.
    pub fn run_pre(
        &self,
        session: &mut Session,
        producer: &dyn StrokeProducer,
        scene: &SceneContext,
    ) -> anyhow::Result<()> {
        self.run(&self.pre, session, producer, scene)
    }
    /// Run the post-lineset callbacks. Skipped wholesale when the exporter
    /// is disabled.
    pub fn run_post(
        &self,
        session: &mut Session,
        producer: &dyn StrokeProducer,
        scene: &SceneContext,
    ) -> anyhow::Result<()> {
        self.run(&self.post, session, producer, scene)
    }
    fn run(
        &self,
        callbacks: &[LinesetCallback],
        session: &mut Session,
        producer: &dyn StrokeProducer,
        scene: &SceneContext,
    ) -> anyhow::Result<()> {
        // When disabled, skip before even the lazy document gets created.
        if !scene.settings.enabled {
            return Ok(());
        }
        // Fetch once - every callback of this phase sees the same stroke set.
        let strokes = producer.strokes();
        let document = session.document_mut();
        for callback in callbacks {
            callback(document, &strokes, scene)?;
        }
        Ok(())
    }
}
