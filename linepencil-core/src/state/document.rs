//! The top-level owner: layers by name, plus the shared palette.

use hashbrown::hash_map::Entry;

use crate::color::{Color, PaletteIndex};
use crate::state::layer::{Frame, Layer};
use crate::state::palette::Palette;

/// A pencil document scoped to one editing session.
///
/// Created lazily by whoever hosts the pipeline; never destroyed by it. The
/// pipeline assumes it is the only mutator for the duration of a conversion -
/// invocations do not overlap.
pub struct Document {
    name: String,
    layers: hashbrown::HashMap<String, Layer>,
    active_layer: Option<String>,
    palette: Palette,
}

impl Default for Document {
    fn default() -> Self {
        Self::new("GPencil")
    }
}

impl Document {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            layers: hashbrown::HashMap::new(),
            active_layer: None,
            palette: Palette::default(),
        }
    }
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.get(name)
    }
    /// The most recently created layer, if any.
    #[must_use]
    pub fn active_layer(&self) -> Option<&Layer> {
        self.layers.get(self.active_layer.as_deref()?)
    }
    pub fn layers(&self) -> impl Iterator<Item = &Layer> {
        self.layers.values()
    }
    /// Look up a layer by name, creating it (and making it active) if absent.
    pub fn layer_mut_or_create(&mut self, name: &str) -> &mut Layer {
        layer_entry(&mut self.layers, &mut self.active_layer, name)
    }
    /// Resolve the destination frame for one conversion.
    ///
    /// The layer is created if missing. If it already existed and `overwrite`
    /// is set, every stroke in every frame of the layer is cleared first
    /// (frames stay). The frame keyed by `frame_number` is then found or
    /// created. Appending to the returned frame is the only write the
    /// converter performs.
    pub fn resolve_frame(
        &mut self,
        layer_name: &str,
        frame_number: i32,
        overwrite: bool,
    ) -> &mut Frame {
        self.resolve_targets(layer_name, frame_number, overwrite).0
    }
    /// [`Self::resolve_frame`], but also hands back the palette.
    ///
    /// Split borrow: the frame lives in the layer map, the palette is a
    /// sibling field, so the converter can stamp active colors while holding
    /// the frame.
    pub fn resolve_targets(
        &mut self,
        layer_name: &str,
        frame_number: i32,
        overwrite: bool,
    ) -> (&mut Frame, &mut Palette) {
        let existed = self.layers.contains_key(layer_name);
        let layer = layer_entry(&mut self.layers, &mut self.active_layer, layer_name);
        if existed && overwrite {
            layer.clear();
        }
        (layer.frame_mut_or_create(frame_number), &mut self.palette)
    }
    #[must_use]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }
    pub fn palette_mut(&mut self) -> &mut Palette {
        &mut self.palette
    }
    /// The active palette color, seeding the default black entry on first
    /// touch of an empty palette.
    pub fn active_color(&mut self) -> PaletteIndex {
        self.palette.active_or_default()
    }
    /// Find-or-insert `color` in the shared palette and make it active.
    pub fn resolve_color(&mut self, color: Color) -> PaletteIndex {
        self.palette.resolve(color)
    }
}

/// Lookup-or-create on the raw layer map. Free function so [`Document`] can
/// split-borrow the palette alongside the returned layer.
fn layer_entry<'a>(
    layers: &'a mut hashbrown::HashMap<String, Layer>,
    active_layer: &mut Option<String>,
    name: &str,
) -> &'a mut Layer {
    match layers.entry(name.to_owned()) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            log::info!("creating pencil layer {name:?}");
            *active_layer = Some(name.to_owned());
            entry.insert(Layer::new(name))
        }
    }
}
