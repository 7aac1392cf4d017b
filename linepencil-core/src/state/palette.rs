//! Deduplicated color storage shared by every stroke in a document.

use crate::color::{Color, PaletteIndex};

/// An ordered collection of unique colors plus an "active" pointer.
///
/// Uniqueness is by rounded-channel comparison ([`Color::matches`]), so two
/// colors that differ only past the tolerance collapse into one entry.
/// Palettes stay small (tens of entries), which is why every lookup is a
/// plain linear scan in insertion order.
#[derive(Default, Clone)]
pub struct Palette {
    colors: Vec<Color>,
    active: Option<PaletteIndex>,
}

impl Palette {
    /// Append a new color and make it active, returning its index.
    pub fn push(&mut self, color: Color) -> PaletteIndex {
        let idx = PaletteIndex(self.colors.len());
        self.colors.push(color);
        self.active = Some(idx);
        idx
    }
    /// Find-or-insert by rounded-channel match.
    ///
    /// The first (oldest) matching entry wins and becomes active; when
    /// nothing matches, `candidate` is appended and becomes active. Either
    /// way the active pointer moves, so callers that depend on "the active
    /// color" must resolve immediately before using it, not speculatively.
    pub fn resolve(&mut self, candidate: Color) -> PaletteIndex {
        if let Some(i) = self.colors.iter().position(|c| c.matches(&candidate)) {
            let idx = PaletteIndex(i);
            self.active = Some(idx);
            log::debug!("palette matched {candidate:?} to existing entry {i}");
            idx
        } else {
            self.push(candidate)
        }
    }
    /// Ensure at least one entry exists. The document seeds a single black
    /// color the first time an empty palette is asked for its active color.
    pub fn seed_default(&mut self) {
        if self.colors.is_empty() {
            let _ = self.push(Color::BLACK);
        }
    }
    /// The active entry, seeding the default black if the palette is empty.
    pub fn active_or_default(&mut self) -> PaletteIndex {
        self.seed_default();
        match self.active {
            Some(idx) => idx,
            // Entries exist but nothing was ever activated - take the first.
            None => {
                let idx = PaletteIndex(0);
                self.active = Some(idx);
                idx
            }
        }
    }
    #[must_use]
    pub fn active(&self) -> Option<PaletteIndex> {
        self.active
    }
    /// Get a color from its index.
    #[must_use]
    pub fn get(&self, idx: PaletteIndex) -> Option<Color> {
        self.colors.get(idx.0).copied()
    }
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }
}
