//! Layers and their time-indexed frames.

use crate::stroke::Stroke;

/// A stroke container at one point on the animation timeline.
///
/// The frame number is fixed at creation - it is the key its layer finds it
/// by, so there is at most one frame per number per layer.
#[derive(Clone, Debug)]
pub struct Frame {
    frame_number: i32,
    pub strokes: Vec<Stroke>,
}

impl Frame {
    #[must_use]
    pub fn new(frame_number: i32) -> Self {
        Self {
            frame_number,
            strokes: Vec::new(),
        }
    }
    #[must_use]
    pub fn frame_number(&self) -> i32 {
        self.frame_number
    }
}

/// A named group of frames, independently clearable.
#[derive(Clone, Debug)]
pub struct Layer {
    name: String,
    frames: Vec<Frame>,
}

impl Layer {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            frames: Vec::new(),
        }
    }
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }
    /// Find the frame with the given number, if any.
    ///
    /// Linear scan - a layer gains one frame per render invocation, so counts
    /// stay small.
    #[must_use]
    pub fn frame_at(&self, frame_number: i32) -> Option<&Frame> {
        self.frames
            .iter()
            .find(|frame| frame.frame_number == frame_number)
    }
    /// Find the frame with the given number, creating it if absent.
    pub fn frame_mut_or_create(&mut self, frame_number: i32) -> &mut Frame {
        match self
            .frames
            .iter()
            .position(|frame| frame.frame_number == frame_number)
        {
            Some(i) => &mut self.frames[i],
            None => {
                self.frames.push(Frame::new(frame_number));
                // Just pushed, cannot be empty.
                self.frames.last_mut().unwrap()
            }
        }
    }
    /// Remove every stroke from every frame. The frames themselves stay -
    /// overwrite never deletes frames or layers, only their contents.
    pub fn clear(&mut self) {
        for frame in &mut self.frames {
            frame.strokes.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PaletteIndex;
    use crate::stroke::DrawMode;

    fn dummy_stroke() -> Stroke {
        Stroke::new(PaletteIndex(0), DrawMode::WorldSpace)
    }

    #[test]
    fn frame_lookup_or_create_is_idempotent() {
        let mut layer = Layer::new("test");
        layer.frame_mut_or_create(12).strokes.push(dummy_stroke());
        let frame = layer.frame_mut_or_create(12);
        assert_eq!(frame.strokes.len(), 1);
        assert_eq!(layer.frames().len(), 1);
    }

    #[test]
    fn frames_are_keyed_by_number() {
        let mut layer = Layer::new("test");
        layer.frame_mut_or_create(1);
        layer.frame_mut_or_create(-3);
        layer.frame_mut_or_create(1);
        assert_eq!(layer.frames().len(), 2);
        assert!(layer.frame_at(-3).is_some());
        assert!(layer.frame_at(2).is_none());
    }

    #[test]
    fn clear_empties_strokes_but_keeps_frames() {
        let mut layer = Layer::new("test");
        layer.frame_mut_or_create(1).strokes.push(dummy_stroke());
        layer.frame_mut_or_create(2).strokes.push(dummy_stroke());
        layer.clear();
        assert_eq!(layer.frames().len(), 2);
        assert!(layer.frames().iter().all(|frame| frame.strokes.is_empty()));
    }
}
