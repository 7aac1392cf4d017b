//! Document state: the layer/frame hierarchy and the shared palette.

pub mod document;
pub mod layer;
pub mod palette;

pub use document::Document;
pub use layer::{Frame, Layer};
pub use palette::Palette;
