//! # linepencil-core
//!
//! The destination document model for the line-render exporter: a document of
//! named layers, each holding time-indexed frames of polyline strokes, plus a
//! deduplicated color palette shared by every stroke.
//!
//! The conversion pipeline itself lives in the `linepencil` crate; this crate
//! only knows how to store and resolve state.

pub mod color;
pub mod state;
pub mod stroke;
pub mod util;
