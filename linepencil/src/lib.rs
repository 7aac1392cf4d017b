//! # linepencil
//!
//! Ingests the stylized strokes of a line-render pass and re-projects them
//! into a layered, paletted pencil document ([`linepencil_core`]) that a
//! downstream drawing tool can store, display, and re-edit frame by frame.
//!
//! The host hands the pipeline an ordered stroke list (from an opaque
//! [`source::StrokeProducer`]) and a [`scene::SceneContext`] snapshot; the
//! [`export`] drivers resolve the destination layer/frame and run the
//! [`convert`] step, which projects every vertex per the configured
//! [`linepencil_core::stroke::DrawMode`].

pub mod convert;
pub mod export;
pub mod project;
pub mod scene;
pub mod source;
