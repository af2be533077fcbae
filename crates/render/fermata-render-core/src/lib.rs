//! Fermata Render Core
//!
//! Turns holds + a beta sequence into raster frames: a drawing-surface
//! abstraction, a tiny-skia backed surface with an embedded label font,
//! and the per-state sequence renderer. Pose math lives in
//! `fermata-pose-core`; this crate only composites.

pub mod color;
pub mod font;
pub mod pixmap;
pub mod sequence;
pub mod surface;

pub use color::Color;
pub use pixmap::{PixmapSurface, RenderError};
pub use sequence::{RenderOptions, SequenceRenderer, StepLabeling};
pub use surface::Surface;
