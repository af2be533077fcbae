//! Drawing-surface abstraction.
//!
//! The renderer needs only this capability set; any 2D raster backend that
//! can satisfy it (a canvas adapter, a test buffer, the bundled tiny-skia
//! surface) can display beta frames.

use fermata_pose_core::Point;

use crate::color::Color;

pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Restore the surface to its background. Called at the start of every
    /// frame so nothing ghosts through from the previous state.
    fn clear(&mut self);

    /// Filled circular marker.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Open polyline (limbs).
    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color);

    /// Closed polygon outline (torso).
    fn stroke_polygon(&mut self, points: &[Point], width: f32, color: Color);

    /// Short label text with `origin` at its top-left corner.
    fn draw_label(&mut self, origin: Point, text: &str, color: Color);
}
