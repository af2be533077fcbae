//! tiny-skia implementation of the drawing surface.
//!
//! Owns the target pixmap and an optional background (the wall photo,
//! already decoded and resized by the host) that `clear` re-blits at the
//! start of every frame.

use thiserror::Error;
use tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, Transform,
};

use fermata_pose_core::Point;

use crate::color::Color;
use crate::font;
use crate::surface::Surface;

/// Integer scale applied to the 5x7 label font (21 px tall at 3).
const LABEL_SCALE: u32 = 3;
/// Drop-shadow offset in pixels, for contrast over arbitrary photos.
const LABEL_SHADOW_OFFSET: f32 = 1.0;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("surface dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
    #[error("background is {actual_w}x{actual_h} but the surface is {expected_w}x{expected_h}")]
    BackgroundSize {
        expected_w: u32,
        expected_h: u32,
        actual_w: u32,
        actual_h: u32,
    },
}

/// Raster surface backed by a tiny-skia [`Pixmap`].
pub struct PixmapSurface {
    pixmap: Pixmap,
    background: Option<Pixmap>,
}

impl PixmapSurface {
    /// Create a blank surface. Fails only on zero dimensions.
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        let pixmap =
            Pixmap::new(width, height).ok_or(RenderError::InvalidDimensions { width, height })?;
        let mut surface = Self {
            pixmap,
            background: None,
        };
        surface.clear();
        Ok(surface)
    }

    /// Set the wall image. Its pixel dimensions must match the surface,
    /// mirroring the export contract (page size == image size).
    pub fn set_background(&mut self, background: Pixmap) -> Result<(), RenderError> {
        if background.width() != self.pixmap.width() || background.height() != self.pixmap.height()
        {
            return Err(RenderError::BackgroundSize {
                expected_w: self.pixmap.width(),
                expected_h: self.pixmap.height(),
                actual_w: background.width(),
                actual_h: background.height(),
            });
        }
        self.background = Some(background);
        self.clear();
        Ok(())
    }

    /// The composited frame.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha color of one pixel, for probing composited frames.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.pixmap.pixel(x, y).map(|p| {
            let c = p.demultiply();
            Color::rgba(c.red(), c.green(), c.blue(), c.alpha())
        })
    }

    fn paint(color: Color) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color_rgba8(color.r, color.g, color.b, color.a);
        paint.anti_alias = true;
        paint
    }

    fn stroke(width: f32) -> Stroke {
        Stroke {
            width,
            line_cap: LineCap::Round,
            line_join: LineJoin::Round,
            ..Stroke::default()
        }
    }

    fn build_path(points: &[Point], close: bool) -> Option<tiny_skia::Path> {
        if points.len() < 2 {
            return None;
        }
        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            pb.line_to(p.x, p.y);
        }
        if close {
            pb.close();
        }
        pb.finish()
    }

    fn stroke_points(&mut self, points: &[Point], width: f32, color: Color, close: bool) {
        let path = match Self::build_path(points, close) {
            Some(p) => p,
            None => return,
        };
        self.pixmap.stroke_path(
            &path,
            &Self::paint(color),
            &Self::stroke(width),
            Transform::identity(),
            None,
        );
    }

    fn draw_glyph_run(&mut self, origin: Point, text: &str, color: Color) {
        let paint = Self::paint(color);
        let scale = LABEL_SCALE as f32;
        for (i, ch) in text.chars().enumerate() {
            let glyph = match font::glyph(ch) {
                Some(g) => g,
                None => continue,
            };
            let cell_x = origin.x + (i as u32 * font::CHAR_W * LABEL_SCALE) as f32;
            for row in 0..font::CHAR_H {
                for col in 0..font::GLYPH_COLS {
                    if !font::lit(glyph, row, col) {
                        continue;
                    }
                    let rect = Rect::from_xywh(
                        cell_x + col as f32 * scale,
                        origin.y + row as f32 * scale,
                        scale,
                        scale,
                    );
                    if let Some(rect) = rect {
                        self.pixmap
                            .fill_rect(rect, &paint, Transform::identity(), None);
                    }
                }
            }
        }
    }
}

impl Surface for PixmapSurface {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn clear(&mut self) {
        match &self.background {
            Some(bg) => {
                self.pixmap.draw_pixmap(
                    0,
                    0,
                    bg.as_ref(),
                    &PixmapPaint::default(),
                    Transform::identity(),
                    None,
                );
            }
            None => {
                let c = Color::BACKGROUND;
                self.pixmap
                    .fill(tiny_skia::Color::from_rgba8(c.r, c.g, c.b, c.a));
            }
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        let path = match PathBuilder::from_circle(center.x, center.y, radius) {
            Some(p) => p,
            None => return,
        };
        self.pixmap.fill_path(
            &path,
            &Self::paint(color),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn stroke_polyline(&mut self, points: &[Point], width: f32, color: Color) {
        self.stroke_points(points, width, color, false);
    }

    fn stroke_polygon(&mut self, points: &[Point], width: f32, color: Color) {
        self.stroke_points(points, width, color, true);
    }

    fn draw_label(&mut self, origin: Point, text: &str, color: Color) {
        let shadow = origin + Point::new(LABEL_SHADOW_OFFSET, LABEL_SHADOW_OFFSET) * LABEL_SCALE as f32;
        self.draw_glyph_run(shadow, text, Color::LABEL_SHADOW);
        self.draw_glyph_run(origin, text, color);
    }
}
