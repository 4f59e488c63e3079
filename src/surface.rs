/// Drawing surfaces the renderer paints on
///
/// `RasterSurface` rasterises onto an RGBA image with `imageproc`, blending
/// translucent fills over what is already there. `RecordingSurface` keeps
/// the draw calls instead, for inspection.

use ab_glyph::FontArc;
use image::{Rgb, Rgba, RgbaImage};
use imageproc::drawing::{Blend, draw_line_segment_mut, draw_polygon_mut, draw_text_mut, text_size};
use imageproc::point::Point as PixelPoint;
use log::{debug, warn};

use crate::geometry::Point;

/// Outline style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    pub color: Rgb<u8>,
    pub width: u32,
}

impl Stroke {
    pub fn new(color: Rgb<u8>, width: u32) -> Self {
        Self { color, width }
    }

    /// Zero-width strokes draw nothing
    pub fn visible(self) -> Option<Self> {
        (self.width > 0).then_some(self)
    }
}

pub trait Surface {
    /// Closed polygon; the last point joins back to the first.
    fn polygon(&mut self, points: &[Point], stroke: Option<Stroke>, fill: Option<Rgba<u8>>);

    fn line(&mut self, start: Point, end: Point, stroke: Stroke);

    /// Text centered on `position`
    fn text(&mut self, position: Point, text: &str, size: f32, color: Rgb<u8>);

    /// Called once after the last draw call of a pass
    fn flush(&mut self);
}

fn opaque(color: Rgb<u8>) -> Rgba<u8> {
    Rgba([color[0], color[1], color[2], u8::MAX])
}

fn to_pixel_points(points: &[Point]) -> Vec<PixelPoint<i32>> {
    let mut pixels: Vec<PixelPoint<i32>> = points
        .iter()
        .map(|p| PixelPoint::new(p.x.round() as i32, p.y.round() as i32))
        .collect();
    pixels.dedup();
    // imageproc closes polygons itself and rejects an explicit closing point
    while pixels.len() > 1 && pixels.first() == pixels.last() {
        pixels.pop();
    }
    pixels
}

pub struct RasterSurface {
    canvas: Blend<RgbaImage>,
    font: Option<FontArc>,
    flushed: bool,
    warned_no_font: bool,
}

impl RasterSurface {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            canvas: Blend(image),
            font: None,
            flushed: false,
            warned_no_font: false,
        }
    }

    pub fn with_font(mut self, font: Option<FontArc>) -> Self {
        self.font = font;
        self
    }

    pub fn is_flushed(&self) -> bool {
        self.flushed
    }

    pub fn image(&self) -> &RgbaImage {
        &self.canvas.0
    }

    pub fn into_image(self) -> RgbaImage {
        self.canvas.0
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba<u8>) {
        let pixels = to_pixel_points(points);
        if pixels.len() < 3 {
            return;
        }
        draw_polygon_mut(&mut self.canvas, &pixels, color);
    }

    /// Thick segments are filled as quads around the centre line
    fn stroke_segment(&mut self, start: Point, end: Point, stroke: Stroke) {
        let color = opaque(stroke.color);
        let direction = (end - start).normalize_or_zero();
        if stroke.width <= 1 || direction == Point::ZERO {
            draw_line_segment_mut(
                &mut self.canvas,
                (start.x as f32, start.y as f32),
                (end.x as f32, end.y as f32),
                color,
            );
            return;
        }

        let normal = direction.perp() * (stroke.width as f64 / 2.0);
        let quad = [start + normal, end + normal, end - normal, start - normal];
        let pixels = to_pixel_points(&quad);
        if pixels.len() < 3 {
            draw_line_segment_mut(
                &mut self.canvas,
                (start.x as f32, start.y as f32),
                (end.x as f32, end.y as f32),
                color,
            );
            return;
        }
        draw_polygon_mut(&mut self.canvas, &pixels, color);
    }
}

impl Surface for RasterSurface {
    fn polygon(&mut self, points: &[Point], stroke: Option<Stroke>, fill: Option<Rgba<u8>>) {
        if let Some(color) = fill {
            self.fill_polygon(points, color);
        }
        if let Some(stroke) = stroke {
            for (i, &start) in points.iter().enumerate() {
                let end = points[(i + 1) % points.len()];
                self.stroke_segment(start, end, stroke);
            }
        }
    }

    fn line(&mut self, start: Point, end: Point, stroke: Stroke) {
        self.stroke_segment(start, end, stroke);
    }

    fn text(&mut self, position: Point, text: &str, size: f32, color: Rgb<u8>) {
        let Some(font) = self.font.as_ref() else {
            if !self.warned_no_font {
                warn!("no font loaded, skipping hexagon labels");
                self.warned_no_font = true;
            }
            return;
        };
        let (w, h) = text_size(size, font, text);
        let x = position.x.round() as i32 - (w / 2) as i32;
        let y = position.y.round() as i32 - (h / 2) as i32;
        draw_text_mut(&mut self.canvas, opaque(color), x, y, size, font, text);
    }

    fn flush(&mut self) {
        let (width, height) = self.canvas.0.dimensions();
        debug!("raster surface flushed ({}x{})", width, height);
        self.flushed = true;
    }
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Polygon {
        points: Vec<Point>,
        stroke: Option<Stroke>,
        fill: Option<Rgba<u8>>,
    },
    Line {
        start: Point,
        end: Point,
        stroke: Stroke,
    },
    Text {
        position: Point,
        text: String,
        size: f32,
        color: Rgb<u8>,
    },
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    pub flush_count: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { start, end, .. } => Some((*start, *end)),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &DrawCommand> + '_ {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polygon { .. }))
    }

    pub fn labels(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn polygon(&mut self, points: &[Point], stroke: Option<Stroke>, fill: Option<Rgba<u8>>) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            stroke,
            fill,
        });
    }

    fn line(&mut self, start: Point, end: Point, stroke: Stroke) {
        self.commands.push(DrawCommand::Line { start, end, stroke });
    }

    fn text(&mut self, position: Point, text: &str, size: f32, color: Rgb<u8>) {
        self.commands.push(DrawCommand::Text {
            position,
            text: text.to_string(),
            size,
            color,
        });
    }

    fn flush(&mut self) {
        self.flush_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn white(width: u32, height: u32) -> RgbaImage {
        RgbaImage::from_pixel(width, height, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn test_zero_width_stroke_is_invisible() {
        assert_eq!(Stroke::new(Rgb([0, 0, 0]), 0).visible(), None);
        assert!(Stroke::new(Rgb([0, 0, 0]), 2).visible().is_some());
    }

    #[test]
    fn test_pixel_points_drop_closing_duplicate() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.2, 0.1),
            Point::new(10.0, 10.0),
            Point::new(0.1, 0.2),
        ];
        let pixels = to_pixel_points(&points);
        assert_eq!(
            pixels,
            vec![PixelPoint::new(0, 0), PixelPoint::new(10, 0), PixelPoint::new(10, 10)]
        );
    }

    #[test]
    fn test_opaque_fill_replaces_pixels() {
        let mut surface = RasterSurface::new(white(20, 20));
        let square = [
            Point::new(2.0, 2.0),
            Point::new(17.0, 2.0),
            Point::new(17.0, 17.0),
            Point::new(2.0, 17.0),
        ];
        surface.polygon(&square, None, Some(Rgba([10, 20, 30, 255])));
        assert_eq!(*surface.image().get_pixel(10, 10), Rgba([10, 20, 30, 255]));
        assert_eq!(*surface.image().get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_translucent_fill_blends() {
        let mut surface = RasterSurface::new(white(20, 20));
        let square = [
            Point::new(2.0, 2.0),
            Point::new(17.0, 2.0),
            Point::new(17.0, 17.0),
            Point::new(2.0, 17.0),
        ];
        surface.polygon(&square, None, Some(Rgba([0, 0, 0, 128])));
        let blended = surface.image().get_pixel(10, 10);
        assert!(blended[0] > 0 && blended[0] < 255);
        assert_eq!(blended[3], 255);
    }

    #[test]
    fn test_thick_line_covers_its_width() {
        let mut surface = RasterSurface::new(white(30, 30));
        surface.line(Point::new(5.0, 15.0), Point::new(25.0, 15.0), Stroke::new(Rgb([0, 0, 0]), 4));
        for y in 14..=16 {
            assert_eq!(*surface.image().get_pixel(15, y), Rgba([0, 0, 0, 255]));
        }
        assert_eq!(*surface.image().get_pixel(15, 5), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_off_canvas_drawing_is_clipped() {
        let mut surface = RasterSurface::new(white(10, 10));
        let far = [Point::new(-50.0, -50.0), Point::new(-40.0, -50.0), Point::new(-45.0, -40.0)];
        surface.polygon(&far, Some(Stroke::new(Rgb([0, 0, 0]), 3)), Some(Rgba([0, 0, 0, 255])));
        surface.line(Point::new(-5.0, 5.0), Point::new(50.0, 5.0), Stroke::new(Rgb([0, 0, 0]), 1));
        assert_eq!(*surface.image().get_pixel(5, 5), Rgba([0, 0, 0, 255]));
        assert_eq!(*surface.image().get_pixel(5, 0), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_text_without_font_is_skipped() {
        let mut surface = RasterSurface::new(white(10, 10));
        surface.text(Point::new(5.0, 5.0), "1", 12.0, Rgb([0, 0, 0]));
        surface.flush();
        assert!(surface.is_flushed());
        assert!(surface.image().pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }

    #[test]
    fn test_recording_surface_keeps_order() {
        let mut surface = RecordingSurface::new();
        let stroke = Stroke::new(Rgb([1, 2, 3]), 1);
        surface.polygon(&[Point::ZERO, Point::X, Point::Y], Some(stroke), None);
        surface.line(Point::ZERO, Point::X, stroke);
        surface.text(Point::ONE, "7", 10.0, Rgb([0, 0, 0]));
        surface.flush();

        assert_eq!(surface.commands.len(), 3);
        assert_eq!(surface.polygons().count(), 1);
        assert_eq!(surface.lines().collect::<Vec<_>>(), vec![(Point::ZERO, Point::X)]);
        assert_eq!(surface.labels(), vec!["7"]);
        assert!(matches!(
            surface.commands[2],
            DrawCommand::Text { color: Rgb([0, 0, 0]), .. }
        ));
        assert_eq!(surface.flush_count, 1);
    }
}
