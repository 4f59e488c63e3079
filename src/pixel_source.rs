use image::{DynamicImage, GenericImageView, Rgb, RgbImage, RgbaImage};

use crate::geometry::Point;

/// RGB color of one pixel
pub type Pixel = Rgb<u8>;

/// Read-only pixel lookup used by the color sampler
pub trait PixelSource {
    /// (width, height) in pixels
    fn dimensions(&self) -> (u32, u32);

    /// Pixel at integer coordinates, `None` when out of bounds
    fn pixel(&self, x: u32, y: u32) -> Option<Pixel>;

    /// Pixel containing a floating-point position, `None` when it falls
    /// outside the image or is not finite
    fn pixel_at(&self, point: Point) -> Option<Pixel> {
        if !point.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let (width, height) = self.dimensions();
        let (x, y) = (point.x.floor(), point.y.floor());
        if x >= width as f64 || y >= height as f64 {
            return None;
        }
        self.pixel(x as u32, y as u32)
    }
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        self.get_pixel_checked(x, y).copied()
    }
}

impl PixelSource for RgbaImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbaImage::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        self.get_pixel_checked(x, y).map(|p| Rgb([p[0], p[1], p[2]]))
    }
}

impl PixelSource for DynamicImage {
    fn dimensions(&self) -> (u32, u32) {
        GenericImageView::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let p = self.get_pixel(x, y);
        Some(Rgb([p[0], p[1], p[2]]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient() -> RgbImage {
        RgbImage::from_fn(4, 3, |x, y| Rgb([x as u8 * 10, y as u8 * 10, 7]))
    }

    #[test]
    fn test_integer_lookup() {
        let img = gradient();
        assert_eq!(PixelSource::dimensions(&img), (4, 3));
        assert_eq!(img.pixel(3, 2), Some(Rgb([30, 20, 7])));
        assert_eq!(img.pixel(4, 0), None);
        assert_eq!(img.pixel(0, 3), None);
    }

    #[test]
    fn test_float_lookup_floors_and_rejects() {
        let img = gradient();
        assert_eq!(img.pixel_at(Point::new(2.9, 1.1)), Some(Rgb([20, 10, 7])));
        assert_eq!(img.pixel_at(Point::new(3.999, 2.999)), Some(Rgb([30, 20, 7])));
        assert_eq!(img.pixel_at(Point::new(4.0, 0.0)), None);
        assert_eq!(img.pixel_at(Point::new(-0.01, 0.0)), None);
        assert_eq!(img.pixel_at(Point::new(0.0, 3.0)), None);
        assert_eq!(img.pixel_at(Point::new(f64::NAN, 1.0)), None);
        assert_eq!(img.pixel_at(Point::new(1e300, 1.0)), None);
    }

    #[test]
    fn test_rgba_and_dynamic_drop_alpha() {
        let rgba = RgbaImage::from_pixel(2, 2, Rgba([1, 2, 3, 4]));
        assert_eq!(rgba.pixel(1, 1), Some(Rgb([1, 2, 3])));
        assert_eq!(rgba.pixel(2, 1), None);

        let dynamic = DynamicImage::ImageRgba8(rgba);
        assert_eq!(PixelSource::dimensions(&dynamic), (2, 2));
        assert_eq!(dynamic.pixel(0, 1), Some(Rgb([1, 2, 3])));
        assert_eq!(dynamic.pixel(0, 2), None);
    }
}
