//! Raster helpers shared by the generators
//!
//! Thin wrappers over `image`/`imageproc` that pin down the drawing semantics
//! the generators rely on: bounding-box ellipses, polygons that tolerate
//! degenerate point lists, thick line segments, alpha-over rectangles and a
//! single per-pixel transform pass for derived maps.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_polygon_mut};
use imageproc::point::Point;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{Result, TextureError};

/// RGB raster owned by whichever generator created it
pub type RasterImage = RgbImage;

/// Create a canvas filled with a single color.
/// Fails with `InvalidSize` if either side is zero.
pub fn canvas(width: u32, height: u32, fill: [u8; 3]) -> Result<RasterImage> {
    if width == 0 || height == 0 {
        return Err(TextureError::InvalidSize { width, height });
    }
    Ok(RasterImage::from_pixel(width, height, Rgb(fill)))
}

/// Fill a closed polygon. Consecutive duplicate points and a closing point
/// equal to the first are dropped; a single remaining point is plotted and
/// an empty polygon draws nothing.
pub fn fill_polygon(img: &mut RasterImage, points: &[(i32, i32)], color: [u8; 3]) {
    let mut poly: Vec<Point<i32>> = Vec::with_capacity(points.len());
    for &(x, y) in points {
        let p = Point::new(x, y);
        if poly.last() != Some(&p) {
            poly.push(p);
        }
    }
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    match poly.as_slice() {
        [] => {}
        [p] => {
            if let (Ok(x), Ok(y)) = (u32::try_from(p.x), u32::try_from(p.y))
                && x < img.width()
                && y < img.height()
            {
                img.put_pixel(x, y, Rgb(color));
            }
        }
        _ => draw_polygon_mut(img, &poly, Rgb(color)),
    }
}

/// Fill the ellipse inscribed in the box `[x0, y0, x1, y1]`.
/// Parts outside the canvas are clipped.
pub fn fill_ellipse_in_box(img: &mut RasterImage, bbox: [i32; 4], color: [u8; 3]) {
    let [x0, y0, x1, y1] = bbox;
    let center = ((x0 + x1) / 2, (y0 + y1) / 2);
    let rx = (x1 - x0).abs() / 2;
    let ry = (y1 - y0).abs() / 2;
    draw_filled_ellipse_mut(img, center, rx, ry, Rgb(color));
}

/// Draw a line segment `width` pixels wide as a filled quad.
pub fn draw_thick_line(
    img: &mut RasterImage,
    start: (f32, f32),
    end: (f32, f32),
    width: f32,
    color: [u8; 3],
) {
    let dx = end.0 - start.0;
    let dy = end.1 - start.1;
    let len = (dx * dx + dy * dy).sqrt();
    if len < f32::EPSILON {
        return;
    }

    // Half-width offset perpendicular to the segment
    let nx = -dy / len * width / 2.0;
    let ny = dx / len * width / 2.0;

    let corner = |x: f32, y: f32| (x.round() as i32, y.round() as i32);
    let quad = [
        corner(start.0 + nx, start.1 + ny),
        corner(end.0 + nx, end.1 + ny),
        corner(end.0 - nx, end.1 - ny),
        corner(start.0 - nx, start.1 - ny),
    ];
    fill_polygon(img, &quad, color);
}

/// Overwrite whole rows with a solid color. Rows past the bottom are ignored.
pub fn fill_rows(img: &mut RasterImage, rows: Range<u32>, color: [u8; 3]) {
    let height = img.height();
    for y in rows.start.min(height)..rows.end.min(height) {
        for x in 0..img.width() {
            img.put_pixel(x, y, Rgb(color));
        }
    }
}

/// Alpha-over one channel of an opaque background: `(fg*a + bg*(255-a)) / 255`, rounded.
pub fn alpha_over(fg: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8
}

/// Composite a solid, semi-transparent rectangle onto the image.
/// The rectangle is clipped at the right and bottom edges.
pub fn blend_rect(
    img: &mut RasterImage,
    origin: (u32, u32),
    size: (u32, u32),
    color: [u8; 3],
    alpha: u8,
) {
    let x_end = origin.0.saturating_add(size.0).min(img.width());
    let y_end = origin.1.saturating_add(size.1).min(img.height());

    for y in origin.1..y_end {
        for x in origin.0..x_end {
            let dst = img.get_pixel_mut(x, y);
            for c in 0..3 {
                dst[c] = alpha_over(color[c], dst[c], alpha);
            }
        }
    }
}

/// Build a new image by applying `f` to every pixel of `src`.
///
/// Runs as one pass over the raw buffer; each output pixel depends only on
/// the matching source pixel, so chunks are processed in parallel.
pub fn map_pixels<F>(src: &RasterImage, f: F) -> RasterImage
where
    F: Fn([u8; 3]) -> [u8; 3] + Sync,
{
    let mut out = RasterImage::new(src.width(), src.height());
    let dst: &mut [u8] = &mut out;
    dst.par_chunks_exact_mut(3)
        .zip(src.as_raw().par_chunks_exact(3))
        .for_each(|(to, from)| {
            to.copy_from_slice(&f([from[0], from[1], from[2]]));
        });
    out
}

/// Encode the image as a baseline JPEG at the given quality (1-100).
pub fn save_jpeg(img: &RasterImage, path: &Path, quality: u8) -> Result<()> {
    if !(1..=100).contains(&quality) {
        return Err(TextureError::InvalidQuality(quality));
    }

    let file = File::create(path).map_err(|e| TextureError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    let encoder = JpegEncoder::new_with_quality(&mut writer, quality);
    img.write_with_encoder(encoder)
        .map_err(|e| TextureError::encode(path, e))?;
    writer.flush().map_err(|e| TextureError::io(path, e))?;

    debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        quality,
        "saved jpeg"
    );
    Ok(())
}

/// Read only the header of an image file and return its dimensions.
pub fn image_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path).map_err(|e| TextureError::encode(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_matches_requested_size() {
        for (w, h) in [(1, 1), (7, 3), (1024, 512)] {
            let img = canvas(w, h, [1, 2, 3]).unwrap();
            assert_eq!(img.dimensions(), (w, h));
            assert!(img.pixels().all(|p| p.0 == [1, 2, 3]));
        }
    }

    #[test]
    fn test_canvas_rejects_zero_size() {
        assert!(matches!(
            canvas(0, 10, [0, 0, 0]),
            Err(TextureError::InvalidSize { width: 0, height: 10 })
        ));
        assert!(canvas(10, 0, [0, 0, 0]).is_err());
    }

    #[test]
    fn test_alpha_over_extremes() {
        assert_eq!(alpha_over(255, 0, 255), 255);
        assert_eq!(alpha_over(255, 0, 0), 0);
        assert_eq!(alpha_over(255, 255, 77), 255);
        assert_eq!(alpha_over(0, 0, 200), 0);
        // Halfway-ish blend rounds to nearest
        assert_eq!(alpha_over(255, 0, 128), 128);
    }

    #[test]
    fn test_blend_rect_clips_at_edges() {
        let mut img = canvas(10, 10, [0, 0, 0]).unwrap();
        blend_rect(&mut img, (8, 8), (80, 40), [255, 255, 255], 255);
        assert_eq!(img.get_pixel(9, 9).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(8, 8).0, [255, 255, 255]);
        assert_eq!(img.get_pixel(7, 9).0, [0, 0, 0]);
    }

    #[test]
    fn test_fill_rows_covers_full_width() {
        let mut img = canvas(5, 6, [0, 0, 128]).unwrap();
        fill_rows(&mut img, 0..2, [255, 255, 255]);
        fill_rows(&mut img, 5..9, [255, 255, 255]);
        for x in 0..5 {
            assert_eq!(img.get_pixel(x, 0).0, [255, 255, 255]);
            assert_eq!(img.get_pixel(x, 1).0, [255, 255, 255]);
            assert_eq!(img.get_pixel(x, 2).0, [0, 0, 128]);
            assert_eq!(img.get_pixel(x, 5).0, [255, 255, 255]);
        }
    }

    #[test]
    fn test_fill_polygon_tolerates_degenerate_points() {
        let mut img = canvas(4, 4, [0, 0, 0]).unwrap();
        // All points equal, closing point equal to first
        fill_polygon(&mut img, &[(1, 1), (1, 1), (1, 1)], [9, 9, 9]);
        fill_polygon(&mut img, &[], [9, 9, 9]);
        fill_polygon(&mut img, &[(0, 0), (3, 0), (3, 3), (0, 0)], [9, 9, 9]);
        assert_eq!(img.get_pixel(3, 1).0, [9, 9, 9]);
    }

    #[test]
    fn test_fill_ellipse_in_box_hits_center_and_clips() {
        let mut img = canvas(20, 20, [0, 0, 0]).unwrap();
        fill_ellipse_in_box(&mut img, [10, 10, 40, 30], [5, 6, 7]);
        assert_eq!(img.get_pixel(19, 19).0, [5, 6, 7]);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_thick_line_covers_its_width() {
        let mut img = canvas(20, 20, [0, 0, 0]).unwrap();
        draw_thick_line(&mut img, (2.0, 10.0), (17.0, 10.0), 3.0, [200, 0, 0]);
        for y in 9..=11 {
            assert_eq!(img.get_pixel(10, y).0, [200, 0, 0]);
        }
        assert_eq!(img.get_pixel(10, 5).0, [0, 0, 0]);
    }

    #[test]
    fn test_map_pixels_matches_sequential_transform() {
        let mut img = canvas(13, 7, [0, 0, 0]).unwrap();
        for (x, y, p) in img.enumerate_pixels_mut() {
            *p = Rgb([x as u8 * 10, y as u8 * 20, (x + y) as u8]);
        }
        let mapped = map_pixels(&img, |[r, g, b]| [b, r, g]);
        assert_eq!(mapped.dimensions(), img.dimensions());
        for (x, y, p) in img.enumerate_pixels() {
            assert_eq!(mapped.get_pixel(x, y).0, [p[2], p[0], p[1]]);
        }
    }

    #[test]
    fn test_jpeg_round_trip_preserves_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("round_trip.jpg");
        let img = canvas(37, 19, [10, 200, 30]).unwrap();
        save_jpeg(&img, &path, 90).unwrap();
        assert_eq!(image_dimensions(&path).unwrap(), (37, 19));
        let reloaded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(reloaded.dimensions(), (37, 19));
    }

    #[test]
    fn test_save_jpeg_rejects_bad_quality_and_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let img = canvas(4, 4, [0, 0, 0]).unwrap();
        assert!(matches!(
            save_jpeg(&img, &dir.path().join("q.jpg"), 0),
            Err(TextureError::InvalidQuality(0))
        ));
        assert!(matches!(
            save_jpeg(&img, &dir.path().join("missing/q.jpg"), 85),
            Err(TextureError::Io { .. })
        ));
    }
}
