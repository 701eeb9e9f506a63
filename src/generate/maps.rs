//! Maps derived from a day-color texture
//!
//! Both maps are approximations for a placeholder renderer: the normal map is
//! a luminance-driven tilt, not a real height-field gradient, and the
//! specular map is a two-level water/land mask.

use crate::constants::{SPECULAR_LAND, SPECULAR_WATER, WATER_BLUE_THRESHOLD};
use crate::raster::{RasterImage, map_pixels};

/// ITU-R 601-2 luma, rounded to the nearest integer
pub fn luminance([r, g, b]: [u8; 3]) -> u8 {
    ((r as u32 * 299 + g as u32 * 587 + b as u32 * 114 + 500) / 1000) as u8
}

/// Normal-map pixel for a luminance value.
/// R = 128 + floor((L-128)/4), G = 128 - floor((L-128)/4), B = 255.
pub fn normal_from_luminance(l: u8) -> [u8; 3] {
    let tilt = (l as i32 - 128).div_euclid(4);
    [(128 + tilt) as u8, (128 - tilt) as u8, 255]
}

/// Water is strictly blue-dominant and brighter than the threshold
pub fn is_water([r, g, b]: [u8; 3]) -> bool {
    b > r && b > g && b > WATER_BLUE_THRESHOLD
}

pub fn normal_map(day: &RasterImage) -> RasterImage {
    map_pixels(day, |px| normal_from_luminance(luminance(px)))
}

pub fn specular_map(day: &RasterImage) -> RasterImage {
    map_pixels(day, |px| {
        let v = if is_water(px) {
            SPECULAR_WATER
        } else {
            SPECULAR_LAND
        };
        [v, v, v]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::canvas;
    use image::Rgb;

    #[test]
    fn test_luminance_matches_reference_weights() {
        assert_eq!(luminance([0, 0, 0]), 0);
        assert_eq!(luminance([255, 255, 255]), 255);
        // 0.114 * 128 = 14.6
        assert_eq!(luminance([0, 0, 128]), 15);
        // 0.299*34 + 0.587*139 + 0.114*34 = 95.63
        assert_eq!(luminance([34, 139, 34]), 96);
    }

    #[test]
    fn test_normal_from_luminance_floors_toward_negative() {
        assert_eq!(normal_from_luminance(128), [128, 128, 255]);
        assert_eq!(normal_from_luminance(255), [159, 97, 255]);
        assert_eq!(normal_from_luminance(0), [96, 160, 255]);
        // (127 - 128) / 4 floors to -1
        assert_eq!(normal_from_luminance(127), [127, 129, 255]);
    }

    #[test]
    fn test_water_classification() {
        assert!(is_water([0, 0, 128]));
        assert!(!is_water([0, 0, 100])); // Not brighter than threshold
        assert!(!is_water([120, 120, 120])); // Not strictly dominant
        assert!(!is_water([34, 139, 34]));
        assert!(!is_water([255, 255, 255]));
    }

    #[test]
    fn test_derived_maps_cover_every_pixel() {
        let mut day = canvas(8, 4, [0, 0, 128]).unwrap();
        for x in 0..4 {
            day.put_pixel(x, 1, Rgb([34, 139, 34]));
        }

        let spec = specular_map(&day);
        let normal = normal_map(&day);
        assert_eq!(spec.dimensions(), (8, 4));
        assert_eq!(normal.dimensions(), (8, 4));

        assert_eq!(spec.get_pixel(0, 0).0, [255, 255, 255]);
        assert_eq!(spec.get_pixel(0, 1).0, [32, 32, 32]);
        assert!(
            spec.pixels()
                .all(|p| p.0 == [255, 255, 255] || p.0 == [32, 32, 32])
        );
        assert!(normal.pixels().all(|p| p[2] == 255));
        assert!(
            normal
                .pixels()
                .all(|p| (96..=160).contains(&p[0]) && (96..=160).contains(&p[1]))
        );
    }
}
