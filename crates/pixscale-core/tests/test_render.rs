mod common;

use std::collections::HashSet;

use pixscale_core::error::PixscaleError;
use pixscale_core::raster::Raster;
use pixscale_core::render::{
    output_dimensions, render_preview, upscale, PreviewConfig, SamplingFilter,
};

use common::{checker_logical, upscaled_art};

fn pixel_set(raster: &Raster) -> HashSet<Vec<u8>> {
    let mut set = HashSet::new();
    for y in 0..raster.height() as usize {
        for x in 0..raster.width() as usize {
            set.insert(raster.pixel(x, y).to_vec());
        }
    }
    set
}

// ---------------------------------------------------------------------------
// Nearest-neighbor output
// ---------------------------------------------------------------------------

#[test]
fn test_output_dimensions_follow_scale_and_multiplier() {
    let raster = upscaled_art(&checker_logical(3, 5), 2);
    for scale in 1..=3 {
        let out = upscale(&raster, scale, 8, SamplingFilter::Nearest).unwrap();
        assert_eq!(out.width(), raster.width() * scale * 8);
        assert_eq!(out.height(), raster.height() * scale * 8);
    }
}

#[test]
fn test_nearest_never_blends() {
    let raster = upscaled_art(&checker_logical(4, 4), 1);
    let out = upscale(&raster, 3, 2, SamplingFilter::Nearest).unwrap();
    let source = pixel_set(&raster);
    for px in pixel_set(&out) {
        assert!(source.contains(&px), "blended pixel {px:?}");
    }
}

#[test]
fn test_nearest_maps_each_block_to_its_source_pixel() {
    let raster = upscaled_art(&checker_logical(3, 3), 1);
    let k = 4usize;
    let out = upscale(&raster, 2, 2, SamplingFilter::Nearest).unwrap();
    for y in 0..out.height() as usize {
        for x in 0..out.width() as usize {
            assert_eq!(out.pixel(x, y), raster.pixel(x / k, y / k));
        }
    }
}

#[test]
fn test_nearest_large_output_uses_same_mapping() {
    // Large enough to take the parallel path.
    let raster = upscaled_art(&checker_logical(8, 8), 1);
    let out = upscale(&raster, 4, 8, SamplingFilter::Nearest).unwrap();
    assert_eq!((out.width(), out.height()), (256, 256));
    assert_eq!(out.pixel(255, 255), raster.pixel(7, 7));
    assert_eq!(out.pixel(32, 0), raster.pixel(1, 0));
    assert_eq!(out.pixel(31, 31), raster.pixel(0, 0));
}

#[test]
fn test_nearest_keeps_channel_count() {
    let raster = Raster::new(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    let out = upscale(&raster, 1, 3, SamplingFilter::Nearest).unwrap();
    assert_eq!(out.channels(), 3);
    assert_eq!(out.pixel(5, 2).to_vec(), vec![4, 5, 6]);
}

#[test]
fn test_smooth_has_same_dimensions() {
    let raster = upscaled_art(&checker_logical(3, 3), 1);
    let out = upscale(&raster, 2, 2, SamplingFilter::Smooth).unwrap();
    assert_eq!((out.width(), out.height()), (12, 12));
}

#[test]
fn test_zero_multiplier_rejected() {
    let raster = Raster::filled(2, 2, &[0]).unwrap();
    let err = upscale(&raster, 2, 0, SamplingFilter::Nearest).unwrap_err();
    assert!(matches!(err, PixscaleError::InvalidScale(_)));
}

#[test]
fn test_output_dimensions_overflow() {
    let err = output_dimensions(70_000, 70_000, 10_000, 8).unwrap_err();
    assert!(matches!(err, PixscaleError::OutputTooLarge { .. }));
}

#[test]
fn test_huge_output_rejected_before_allocation() {
    // Each side fits in u32 but the pixel buffer cannot be allocated.
    let raster = Raster::filled(1, 1, &[1, 2, 3, 255]).unwrap();
    for filter in [SamplingFilter::Smooth, SamplingFilter::Nearest] {
        let err = upscale(&raster, 1, 2_147_483_647, filter).unwrap_err();
        assert!(
            matches!(err, PixscaleError::OutputTooLarge { .. }),
            "{filter}: {err}"
        );
    }
}

// ---------------------------------------------------------------------------
// Preview
// ---------------------------------------------------------------------------

#[test]
fn test_preview_marks_change_points_at_zoom() {
    let raster = Raster::filled(8, 6, &[0, 0, 0, 255]).unwrap();
    let config = PreviewConfig {
        zoom: 2,
        filter: SamplingFilter::Nearest,
        marker_width: 1,
        marker_height: 1,
        marker_color: [0, 255, 0, 255],
    };
    let out = render_preview(&raster, &[3], &config).unwrap();

    assert_eq!((out.width(), out.height()), (16, 12));
    for y in 6..8 {
        for x in 0..2 {
            assert_eq!(out.pixel(x, y).to_vec(), vec![0, 255, 0, 255]);
        }
        assert_eq!(out.pixel(2, y).to_vec(), vec![0, 0, 0, 255]);
    }
    assert_eq!(out.pixel(0, 5).to_vec(), vec![0, 0, 0, 255]);
    assert_eq!(out.pixel(0, 8).to_vec(), vec![0, 0, 0, 255]);
}

#[test]
fn test_preview_without_change_points_is_plain_copy() {
    let raster = upscaled_art(&checker_logical(2, 2), 2);
    let out = render_preview(&raster, &[], &PreviewConfig::default()).unwrap();
    assert_eq!(out, raster);
}

#[test]
fn test_preview_zero_zoom_rejected() {
    let raster = Raster::filled(2, 2, &[0]).unwrap();
    let config = PreviewConfig {
        zoom: 0,
        ..Default::default()
    };
    assert!(render_preview(&raster, &[1], &config).is_err());
}
