#![allow(dead_code)]

use pixscale_core::raster::Raster;

/// An RGBA raster where each row is a solid color taken from `rows`.
pub fn striped_rgba(rows: &[[u8; 4]], width: u32) -> Raster {
    let mut data = Vec::with_capacity(rows.len() * width as usize * 4);
    for px in rows {
        for _ in 0..width {
            data.extend_from_slice(px);
        }
    }
    Raster::new(width, rows.len() as u32, 4, data).expect("valid striped raster")
}

/// A pixel-art style raster: `logical` is a small RGBA image given row by row,
/// each logical pixel blown up to a `scale x scale` block.
pub fn upscaled_art(logical: &[Vec<[u8; 4]>], scale: u32) -> Raster {
    let lw = logical[0].len() as u32;
    let lh = logical.len() as u32;
    let (w, h) = (lw * scale, lh * scale);
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for y in 0..h {
        for x in 0..w {
            let px = logical[(y / scale) as usize][(x / scale) as usize];
            data.extend_from_slice(&px);
        }
    }
    Raster::new(w, h, 4, data).expect("valid upscaled raster")
}

/// Logical rows alternating between two colors, with a distinct pixel in each
/// row so no two neighbouring rows match.
pub fn checker_logical(rows: usize, cols: usize) -> Vec<Vec<[u8; 4]>> {
    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    if (r + c) % 2 == 0 {
                        [r as u8 * 10, 0, 0, 255]
                    } else {
                        [0, c as u8 * 10, 200, 255]
                    }
                })
                .collect()
        })
        .collect()
}
