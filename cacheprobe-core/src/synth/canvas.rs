use crate::synth::font::{self, ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use image::{Rgb, RgbImage};

/// Fill an axis-aligned rectangle, clipped to the image bounds.
pub(crate) fn fill_rect(img: &mut RgbImage, x: u32, y: u32, w: u32, h: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(w).min(img.width());
    let y_end = y.saturating_add(h).min(img.height());

    for py in y..y_end {
        for px in x..x_end {
            img.put_pixel(px, py, color);
        }
    }
}

/// Draw `text` with its left edge at `x` and its baseline at `baseline`.
///
/// Glyphs are scaled by `scale` and sit entirely above the baseline.
/// Pixels falling outside the image are dropped.
pub(crate) fn draw_text(
    img: &mut RgbImage,
    text: &str,
    x: u32,
    baseline: u32,
    scale: u32,
    color: Rgb<u8>,
) {
    let glyph_top = i64::from(baseline) - i64::from(GLYPH_HEIGHT * scale);
    let mut origin_x = i64::from(x);

    for c in text.chars() {
        let glyph = font::glyph(c);

        for row in 0..GLYPH_HEIGHT {
            for col in 0..GLYPH_WIDTH {
                if !font::is_set(&glyph, col, row) {
                    continue;
                }

                let px = origin_x + i64::from(col * scale);
                let py = glyph_top + i64::from(row * scale);
                if px < 0 || py < 0 {
                    continue;
                }

                fill_rect(img, px as u32, py as u32, scale, scale, color);
            }
        }

        origin_x += i64::from(ADVANCE * scale);
        if origin_x >= i64::from(img.width()) {
            break;
        }
    }
}
