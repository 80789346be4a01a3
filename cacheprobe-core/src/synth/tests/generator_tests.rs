use crate::synth::generator::{FONT_SCALE, LINE_BASELINES};
use crate::synth::font::GLYPH_HEIGHT;
use crate::synth::{ImageGenerator, ImageSpec, SeedDigest};
use chrono::{DateTime, TimeZone, Utc};
use image::Rgb;
use pretty_assertions::assert_eq;

fn small_generator() -> ImageGenerator {
    ImageGenerator::new(ImageSpec {
        width: 400,
        height: 400,
    })
}

fn at(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, h, m, s).unwrap()
}

#[test]
fn default_spec_is_ten_thousand_square() {
    let spec = ImageSpec::default();

    assert_eq!((spec.width, spec.height), (10_000, 10_000));
    assert_eq!(spec.approx_megabytes(), 100);
}

#[test]
fn render_is_deterministic_for_same_seed_and_time() {
    // Arrange
    let generator = small_generator();
    let now = at(2026, 1, 1, 0, 0, 0);

    // Act
    let first = generator.render(7, now).unwrap();
    let second = generator.render(7, now).unwrap();

    // Assert
    assert_eq!(first.as_raw(), second.as_raw());
}

#[test]
fn timestamp_only_affects_its_own_caption_line() {
    // Arrange
    // Wide enough for the whole timestamp to land on the canvas.
    let generator = ImageGenerator::new(ImageSpec {
        width: 2_000,
        height: 400,
    });
    let band_end = LINE_BASELINES[1];
    let band_start = band_end - GLYPH_HEIGHT * FONT_SCALE;

    // Act
    let early = generator.render(7, at(2026, 1, 1, 0, 0, 0)).unwrap();
    let late = generator.render(7, at(2027, 12, 31, 23, 59, 59)).unwrap();

    // Assert
    let mut differs_in_band = false;
    for (x, y, pixel) in early.enumerate_pixels() {
        let other = late.get_pixel(x, y);
        if (band_start..band_end).contains(&y) {
            differs_in_band |= pixel != other;
        } else {
            assert_eq!(pixel, other, "pixel ({x}, {y}) changed outside timestamp line");
        }
    }
    assert!(differs_in_band, "timestamp text was not drawn");
}

#[test]
fn pixels_are_background_foreground_or_text() {
    // Arrange
    let generator = small_generator();
    let digest = SeedDigest::new(3);
    let allowed = [digest.background(), digest.foreground(), Rgb([255, 255, 255])];

    // Act
    let img = generator.render(3, at(2026, 6, 1, 12, 0, 0)).unwrap();

    // Assert
    assert_eq!(img.dimensions(), (400, 400));
    assert!(img.pixels().all(|p| allowed.contains(p)));
    assert!(img.pixels().any(|p| *p == digest.background()));
    assert!(img.pixels().any(|p| *p == digest.foreground()));
}

#[test]
fn different_seeds_render_differently() {
    let generator = small_generator();
    let now = at(2026, 1, 1, 0, 0, 0);

    let one = generator.render(1, now).unwrap();
    let two = generator.render(2, now).unwrap();

    assert_ne!(one.as_raw(), two.as_raw());
}

#[test]
fn generate_produces_decodable_png_of_spec_size() {
    // Arrange
    let generator = ImageGenerator::new(ImageSpec {
        width: 120,
        height: 80,
    });

    // Act
    let png = generator.generate(11, at(2026, 3, 3, 3, 3, 3)).unwrap();

    // Assert
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    let decoded = image::load_from_memory(&png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (120, 80));
}

#[test]
fn oversized_canvas_is_reported_not_truncated() {
    let generator = ImageGenerator::new(ImageSpec {
        width: u32::MAX,
        height: u32::MAX,
    });

    let result = generator.render(1, at(2026, 1, 1, 0, 0, 0));

    assert!(result.is_err());
}
