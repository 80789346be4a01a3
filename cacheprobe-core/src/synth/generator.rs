use crate::synth::canvas::{draw_text, fill_rect};
use crate::synth::digest::{SQUARE_SIZE, SeedDigest, square_origins};
use crate::synth::error::GenerateError;
use bytes::Bytes;
use chrono::{DateTime, SecondsFormat, Utc};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage};

pub const DEFAULT_WIDTH: u32 = 10_000;
pub const DEFAULT_HEIGHT: u32 = 10_000;

const CHANNELS: usize = 3;
const TEXT_COLOR: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT_X: u32 = 100;
pub(crate) const FONT_SCALE: u32 = 6;

/// Baselines of the seed label, the timestamp and the size label.
pub(crate) const LINE_BASELINES: [u32; 3] = [100, 200, 300];

/// Canvas dimensions for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    pub width: u32,
    pub height: u32,
}

impl Default for ImageSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl ImageSpec {
    /// Rough size label drawn on the image: one megabyte per megapixel.
    pub fn approx_megabytes(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height) / 1_000_000
    }
}

/// Produces large PNG images whose pattern and colours depend only on a seed.
///
/// The only non-deterministic input is `generated_at`, which is drawn as text
/// on the second caption line and nowhere else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageGenerator {
    spec: ImageSpec,
}

impl ImageGenerator {
    pub fn new(spec: ImageSpec) -> Self {
        Self { spec }
    }

    pub fn spec(&self) -> ImageSpec {
        self.spec
    }

    /// Render and encode in one step.
    pub fn generate(&self, seed: u64, generated_at: DateTime<Utc>) -> Result<Bytes, GenerateError> {
        let img = self.render(seed, generated_at)?;
        let png = self.encode(&img)?;
        Ok(Bytes::from(png))
    }

    pub fn render(&self, seed: u64, generated_at: DateTime<Utc>) -> Result<RgbImage, GenerateError> {
        let ImageSpec { width, height } = self.spec;
        let digest = SeedDigest::new(seed);

        let mut img = allocate_canvas(width, height, digest.background())?;

        let foreground = digest.foreground();
        for (x, y) in square_origins(&digest, width, height) {
            fill_rect(&mut img, x, y, SQUARE_SIZE, SQUARE_SIZE, foreground);
        }

        for (line, baseline) in self.captions(seed, generated_at).iter().zip(LINE_BASELINES) {
            draw_text(&mut img, line, TEXT_X, baseline, FONT_SCALE, TEXT_COLOR);
        }

        Ok(img)
    }

    /// Lossless PNG encoding, favouring encode speed over output size.
    pub fn encode(&self, img: &RgbImage) -> Result<Vec<u8>, GenerateError> {
        let mut out = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut out, CompressionType::Fast, FilterType::Adaptive);
        encoder.write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)?;
        Ok(out)
    }

    fn captions(&self, seed: u64, generated_at: DateTime<Utc>) -> [String; 3] {
        [
            format!("Cache Test Image #{seed}"),
            format!(
                "Generated at: {}",
                generated_at.to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            format!("Size: ~{}MB", self.spec.approx_megabytes()),
        ]
    }
}

/// Allocate a canvas filled with `background`, reporting allocation failure
/// instead of aborting the process.
fn allocate_canvas(width: u32, height: u32, background: Rgb<u8>) -> Result<RgbImage, GenerateError> {
    let too_large = || GenerateError::CanvasTooLarge { width, height };

    let pixels = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    let bytes = pixels.checked_mul(CHANNELS).ok_or_else(too_large)?;

    let mut buf: Vec<u8> = Vec::new();
    buf.try_reserve_exact(bytes)
        .map_err(|_| GenerateError::Allocation { bytes })?;

    for _ in 0..pixels {
        buf.extend_from_slice(&background.0);
    }

    RgbImage::from_raw(width, height, buf).ok_or_else(too_large)
}
