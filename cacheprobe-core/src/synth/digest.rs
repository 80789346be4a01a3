use image::Rgb;

/// Number of squares stamped onto every canvas.
pub const SQUARE_COUNT: usize = 1000;

/// Side length of a pattern square in pixels.
pub const SQUARE_SIZE: u32 = 100;

/// MD5 digest of a seed's decimal representation.
///
/// All pseudo-randomness in a generated image is read from this digest, so two
/// renders of the same seed always agree on colours and square placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedDigest {
    bytes: [u8; 16],
}

impl SeedDigest {
    pub fn new(seed: u64) -> Self {
        let digest = md5::compute(seed.to_string());
        Self { bytes: digest.0 }
    }

    /// Lowercase hex rendering, 32 characters long.
    pub fn hex(&self) -> String {
        self.bytes.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// The first three hex byte-pairs read as an RGB triple.
    pub fn background(&self) -> Rgb<u8> {
        Rgb([self.bytes[0], self.bytes[1], self.bytes[2]])
    }

    /// Per-channel complement of the background.
    pub fn foreground(&self) -> Rgb<u8> {
        let Rgb([r, g, b]) = self.background();
        Rgb([255 - r, 255 - g, 255 - b])
    }

    /// Hex digit at `index`, wrapping around the 32 digits of the digest.
    pub fn nibble(&self, index: usize) -> u32 {
        let index = index % (self.bytes.len() * 2);
        let byte = self.bytes[index / 2];
        let nibble = if index % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        u32::from(nibble)
    }
}

/// Top-left corners of the pattern squares for a canvas of the given size.
///
/// Square `i` takes its x digit from position `i` and its y digit from `i + 1`.
/// Digits are scaled by a tenth of the canvas side and reduced modulo the side,
/// which for a 10000px canvas is `digit * 1000 % 10000`.
pub fn square_origins(digest: &SeedDigest, width: u32, height: u32) -> Vec<(u32, u32)> {
    let step_x = u64::from(width / 10);
    let step_y = u64::from(height / 10);

    (0..SQUARE_COUNT)
        .map(|i| {
            let x = (u64::from(digest.nibble(i)) * step_x) % u64::from(width.max(1));
            let y = (u64::from(digest.nibble(i + 1)) * step_y) % u64::from(height.max(1));
            (x as u32, y as u32)
        })
        .collect()
}
