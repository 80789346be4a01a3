use crate::synth::digest::SQUARE_COUNT;
use crate::synth::{SeedDigest, square_origins};
use image::Rgb;
use pretty_assertions::assert_eq;

#[test]
fn digest_is_md5_of_decimal_seed() {
    // Arrange
    let digest = SeedDigest::new(1);

    // Act
    let hex = digest.hex();

    // Assert
    assert_eq!(hex, "c4ca4238a0b923820dcc509a6f75849b");
}

#[test]
fn background_comes_from_first_three_byte_pairs() {
    let digest = SeedDigest::new(1);

    assert_eq!(digest.background(), Rgb([0xc4, 0xca, 0x42]));
}

#[test]
fn foreground_is_channel_complement() {
    let digest = SeedDigest::new(1);

    assert_eq!(digest.foreground(), Rgb([59, 53, 189]));
}

#[test]
fn different_seeds_yield_different_backgrounds() {
    let one = SeedDigest::new(1);
    let two = SeedDigest::new(2);

    assert_eq!(two.hex(), "c81e728d9d4c2f636f067f89cc14862c");
    assert_ne!(one.background(), two.background());
}

#[test]
fn nibble_wraps_around_digest_length() {
    let digest = SeedDigest::new(1);

    assert_eq!(digest.nibble(0), 0xc);
    assert_eq!(digest.nibble(1), 0x4);
    assert_eq!(digest.nibble(31), 0xb);
    assert_eq!(digest.nibble(32), digest.nibble(0));
    assert_eq!(digest.nibble(33), digest.nibble(1));
}

#[test]
fn square_origins_scale_digits_onto_default_canvas() {
    // Arrange
    let digest = SeedDigest::new(1);

    // Act
    let origins = square_origins(&digest, 10_000, 10_000);

    // Assert
    assert_eq!(origins.len(), SQUARE_COUNT);
    // 'c' * 1000 = 12000 % 10000, '4' * 1000
    assert_eq!(origins[0], (2_000, 4_000));
    // '4', 'c'
    assert_eq!(origins[1], (4_000, 2_000));
    // index 31 pairs 'b' with the wrapped first digit 'c'
    assert_eq!(origins[31], (1_000, 2_000));
    assert_eq!(origins[32], origins[0]);
}

#[test]
fn square_origins_stay_inside_small_canvas() {
    let digest = SeedDigest::new(42);

    for (x, y) in square_origins(&digest, 64, 48) {
        assert!(x < 64, "x out of bounds: {x}");
        assert!(y < 48, "y out of bounds: {y}");
    }
}
