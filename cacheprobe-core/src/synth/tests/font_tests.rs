use crate::synth::font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph, is_set};
use pretty_assertions::assert_eq;

#[test]
fn lowercase_uses_uppercase_glyphs() {
    assert_eq!(glyph('a'), glyph('A'));
    assert_eq!(glyph('z'), glyph('Z'));
}

#[test]
fn space_is_blank() {
    let blank = glyph(' ');

    for row in 0..GLYPH_HEIGHT {
        for col in 0..GLYPH_WIDTH {
            assert!(!is_set(&blank, col, row));
        }
    }
}

#[test]
fn unknown_characters_render_as_box() {
    let unknown = glyph('@');

    assert!(is_set(&unknown, 0, 0));
    assert!(is_set(&unknown, GLYPH_WIDTH - 1, GLYPH_HEIGHT - 1));
    assert!(!is_set(&unknown, 2, 3));
    assert_eq!(glyph('@'), glyph('\u{2603}'));
}

#[test]
fn caption_characters_have_dedicated_glyphs() {
    let unknown = glyph('@');

    for c in "Cache Test Image #0123456789 Generated at: T-Z. Size: ~MB".chars() {
        if c == ' ' {
            continue;
        }
        assert_ne!(glyph(c), unknown, "missing glyph for {c:?}");
    }
}

#[test]
fn out_of_range_coordinates_are_unset() {
    let full = glyph('#');

    assert!(!is_set(&full, GLYPH_WIDTH, 0));
    assert!(!is_set(&full, 0, GLYPH_HEIGHT));
}
