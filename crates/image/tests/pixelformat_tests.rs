use image::{rgb565_to_rgb888, rgb888_to_rgb565};

#[test]
fn test_rgb565_round_trip_is_lossless() {
    for packed in 0..=u16::MAX {
        let [lo, hi] = packed.to_le_bytes();
        let (r, g, b) = rgb565_to_rgb888(lo, hi);
        assert_eq!(rgb888_to_rgb565(r, g, b), (lo, hi), "packed value {:#06x}", packed);
    }
}

#[test]
fn test_expansion_leaves_low_bits_clear() {
    for packed in 0..=u16::MAX {
        let [lo, hi] = packed.to_le_bytes();
        let (r, g, b) = rgb565_to_rgb888(lo, hi);
        assert_eq!(r & 0x07, 0);
        assert_eq!(g & 0x03, 0);
        assert_eq!(b & 0x07, 0);
    }
}

#[test]
fn test_white_and_black() {
    assert_eq!(rgb565_to_rgb888(0xFF, 0xFF), (0xF8, 0xFC, 0xF8));
    assert_eq!(rgb565_to_rgb888(0x00, 0x00), (0, 0, 0));
}

#[test]
fn test_encode_drops_low_bits() {
    assert_eq!(rgb888_to_rgb565(0xFF, 0x00, 0x00), (0x00, 0xF8));
    assert_eq!(rgb888_to_rgb565(0xFF, 0xFF, 0xFF), (0xFF, 0xFF));
}
