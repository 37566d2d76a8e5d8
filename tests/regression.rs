//! Bit-exact regression vector for the u16 rendering pipeline.
//!
//! These values were captured from the C renderers this crate replaces:
//! two five-pixel channels, windowed, composited under overdriven weights
//! (weights on the historical 0..65535 scale, which exercises the modular
//! product), and folded to 8-bit RGB. Every intermediate and the final bytes
//! must match exactly; a one-unit drift here means the arithmetic changed.

use channel_blend::{
    composite, composite_channels, rescale_intensity, to_display_bounded, Channel,
};

const CH1: [u16; 5] = [0, 500, 10_000, 32_767, 48_000];
const CH2: [u16; 5] = [0, 62_000, 52_000, 32_767, 15_000];

const CH1_WINDOW: (u16, u16) = (2_000, 36_000);
const CH2_WINDOW: (u16, u16) = (5_500, 48_000);

const CH1_WEIGHTS: (f32, f32, f32) = (65_535.0, 65_535.0, 65_535.0);
const CH2_WEIGHTS: (f32, f32, f32) = (48_000.0, 65_535.0, 12_000.0);

const EXPECTED_RGB: [u8; 15] = [
    0, 0, 0, //
    136, 0, 162, //
    255, 135, 255, //
    101, 232, 189, //
    21, 141, 69,
];

#[test]
fn rescale_intermediates_are_exact() {
    let mut ch1 = CH1;
    rescale_intensity(&mut ch1, CH1_WINDOW.0, CH1_WINDOW.1).unwrap();
    assert_eq!(ch1, [0, 0, 15_420, 59_303, 65_535]);

    let mut ch2 = CH2;
    rescale_intensity(&mut ch2, CH2_WINDOW.0, CH2_WINDOW.1).unwrap();
    assert_eq!(ch2, [0, 65_535, 65_535, 42_045, 14_649]);
}

#[test]
fn kernel_sequence_reproduces_archived_bytes() {
    let mut ch1 = CH1;
    let mut ch2 = CH2;
    rescale_intensity(&mut ch1, CH1_WINDOW.0, CH1_WINDOW.1).unwrap();
    rescale_intensity(&mut ch2, CH2_WINDOW.0, CH2_WINDOW.1).unwrap();

    let mut accum = [0u32; 15];
    composite(&mut accum, &ch1, CH1_WEIGHTS.0, CH1_WEIGHTS.1, CH1_WEIGHTS.2).unwrap();
    composite(&mut accum, &ch2, CH2_WEIGHTS.0, CH2_WEIGHTS.1, CH2_WEIGHTS.2).unwrap();

    let mut rgb = [0u8; 15];
    to_display_bounded(&accum, &mut rgb, 0, 65_535).unwrap();
    assert_eq!(rgb, EXPECTED_RGB);
}

#[test]
fn composite_channels_reproduces_archived_bytes() {
    let rgb = composite_channels(&[
        Channel {
            image: &CH1,
            color: [CH1_WEIGHTS.0, CH1_WEIGHTS.1, CH1_WEIGHTS.2],
            min: CH1_WINDOW.0,
            max: CH1_WINDOW.1,
        },
        Channel {
            image: &CH2,
            color: [CH2_WEIGHTS.0, CH2_WEIGHTS.1, CH2_WEIGHTS.2],
            min: CH2_WINDOW.0,
            max: CH2_WINDOW.1,
        },
    ])
    .unwrap();
    assert_eq!(rgb.as_slice(), EXPECTED_RGB.as_slice());
}

#[test]
fn channel_order_does_not_change_the_frame() {
    // Saturation happens only at display time here, so swapping the two
    // channels must not change a byte.
    let forward = composite_channels(&[
        Channel {
            image: &CH1,
            color: [CH1_WEIGHTS.0, CH1_WEIGHTS.1, CH1_WEIGHTS.2],
            min: CH1_WINDOW.0,
            max: CH1_WINDOW.1,
        },
        Channel {
            image: &CH2,
            color: [CH2_WEIGHTS.0, CH2_WEIGHTS.1, CH2_WEIGHTS.2],
            min: CH2_WINDOW.0,
            max: CH2_WINDOW.1,
        },
    ])
    .unwrap();
    let reversed = composite_channels(&[
        Channel {
            image: &CH2,
            color: [CH2_WEIGHTS.0, CH2_WEIGHTS.1, CH2_WEIGHTS.2],
            min: CH2_WINDOW.0,
            max: CH2_WINDOW.1,
        },
        Channel {
            image: &CH1,
            color: [CH1_WEIGHTS.0, CH1_WEIGHTS.1, CH1_WEIGHTS.2],
            min: CH1_WINDOW.0,
            max: CH1_WINDOW.1,
        },
    ])
    .unwrap();
    assert_eq!(forward, reversed);
}
