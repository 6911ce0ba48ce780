//! Filter catalogue tests: spec scenarios and algebraic properties.

use enough::Unstoppable;
use zenretouch::transform::*;
use zenretouch::{Image, Pixel, RetouchError};

fn gradient(width: u32, height: u32) -> Image {
    Image::from_fn(width, height, |row, col| {
        Pixel::new(
            (row * 29 + col * 5) as u8,
            (row * 3 + col * 19) as u8,
            (row * 13 + col * 7) as u8,
        )
    })
}

// ── Grayscale ────────────────────────────────────────────────────────

#[test]
fn grayscale_averages_channels() {
    let img = Image::filled(1, 1, Pixel::new(10, 20, 40));
    let out = grayscale(&img, Unstoppable).unwrap();
    // (10 + 20 + 40) / 3 = 23 (integer division)
    assert_eq!(out.get(0, 0), Pixel::new(23, 23, 23));
}

#[test]
fn grayscale_leaves_mid_gray_untouched() {
    let img = Image::filled(2, 2, Pixel::new(128, 128, 128));
    let out = grayscale(&img, Unstoppable).unwrap();
    assert_eq!(out, img);
}

#[test]
fn grayscale_is_idempotent() {
    let img = gradient(6, 5);
    let once = grayscale(&img, Unstoppable).unwrap();
    let twice = grayscale(&once, Unstoppable).unwrap();
    assert_eq!(once, twice);
}

// ── High contrast ────────────────────────────────────────────────────

#[test]
fn high_contrast_splits_light_and_dark() {
    let mut img = Image::filled(2, 1, Pixel::BLACK);
    img.set(0, 0, Pixel::new(200, 200, 200));
    img.set(0, 1, Pixel::new(50, 50, 50));
    let out = high_contrast(&img, Unstoppable).unwrap();
    assert_eq!(out.get(0, 0), Pixel::WHITE);
    assert_eq!(out.get(0, 1), Pixel::BLACK);
}

#[test]
fn high_contrast_threshold_is_128() {
    let img = Image::from_fn(2, 1, |_, col| {
        if col == 0 {
            Pixel::new(128, 128, 128)
        } else {
            Pixel::new(127, 127, 127)
        }
    });
    let out = high_contrast(&img, Unstoppable).unwrap();
    assert_eq!(out.get(0, 0), Pixel::WHITE);
    assert_eq!(out.get(0, 1), Pixel::BLACK);
}

#[test]
fn high_contrast_output_is_pure() {
    let out = high_contrast(&gradient(9, 7), Unstoppable).unwrap();
    assert!(out
        .pixels()
        .iter()
        .all(|&px| px == Pixel::WHITE || px == Pixel::BLACK));
}

// ── Rotation ─────────────────────────────────────────────────────────

#[test]
fn rotate90_maps_indices() {
    // 2x1 image (width 2, height 1): A B
    let mut img = Image::filled(2, 1, Pixel::BLACK);
    let a = Pixel::new(1, 0, 0);
    let b = Pixel::new(0, 1, 0);
    img.set(0, 0, a);
    img.set(0, 1, b);

    let out = rotate90(&img, Unstoppable).unwrap();
    // new[c][height-1-r] = old[r][c] with height 1: A on top, B below.
    assert_eq!(out.width(), 1);
    assert_eq!(out.height(), 2);
    assert_eq!(out.get(0, 0), a);
    assert_eq!(out.get(1, 0), b);
}

#[test]
fn rotate90_swaps_dimensions() {
    let out = rotate90(&gradient(5, 3), Unstoppable).unwrap();
    assert_eq!((out.width(), out.height()), (3, 5));
}

#[test]
fn four_rotations_are_identity() {
    let img = gradient(4, 3);
    let mut out = img.clone();
    for _ in 0..4 {
        out = rotate90(&out, Unstoppable).unwrap();
    }
    assert_eq!(out, img);
}

#[test]
fn quarter_turns_wrap_modulo_four() {
    let img = gradient(5, 4);
    for turns in [-7, -3, 0, 1, 2, 3, 5] {
        let a = rotate_quarter_turns(&img, turns, Unstoppable).unwrap();
        let b = rotate_quarter_turns(&img, turns + 4, Unstoppable).unwrap();
        assert_eq!(a, b, "turns {turns}");
    }
    assert_eq!(
        rotate_quarter_turns(&img, 0, Unstoppable).unwrap(),
        img
    );
    assert_eq!(
        rotate_quarter_turns(&img, 1, Unstoppable).unwrap(),
        rotate90(&img, Unstoppable).unwrap()
    );
}

// ── Enlarge ──────────────────────────────────────────────────────────

#[test]
fn enlarge_unit_scale_is_identity() {
    let img = gradient(6, 4);
    let out = enlarge(&img, 1, 1, None, Unstoppable).unwrap();
    assert_eq!(out, img);
}

#[test]
fn enlarge_replicates_nearest_source_pixel() {
    let img = gradient(2, 2);
    let out = enlarge(&img, 3, 2, None, Unstoppable).unwrap();
    assert_eq!((out.width(), out.height()), (6, 4));
    for row in 0..4 {
        for col in 0..6 {
            assert_eq!(out.get(row, col), img.get(row / 2, col / 3));
        }
    }
}

#[test]
fn enlarge_rejects_zero_scale() {
    let img = gradient(2, 2);
    assert!(matches!(
        enlarge(&img, 0, 1, None, Unstoppable),
        Err(RetouchError::InvalidParameter(_))
    ));
    assert!(matches!(
        enlarge(&img, 1, 0, None, Unstoppable),
        Err(RetouchError::InvalidParameter(_))
    ));
}

#[test]
fn enlarge_honors_limits() {
    let img = gradient(4, 4);
    let limits = zenretouch::Limits {
        max_pixels: Some(32),
        ..Default::default()
    };
    assert!(matches!(
        enlarge(&img, 4, 4, Some(&limits), Unstoppable),
        Err(RetouchError::LimitExceeded(_))
    ));
}

// ── Lighten / darken / clarendon ─────────────────────────────────────

#[test]
fn darken_scales_channels() {
    let img = Image::filled(1, 1, Pixel::new(101, 50, 0));
    let out = darken(&img, 0.5, Unstoppable).unwrap();
    assert_eq!(out.get(0, 0), Pixel::new(50, 25, 0));
}

#[test]
fn lighten_scales_toward_white() {
    let img = Image::filled(1, 1, Pixel::new(55, 255, 0));
    let out = lighten(&img, 0.5, Unstoppable).unwrap();
    assert_eq!(out.get(0, 0), Pixel::new(155, 255, 127));
}

#[test]
fn out_of_range_factors_clamp() {
    let img = Image::filled(1, 1, Pixel::new(200, 200, 200));
    let darker = darken(&img, 2.0, Unstoppable).unwrap();
    assert_eq!(darker.get(0, 0), Pixel::WHITE); // 400 clamps to 255
    let negative = darken(&img, -1.0, Unstoppable).unwrap();
    assert_eq!(negative.get(0, 0), Pixel::BLACK);
    let lifted = lighten(&img, -1.0, Unstoppable).unwrap();
    assert_eq!(lifted.get(0, 0), Pixel::WHITE);
}

#[test]
fn clarendon_brightens_lights_and_darkens_darks() {
    let mut img = Image::filled(3, 1, Pixel::BLACK);
    img.set(0, 0, Pixel::new(200, 200, 200)); // avg 200: lighten
    img.set(0, 1, Pixel::new(50, 50, 50)); // avg 50: darken
    img.set(0, 2, Pixel::new(120, 130, 140)); // avg 130: untouched

    let out = clarendon(&img, 0.5, Unstoppable).unwrap();
    // 255 - (255 - 200) * 0.5 = 227.5, truncated to 227
    assert_eq!(out.get(0, 0), Pixel::new(227, 227, 227));
    assert_eq!(out.get(0, 1), Pixel::new(25, 25, 25));
    assert_eq!(out.get(0, 2), Pixel::new(120, 130, 140));
}

// ── Vignette ─────────────────────────────────────────────────────────

#[test]
fn vignette_keeps_center_and_darkens_corners() {
    let img = Image::filled(5, 5, Pixel::new(100, 100, 100));
    let out = vignette(&img, Unstoppable).unwrap();

    // Center is at distance zero: factor 1.
    assert_eq!(out.get(2, 2), Pixel::new(100, 100, 100));
    // Corner (0,0): distance sqrt(8), factor (5 - sqrt(8)) / 5,
    // 100 * 0.43431... truncates to 43.
    assert_eq!(out.get(0, 0), Pixel::new(43, 43, 43));
    // Symmetry: all four corners match.
    assert_eq!(out.get(0, 4), out.get(0, 0));
    assert_eq!(out.get(4, 0), out.get(4, 4));
}

#[test]
fn vignette_never_wraps_negative_factors() {
    // A wide, short image puts its corners farther away than `height`,
    // which drives the factor negative; channels must clamp to zero.
    let img = Image::filled(31, 3, Pixel::new(250, 250, 250));
    let out = vignette(&img, Unstoppable).unwrap();
    assert_eq!(out.get(0, 0), Pixel::BLACK);
    assert_eq!(out.get(2, 30), Pixel::BLACK);
}

// ── Five-color posterize ─────────────────────────────────────────────

#[test]
fn five_color_buckets() {
    let cases = [
        (Pixel::new(200, 200, 200), Pixel::WHITE), // sum 600
        (Pixel::new(50, 50, 50), Pixel::BLACK),    // sum 150
        (Pixel::new(180, 90, 20), Pixel::new(255, 0, 0)),
        (Pixel::new(90, 180, 20), Pixel::new(0, 255, 0)),
        (Pixel::new(20, 90, 180), Pixel::new(0, 0, 255)),
        (Pixel::new(100, 100, 90), Pixel::new(255, 0, 0)), // tie: red wins
        (Pixel::new(40, 120, 120), Pixel::new(0, 255, 0)), // tie: green over blue
    ];
    for (input, expected) in cases {
        let out = five_color(&Image::filled(1, 1, input), Unstoppable).unwrap();
        assert_eq!(out.get(0, 0), expected, "{input:?}");
    }
}

#[test]
fn five_color_output_is_in_palette() {
    let palette = [
        Pixel::WHITE,
        Pixel::BLACK,
        Pixel::new(255, 0, 0),
        Pixel::new(0, 255, 0),
        Pixel::new(0, 0, 255),
    ];
    let out = five_color(&gradient(8, 8), Unstoppable).unwrap();
    assert!(out.pixels().iter().all(|px| palette.contains(px)));
}

// ── Purity ───────────────────────────────────────────────────────────

#[test]
fn filters_do_not_mutate_their_input() {
    let img = gradient(4, 4);
    let copy = img.clone();
    let _ = vignette(&img, Unstoppable).unwrap();
    let _ = clarendon(&img, 0.3, Unstoppable).unwrap();
    let _ = grayscale(&img, Unstoppable).unwrap();
    let _ = rotate90(&img, Unstoppable).unwrap();
    let _ = enlarge(&img, 2, 2, None, Unstoppable).unwrap();
    let _ = high_contrast(&img, Unstoppable).unwrap();
    let _ = five_color(&img, Unstoppable).unwrap();
    assert_eq!(img, copy);
}
