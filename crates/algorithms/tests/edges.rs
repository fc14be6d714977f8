//! End-to-end checks of the edge detector on synthetic images.
//!
//! Every image here is built in code: constant fields, straight step edges
//! and a textured block pattern. Expected values for the step edges follow
//! from counting kernel cells on each side of the boundary.

use std::f64::consts::{FRAC_PI_2, PI};

use susanedge_algorithms::prelude::*;
use susanedge_core::io::{read_image_from_buffer, write_raster_to_buffer};

/// Two constant halves split by a vertical line before column `split`.
fn vertical_step(rows: usize, cols: usize, split: usize, left: f64, right: f64) -> Raster<f64> {
    let mut r = Raster::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            r.set(row, col, if col < split { left } else { right }).unwrap();
        }
    }
    r
}

fn textured(rows: usize, cols: usize) -> Raster<f64> {
    let mut r = Raster::new(rows, cols);
    for row in 0..rows {
        for col in 0..cols {
            let block = if (row / 5 + col / 7) % 2 == 0 { 60.0 } else { 180.0 };
            r.set(row, col, block + ((row * 31 + col * 17) % 9) as f64).unwrap();
        }
    }
    r
}

// ---------------------------------------------------------------------------
// Uniform input
// ---------------------------------------------------------------------------

#[test]
fn uniform_image_has_no_edges() {
    for value in [0.0, 17.0, 255.0] {
        let image = Raster::filled(11, 13, value);
        for connected in [false, true] {
            for range in [0, 255, 1000] {
                let params = EdgeStrengthParams {
                    connected,
                    range,
                    ..Default::default()
                };
                let strength = edge_strength(&image, params).unwrap();
                assert_eq!(strength.max_value(), 0.0, "value {} range {}", value, range);

                let orientation =
                    edge_orientation(&strength, EdgeOrientationParams::default()).unwrap();
                assert!(orientation.data().iter().all(|&v| v == 0.0));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Step edge
// ---------------------------------------------------------------------------

#[test]
fn step_edge_strength_is_concentrated_at_boundary() {
    let image = vertical_step(15, 16, 8, 0.0, 100.0);
    let strength = edge_strength(&image, EdgeStrengthParams::default()).unwrap();
    assert_eq!(strength.depth(), Some(BitDepth::U8));

    for row in 0..15 {
        for col in 0..16 {
            let v = strength.get(row, col).unwrap();
            if col == 7 || col == 8 {
                assert_eq!(v, 255.0, "boundary pixel ({}, {})", row, col);
            } else {
                assert_eq!(v, 0.0, "pixel ({}, {}) away from boundary", row, col);
            }
        }
    }
}

#[test]
fn step_edge_orientation_is_near_vertical() {
    let image = vertical_step(15, 16, 8, 0.0, 100.0);
    let strength = edge_strength(&image, EdgeStrengthParams::default()).unwrap();
    let orientation = edge_orientation(&strength, EdgeOrientationParams::default()).unwrap();

    for row in 3..=11 {
        for col in [7, 8] {
            let v = orientation.get(row, col).unwrap();
            assert!(
                (v - FRAC_PI_2).abs() < 0.13,
                "orientation at ({}, {}) = {}, expected near π/2",
                row,
                col,
                v
            );
        }
    }
    for row in 0..15 {
        assert_eq!(orientation.get(row, 2).unwrap(), 0.0);
    }
}

#[test]
fn raw_and_quantized_maps_share_orientation_support() {
    let image = textured(24, 30);
    let raw = edge_strength(
        &image,
        EdgeStrengthParams {
            range: 0,
            ..Default::default()
        },
    )
    .unwrap();
    let raw_orientation = edge_orientation(&raw, EdgeOrientationParams::default()).unwrap();

    // Quantization rounds, so only the support and the value range are compared
    let quantized = edge_strength(&image, EdgeStrengthParams::default()).unwrap();
    let q_orientation = edge_orientation(&quantized, EdgeOrientationParams::default()).unwrap();

    for row in 0..24 {
        for col in 0..30 {
            let r = raw_orientation.get(row, col).unwrap();
            let q = q_orientation.get(row, col).unwrap();
            if quantized.get(row, col).unwrap() > 0.0 {
                assert!(q > 0.0 && q <= PI, "({}, {}) = {}", row, col, q);
            } else {
                assert_eq!(q, 0.0);
            }
            if raw.get(row, col).unwrap() > 0.0 {
                assert!(r > 0.0 && r <= PI, "({}, {}) = {}", row, col, r);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Connectivity
// ---------------------------------------------------------------------------

#[test]
fn connectivity_raises_strength_for_detached_island() {
    let mut image = Raster::filled(9, 9, 220.0);
    // Nucleus at (4, 4) touching (4, 5); (1, 4) shares the value but is detached
    for (row, col) in [(4, 4), (4, 5), (1, 4)] {
        image.set(row, col, 10.0).unwrap();
    }

    let raw = EdgeStrengthParams {
        range: 0,
        ..Default::default()
    };
    let plain = edge_strength(&image, raw).unwrap();
    let linked = edge_strength(
        &image,
        EdgeStrengthParams {
            connected: true,
            ..raw
        },
    )
    .unwrap();

    let p = plain.get(4, 4).unwrap();
    let l = linked.get(4, 4).unwrap();
    assert!(l > p, "connected {} should exceed plain {}", l, p);
    assert!((l - p - 1.0).abs() < 1e-9, "exactly one detached cell dropped");
}

// ---------------------------------------------------------------------------
// Determinism and shared kernel
// ---------------------------------------------------------------------------

#[test]
fn repeated_runs_are_bit_identical() {
    let image = textured(40, 33);
    let detector = EdgeDetector::new(EdgeStrengthParams {
        connected: true,
        ..Default::default()
    })
    .unwrap();

    let first = detector.detect(&image).unwrap();
    for _ in 0..3 {
        let again = detector.detect(&image).unwrap();
        assert_eq!(first, again);
        let bits: Vec<u64> = again.orientation.data().iter().map(|v| v.to_bits()).collect();
        let expected: Vec<u64> = first.orientation.data().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits, expected);
    }
}

#[test]
fn rgb_image_matches_its_gray_reduction() {
    let gray = textured(12, 12);
    let mut samples = Vec::with_capacity(12 * 12 * 3);
    for &v in gray.data().iter() {
        samples.extend_from_slice(&[v, v, v]);
    }
    let rgb = Image::from_interleaved(samples, 12, 12, 3).unwrap();

    let params = EdgeStrengthParams {
        range: 0,
        ..Default::default()
    };
    let from_rgb = edge_strength(&rgb, params).unwrap();
    let from_gray = edge_strength(&gray, params).unwrap();
    let (a, b) = (from_rgb.as_real().unwrap(), from_gray.as_real().unwrap());
    for (x, y) in a.data().iter().zip(b.data().iter()) {
        assert!((x - y).abs() < 1e-6, "{} vs {}", x, y);
    }
}

// ---------------------------------------------------------------------------
// File round trip
// ---------------------------------------------------------------------------

#[test]
fn strength_map_survives_tiff_round_trip() {
    let image = vertical_step(10, 10, 5, 30.0, 200.0);
    let strength = edge_strength(&image, EdgeStrengthParams::default()).unwrap();
    let StrengthMap::U8(map) = &strength else {
        panic!("expected an 8-bit map, got {:?}", strength.depth());
    };

    let buffer = write_raster_to_buffer(map).unwrap();
    let decoded = read_image_from_buffer(&buffer).unwrap();
    let gray = decoded.to_gray().unwrap();
    assert_eq!(gray, strength.to_f64());

    let from_file = edge_orientation(&decoded, EdgeOrientationParams::default()).unwrap();
    let direct = edge_orientation(&strength, EdgeOrientationParams::default()).unwrap();
    assert_eq!(from_file, direct);
}
