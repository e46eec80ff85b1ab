use super::*;

#[test]
fn equal_layers_are_fully_transparent() {
    assert_eq!(merge_pixel(200, 200), [0, 0, 0, 0]);
    assert_eq!(merge_pixel(0, 0), [0, 0, 0, 0]);
}

#[test]
fn constant_200_pair_after_darkening() {
    // 200 darkened: top 228, bottom 100.
    assert_eq!(merge_pixel(228, 100), [200, 200, 200, 127]);
}

#[test]
fn gray_is_truncated_not_rounded() {
    // 127 / 254 * 255 = 127.5
    assert_eq!(merge_pixel(128, 127), [127, 127, 127, 254]);
    assert_eq!(merge_pixel(255, 127), [255, 255, 255, 127]);
    assert_eq!(merge_pixel(128, 0), [0, 0, 0, 127]);
}

#[test]
fn white_over_black_canvas_does_not_divide_by_zero() {
    assert_eq!(merge_pixel(255, 0), [0, 0, 0, 0]);
}

#[test]
fn wrapping_difference_saturates_gray() {
    // 10 - 20 wraps to 246, alpha 9, gray 566 -> 255.
    assert_eq!(merge_pixel(10, 20), [255, 255, 255, 9]);
    // 0 - 1 wraps to 255, alpha 0.
    assert_eq!(merge_pixel(0, 1), [0, 0, 0, 0]);
}

#[test]
fn darkened_ranges_never_cancel() {
    for t in 128..=255u8 {
        for b in 0..=127u8 {
            let px = merge_pixel(t, b);
            if t == 255 && b == 0 {
                assert_eq!(px[3], 0);
            } else {
                assert_eq!(px[3], 255 - (t - b));
                assert!(px[3] < 255);
            }
        }
    }
}

#[test]
fn merge_rejects_mismatched_layers() {
    let top = GrayMatrix::filled(3, 2, 200).unwrap();
    let bottom = GrayMatrix::filled(2, 3, 50).unwrap();
    let err = merge(&top, &bottom).unwrap_err();
    assert!(matches!(err, TankError::DimensionMismatch(_)), "{err}");
    assert!(merge_parallel(&top, &bottom).is_err());
}

#[test]
fn merge_lays_pixels_out_row_major() {
    let top = GrayMatrix::from_rows(&[[228u8, 255], [128, 200]]).unwrap();
    let bottom = GrayMatrix::from_rows(&[[100u8, 0], [0, 200]]).unwrap();
    let out = merge(&top, &bottom).unwrap();
    assert_eq!((out.width, out.height), (2, 2));
    assert_eq!(out.pixel(0, 0), [200, 200, 200, 127]);
    assert_eq!(out.pixel(1, 0), [0, 0, 0, 0]);
    assert_eq!(out.pixel(0, 1), [0, 0, 0, 127]);
    assert_eq!(out.pixel(1, 1), [0, 0, 0, 0]);
}

#[test]
fn parallel_matches_sequential() {
    let top_data: Vec<u8> = (0..64u32).map(|i| (128 + i * 2) as u8).collect();
    let bottom_data: Vec<u8> = (0..64u32).map(|i| (i * 2) as u8).collect();
    let top = GrayMatrix::from_raw(8, 8, top_data).unwrap();
    let bottom = GrayMatrix::from_raw(8, 8, bottom_data).unwrap();

    assert_eq!(
        merge(&top, &bottom).unwrap(),
        merge_parallel(&top, &bottom).unwrap()
    );
}
