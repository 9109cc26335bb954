//! Shape library tests: matrix geometry and rotation behavior.

use gridfall::core::shapes::{definitions, pick_random, SHAPE_COUNT};

#[test]
fn test_library_has_seven_tetrominoes() {
    let defs = definitions();
    assert_eq!(defs.len(), SHAPE_COUNT);
    for (shape, _) in &defs {
        assert_eq!(shape.cells().count(), 4, "every tetromino has four cells");
        assert!(matches!(shape.size(), 2..=4));
    }
}

#[test]
fn test_colors_are_unique() {
    let defs = definitions();
    for (i, (_, a)) in defs.iter().enumerate() {
        for (_, b) in defs.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_four_rotations_return_to_the_original() {
    for (shape, _) in definitions() {
        let mut rotated = shape.clone();
        for _ in 0..4 {
            rotated = rotated.rotated_cw();
        }
        assert_eq!(rotated, shape);
    }
}

#[test]
fn test_square_is_rotation_invariant() {
    let (square, _) = definitions().into_iter().nth(1).unwrap();
    assert_eq!(square.rotated_cw(), square);
}

#[test]
fn test_rotation_moves_asymmetric_shapes() {
    // T (index 0) and I (index 2) change under a single rotation.
    for index in [0, 2] {
        let (shape, _) = definitions().into_iter().nth(index).unwrap();
        assert_ne!(shape.rotated_cw(), shape);
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for (shape, _) in definitions() {
        let mut rotated = shape.clone();
        for _ in 0..3 {
            rotated = rotated.rotated_cw();
            assert_eq!(rotated.cells().count(), 4);
            assert_eq!(rotated.size(), shape.size());
        }
    }
}

#[test]
fn test_pick_random_yields_library_entries() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let defs = definitions();
    let mut rng = StdRng::seed_from_u64(1234);
    for _ in 0..50 {
        let (shape, color) = pick_random(&mut rng);
        assert!(defs.iter().any(|(s, c)| *s == shape && *c == color));
    }
}
