//! Validates quarter-turn algebra: unit mappings, composition, inverses

use cubewalk::TraversalError;
use cubewalk::algebra::{Direction2, Direction3, Rotation2, Rotation3, Turn, Vec2, Vec3};

fn spin2(direction: Direction2, rotation: Rotation2) -> Option<Direction2> {
    (direction.unit() * rotation).direction()
}

fn spin3(direction: Direction3, rotation: Rotation3) -> Option<Direction3> {
    (direction.unit() * rotation).direction()
}

#[test]
fn test_turn_rotations_match_the_turn_table() {
    for direction in Direction2::ALL {
        for turn in [Turn::Left, Turn::Right] {
            assert_eq!(
                spin2(direction, Rotation2::from_turn(turn)),
                Some(direction.turn(turn))
            );
        }
    }
}

#[test]
fn test_four_quarter_turns_return_a_facing_home() {
    for direction in Direction2::ALL {
        for turn in [Turn::Left, Turn::Right] {
            let mut vector = direction.unit();
            for _ in 0..4 {
                vector = vector * Rotation2::from_turn(turn);
            }
            assert_eq!(vector, direction.unit());
        }
    }
}

#[test]
fn test_planar_rotations_by_signed_angles() {
    let quarter = Rotation2::from_degrees(90).unwrap();
    let half = Rotation2::from_degrees(-180).unwrap();
    let clockwise = Rotation2::from_degrees(-90).unwrap();

    assert_eq!(spin2(Direction2::Left, quarter), Some(Direction2::Down));
    assert_eq!(spin2(Direction2::Left, half), Some(Direction2::Right));
    assert_eq!(spin2(Direction2::Up, clockwise), Some(Direction2::Right));
}

#[test]
fn test_spatial_rotations_about_each_axis() {
    let cases = [
        (Direction3::Up, Rotation3::about_x(90), Direction3::Back),
        (Direction3::Down, Rotation3::about_x(-90), Direction3::Back),
        (Direction3::Up, Rotation3::about_x(180), Direction3::Down),
        (Direction3::Front, Rotation3::about_x(-180), Direction3::Back),
        (Direction3::Right, Rotation3::about_x(90), Direction3::Right),
        (Direction3::Right, Rotation3::about_y(90), Direction3::Back),
        (Direction3::Right, Rotation3::about_y(-90), Direction3::Front),
        (Direction3::Up, Rotation3::about_y(-180), Direction3::Up),
        (Direction3::Right, Rotation3::about_z(90), Direction3::Up),
        (Direction3::Right, Rotation3::about_z(-90), Direction3::Down),
        (Direction3::Left, Rotation3::about_z(-180), Direction3::Right),
        (Direction3::Back, Rotation3::about_z(-180), Direction3::Back),
    ];
    for (start, rotation, expected) in cases {
        assert_eq!(spin3(start, rotation.unwrap()), Some(expected));
    }
}

#[test]
fn test_composition_applies_left_to_right() {
    let folded = Rotation3::about_x(90)
        .unwrap()
        .then(&Rotation3::about_y(90).unwrap());
    assert_eq!(spin3(Direction3::Back, folded), Some(Direction3::Down));

    // Reversed order lands somewhere else entirely
    let reversed = Rotation3::about_y(90)
        .unwrap()
        .then(&Rotation3::about_x(90).unwrap());
    assert_ne!(
        spin3(Direction3::Back, folded),
        spin3(Direction3::Back, reversed)
    );
}

#[test]
fn test_every_rotation_composed_with_its_inverse_is_identity() {
    let axes: [fn(i32) -> cubewalk::Result<Rotation3>; 3] = [
        Rotation3::about_x,
        Rotation3::about_y,
        Rotation3::about_z,
    ];
    for build in axes {
        for degrees in [-270, -180, -90, 0, 90, 180, 270] {
            let rotation = build(degrees).unwrap();
            assert_eq!(rotation.then(&rotation.inverse()), Rotation3::IDENTITY);
            assert_eq!(rotation.inverse().then(&rotation), Rotation3::IDENTITY);
        }
    }

    // Composites invert the same way
    let composite = Rotation3::quarter_x(1)
        .then(&Rotation3::quarter_y(-1))
        .then(&Rotation3::quarter_z(2));
    assert_eq!(composite.then(&composite.inverse()), Rotation3::IDENTITY);
}

#[test]
fn test_off_axis_angles_are_rejected() {
    assert_eq!(
        Rotation2::from_degrees(30),
        Err(TraversalError::InvalidRotation { degrees: 30 })
    );
    assert_eq!(
        Rotation3::about_z(91),
        Err(TraversalError::InvalidRotation { degrees: 91 })
    );
}

#[test]
fn test_vector_euclidean_remainder_reenters_face_range() {
    // One step off either face edge wraps into 0..4
    assert_eq!(Vec2::new(-1, 2).rem_euclid(4), Vec2::new(3, 2));
    assert_eq!(Vec2::new(4, 0).rem_euclid(4), Vec2::new(0, 0));
}

#[test]
fn test_only_unit_vectors_project_to_facings() {
    assert_eq!(Vec3::new(0, 0, -1).direction(), Some(Direction3::Front));
    assert_eq!(Vec2::new(2, 0).direction(), None);
    assert_eq!(Vec2::new(1, 1).direction(), None);
    assert_eq!(Vec3::new(0, 0, 2).direction(), None);
}
