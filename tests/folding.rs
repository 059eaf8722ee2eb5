//! Validates net folding: block sets, normal coverage, re-rooting,
//! caching, and malformed layouts

use cubewalk::TraversalError;
use cubewalk::algebra::{Direction2, Direction3, Rotation2, Vec2};
use cubewalk::folding::cache::{WrapCache, WrapKey, WrapTarget};
use cubewalk::folding::faces::FaceSet;
use cubewalk::folding::folder::fold_net;
use cubewalk::input::parse_grid;
use cubewalk::spatial::FaceNet;

// Cross-shaped reference layout: six faces of edge 4 in a 4x3 block grid
const CROSS: [&str; 12] = [
    "        ....",
    "        ....",
    "        ....",
    "        ....",
    "............",
    "............",
    "............",
    "............",
    "        ........",
    "        ........",
    "        ........",
    "        ........",
];

fn cross_net() -> FaceNet {
    let grid = parse_grid(&CROSS).unwrap();
    FaceNet::from_grid(&grid)
}

#[test]
fn test_cross_layout_samples_six_blocks() {
    let net = cross_net();
    assert_eq!(net.edge_length(), 4);
    assert_eq!(net.face_count(), 6);
    assert_eq!(
        net.blocks(),
        vec![
            Vec2::new(2, 0),
            Vec2::new(0, 1),
            Vec2::new(1, 1),
            Vec2::new(2, 1),
            Vec2::new(2, 2),
            Vec2::new(3, 2),
        ]
    );
    assert_eq!(net.block_of(Vec2::new(9, 5)), Vec2::new(2, 1));
    assert_eq!(net.top_left(Vec2::new(2, 1)), Vec2::new(8, 4));
}

#[test]
fn test_face_set_membership() {
    let mut set = FaceSet::new();
    assert!(set.is_empty());

    set.insert(Vec2::new(2, 0));
    set.insert(Vec2::new(0, 1));
    set.insert(Vec2::new(0, 1));

    assert!(set.contains(Vec2::new(2, 0)));
    assert!(!set.contains(Vec2::new(0, 2)));
    assert_eq!(set.count(), 2);
    assert_eq!(set.blocks(), vec![Vec2::new(2, 0), Vec2::new(0, 1)]);
}

#[test]
fn test_face_set_ignores_out_of_layout_blocks() {
    let mut set = FaceSet::new();
    set.insert(Vec2::new(-1, 0));
    set.insert(Vec2::new(0, 4));

    assert!(set.is_empty());
    assert!(!set.contains(Vec2::new(4, 4)));
}

#[test]
fn test_wrap_cache_computes_once_per_key() {
    let mut cache = WrapCache::new();
    let key = WrapKey {
        block: Vec2::new(2, 0),
        direction: Direction2::Right,
    };

    let first = cache
        .get_or_try_compute(key, || {
            Ok(WrapTarget {
                block: Vec2::new(3, 2),
                unfold: Rotation2::quarter(2),
            })
        })
        .map(|target| target.block);
    assert_eq!(first, Ok(Vec2::new(3, 2)));
    assert_eq!(cache.stats.misses, 1);
    assert_eq!(cache.stats.hits, 0);

    let second = cache
        .get_or_try_compute(key, || unreachable!("cached key must not recompute"))
        .map(|target| target.block);
    assert_eq!(second, Ok(Vec2::new(3, 2)));
    assert_eq!(cache.stats.hits, 1);
}

#[test]
fn test_folding_covers_the_six_principal_directions() {
    let net = cross_net();
    let folded = fold_net(&net, Vec2::new(2, 0)).unwrap();

    let mut normals: Vec<Direction3> = folded
        .iter()
        .map(|face| face.outward_normal().direction().unwrap())
        .collect();
    normals.sort_by_key(|direction| *direction as u8);
    normals.dedup();

    assert_eq!(normals.len(), 6);
    for direction in Direction3::ALL {
        assert!(normals.contains(&direction));
    }
}

#[test]
fn test_folding_reroots_at_every_face() {
    // Whichever face anchors the fold keeps the canonical orientation
    let net = cross_net();
    for root in net.blocks() {
        let folded = fold_net(&net, root).unwrap();
        let anchored = folded.iter().find(|face| face.block == root).unwrap();
        assert_eq!(
            anchored.outward_normal().direction(),
            Some(Direction3::Front)
        );
    }
}

#[test]
fn test_truncated_layout_is_rejected() {
    // Dropping the bottom arm of the cross leaves four faces; the first
    // row is padded so the sampled edge length stays 4
    let rows = [
        "        ....    ",
        "        ....",
        "        ....",
        "        ....",
        "............",
        "............",
        "............",
        "............",
    ];
    let grid = parse_grid(&rows).unwrap();
    let net = FaceNet::from_grid(&grid);
    assert_eq!(net.edge_length(), 4);
    assert_eq!(net.face_count(), 4);
    assert!(matches!(
        fold_net(&net, Vec2::new(2, 0)),
        Err(TraversalError::MalformedNet { .. })
    ));
}

#[test]
fn test_detached_face_is_rejected() {
    // Six blocks of edge 1, but one only touches the rest at a corner
    let grid = parse_grid(&["....", ".", "  ."]).unwrap();
    let net = FaceNet::from_grid(&grid);
    assert_eq!(net.face_count(), 6);
    assert!(matches!(
        fold_net(&net, Vec2::new(0, 0)),
        Err(TraversalError::MalformedNet { .. })
    ));
}

#[test]
fn test_rectangle_layout_folds_onto_itself() {
    // A connected 2x3 block rectangle is no cube unfolding
    let rows = [
        "........        ",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
        "........",
    ];
    let grid = parse_grid(&rows).unwrap();
    let net = FaceNet::from_grid(&grid);
    assert_eq!(net.edge_length(), 4);
    assert_eq!(net.face_count(), 6);
    assert!(matches!(
        fold_net(&net, Vec2::new(0, 0)),
        Err(TraversalError::MalformedNet { .. })
    ));
}

#[test]
fn test_foreign_root_is_rejected() {
    let net = cross_net();
    assert!(matches!(
        fold_net(&net, Vec2::new(0, 0)),
        Err(TraversalError::MalformedNet { .. })
    ));
}
