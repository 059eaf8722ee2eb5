//! Folding a face layout into a cube
//!
//! Folding walks the net as an undirected graph of edge-adjacent face
//! blocks. The root face keeps the canonical orientation (outward normal
//! toward the viewer, up toward the net's top); every other face picks up
//! one single-axis quarter turn per fold edge on the path from the root,
//! composed child-first so a face's own fold applies before its parent's.
//!
//! A layout is accepted only if it is a genuine cube unfolding: exactly
//! six blocks, all reachable from the root, folding to six distinct
//! outward normals. Anything else is rejected before walking begins.

use crate::algebra::direction::{Direction2, Direction3};
use crate::algebra::rotation::Rotation3;
use crate::algebra::vector::{Vec2, Vec3};
use crate::error::{Result, malformed_net};
use crate::folding::faces::FaceSet;
use crate::spatial::net::{FACE_COUNT, FaceNet};

/// The quarter turn induced by folding across an edge toward a direction
///
/// Folds always tip the far face behind the net plane.
pub(crate) const fn fold_rotation(direction: Direction2) -> Rotation3 {
    match direction {
        Direction2::Left => Rotation3::quarter_y(-1),
        Direction2::Right => Rotation3::quarter_y(1),
        Direction2::Up => Rotation3::quarter_x(1),
        Direction2::Down => Rotation3::quarter_x(-1),
    }
}

/// A face with its cumulative fold rotation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldedFace {
    /// Block coordinate of the face in the flat layout
    pub block: Vec2,
    /// Rotation from the face's flat pose to its folded pose
    pub rotation: Rotation3,
}

impl FoldedFace {
    /// Outward normal of the face once folded
    ///
    /// Every face's flat outward normal points toward the viewer; the
    /// folded normal is that vector carried through the cumulative
    /// rotation.
    pub fn outward_normal(&self) -> Vec3 {
        Direction3::Front.unit() * self.rotation
    }
}

/// Fold every face of a net, rooted at one face block
///
/// Runs a depth-first traversal over an explicit worklist, composing
/// each fold's quarter turn into the rotation inherited from the parent.
///
/// # Errors
///
/// Returns [`MalformedNet`](crate::TraversalError::MalformedNet) when the
/// net does not hold exactly six faces, when a face cannot be reached
/// from the root by edge adjacency, or when the folded faces fail to
/// cover the six principal directions with their outward normals.
pub fn fold_net(net: &FaceNet, root: Vec2) -> Result<Vec<FoldedFace>> {
    if net.face_count() != FACE_COUNT {
        return Err(malformed_net(&format!(
            "expected {FACE_COUNT} face blocks, found {}",
            net.face_count()
        )));
    }
    if !net.contains(root) {
        return Err(malformed_net(&format!(
            "fold root ({}, {}) is not a face block",
            root.x, root.y
        )));
    }

    let mut folded = Vec::with_capacity(FACE_COUNT);
    let mut visited = FaceSet::new();
    let mut pending = vec![(root, Rotation3::IDENTITY)];
    visited.insert(root);

    while let Some((block, rotation)) = pending.pop() {
        folded.push(FoldedFace { block, rotation });
        for direction in Direction2::ALL {
            let neighbor = block + direction;
            if net.contains(neighbor) && !visited.contains(neighbor) {
                visited.insert(neighbor);
                pending.push((neighbor, fold_rotation(direction).then(&rotation)));
            }
        }
    }

    if folded.len() != FACE_COUNT {
        return Err(malformed_net(&format!(
            "{} of {FACE_COUNT} face blocks unreachable from root ({}, {})",
            FACE_COUNT - folded.len(),
            root.x,
            root.y
        )));
    }

    // Six faces with pairwise-distinct principal normals necessarily
    // cover all six directions.
    let mut covered = 0u8;
    for face in &folded {
        let direction = face.outward_normal().direction().ok_or_else(|| {
            malformed_net(&format!(
                "block ({}, {}) folded to a non-principal normal",
                face.block.x, face.block.y
            ))
        })?;
        let bit = 1u8 << direction as u8;
        if covered & bit != 0 {
            return Err(malformed_net(&format!(
                "layout folds onto itself at block ({}, {})",
                face.block.x, face.block.y
            )));
        }
        covered |= bit;
    }

    Ok(folded)
}
