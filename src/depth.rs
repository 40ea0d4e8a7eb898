//! Painter's algorithm ordering: farthest first, nearest drawn last.

use std::cmp::Ordering;

use crate::block::Block;
use crate::face::Face;
use crate::math::Vec3;

fn farthest_first(a: f32, b: f32) -> Ordering {
    b.total_cmp(&a)
}

/// World-space squared distance from `eye` to the block's grid origin.
pub fn block_sort_key(block: &Block, eye: Vec3) -> f32 {
    block.origin().squared_distance(eye)
}

/// Blocks ordered farthest first. The world itself is left in insertion order.
pub fn sort_blocks(blocks: &[Block], eye: Vec3) -> Vec<&Block> {
    let mut keyed: Vec<(f32, &Block)> = blocks
        .iter()
        .map(|block| (block_sort_key(block, eye), block))
        .collect();
    keyed.sort_by(|a, b| farthest_first(a.0, b.0));
    keyed.into_iter().map(|(_, block)| block).collect()
}

/// A camera-space face with its sort key.
#[derive(Clone, Copy, Debug)]
pub struct DepthFace {
    pub face: Face,
    /// Squared distance from the viewer to the centroid.
    pub depth: f32,
}

impl DepthFace {
    /// The viewer sits at the camera-space origin.
    pub fn new(camera_space: Face) -> Self {
        Self {
            depth: camera_space.centroid.length_squared(),
            face: camera_space,
        }
    }
}

/// Stable, so exact ties keep build order.
pub fn sort_faces(faces: &mut [DepthFace]) {
    faces.sort_by(|a, b| farthest_first(a.depth, b.depth));
}

pub fn max_depth(faces: &[DepthFace]) -> f32 {
    faces.iter().map(|f| f.depth).fold(0.0, f32::max)
}
