//! Unit cube geometry.
//!
//! A block at grid cell `(x, y, z)` spans `[x, x+1] × [y-1, y] × [z, z+1]`:
//! the cell origin is the top-left-near corner and the cube hangs below it.

use crate::block::Block;
use crate::math::Vec3;

const CUBE_VERTICES: [Vec3; 8] = [
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(1.0, -1.0, 0.0),
    Vec3::new(0.0, -1.0, 0.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(1.0, -1.0, 1.0),
    Vec3::new(0.0, -1.0, 1.0),
];

/// Which side of the cube a face covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FaceKind {
    NegZ,
    PosX,
    Bottom,
    NegX,
    Top,
    PosZ,
}

impl FaceKind {
    pub const ALL: [FaceKind; 6] = [
        FaceKind::NegZ,
        FaceKind::PosX,
        FaceKind::Bottom,
        FaceKind::NegX,
        FaceKind::Top,
        FaceKind::PosZ,
    ];

    /// Vertex loop into [`CUBE_VERTICES`], walking the face perimeter.
    fn indices(self) -> [usize; 4] {
        match self {
            FaceKind::NegZ => [0, 1, 2, 3],
            FaceKind::PosX => [1, 2, 6, 5],
            FaceKind::Bottom => [2, 3, 7, 6],
            FaceKind::NegX => [3, 0, 4, 7],
            FaceKind::Top => [4, 0, 1, 5],
            FaceKind::PosZ => [6, 7, 4, 5],
        }
    }

    fn local_centroid(self) -> Vec3 {
        match self {
            FaceKind::NegZ => Vec3::new(0.5, -0.5, 0.0),
            FaceKind::PosX => Vec3::new(1.0, -0.5, 0.5),
            FaceKind::Bottom => Vec3::new(0.5, -1.0, 0.5),
            FaceKind::NegX => Vec3::new(0.0, -0.5, 0.5),
            FaceKind::Top => Vec3::new(0.5, 0.0, 0.5),
            FaceKind::PosZ => Vec3::new(0.5, -0.5, 1.0),
        }
    }

    /// Fixed overhead light: top lit fully, bottom darkest, sides in between.
    pub fn shade(self) -> f32 {
        match self {
            FaceKind::Top => 1.0,
            FaceKind::Bottom => 0.6,
            FaceKind::NegZ | FaceKind::PosX | FaceKind::NegX | FaceKind::PosZ => 0.8,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub kind: FaceKind,
    pub vertices: [Vec3; 4],
    pub centroid: Vec3,
    pub shade: f32,
}

impl Face {
    /// Applies `f` to every vertex and the centroid.
    pub fn map(&self, f: impl Fn(Vec3) -> Vec3) -> Face {
        Face {
            kind: self.kind,
            vertices: self.vertices.map(&f),
            centroid: f(self.centroid),
            shade: self.shade,
        }
    }
}

/// The six world-space faces of `block`, in [`FaceKind::ALL`] order.
pub fn build_faces(block: &Block) -> [Face; 6] {
    let origin = block.origin();
    FaceKind::ALL.map(|kind| Face {
        kind,
        vertices: kind.indices().map(|i| CUBE_VERTICES[i] + origin),
        centroid: kind.local_centroid() + origin,
        shade: kind.shade(),
    })
}
