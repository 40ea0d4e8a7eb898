//! Software renderer for a handful of voxel blocks and two sky billboards.
//!
//! World points go through a yaw/pitch camera transform and a unit-focal
//! pinhole projection into screen space. There is no depth buffer: blocks
//! and then each block's faces are painted farthest first, and anything
//! touching or behind the camera plane is dropped whole.

pub mod block;
pub mod camera;
pub mod celestial;
pub mod config;
pub mod depth;
pub mod draw;
pub mod face;
pub mod gizmo;
pub mod input;
pub mod math;
pub mod projection;
pub mod raster;
pub mod scene;
pub mod shading;
pub mod visibility;
