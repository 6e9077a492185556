//! Piece data structures: contours, meshes, textures, materials and scene nodes.
//!
//! - `contour` holds 2D outline paths made of lines and Bezier curves
//! - `mesh` is the CPU side triangle soup with its material groups
//! - `texture` wraps GPU textures and samplers
//! - `material` pairs a group with its texture or flat colour
//! - `model` is an uploaded mesh ready to draw
//! - `instance` holds the per-instance transform
//! - `scene_graph` is the node interface pieces attach to

pub mod contour;
pub mod instance;
pub mod material;
pub mod mesh;
pub mod model;
pub mod scene_graph;
pub mod texture;
