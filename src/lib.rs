//! flow-jigsaw
//!
//! Procedural jigsaw puzzle pieces for wgpu scenes. A piece is described by its
//! four edge shapes and its position in the puzzle grid; from that the crate
//! builds the outline, extrudes it into a solid, maps the shared puzzle image
//! onto its front face and binds one material per face group.
//!
//! High-level modules
//! - `piece`: piece descriptors and their parsing from host attributes
//! - `generators`: CPU geometry (outline, extrusion, UVs)
//! - `data_structures`: contours, meshes, textures, materials and scene nodes
//! - `binder`: per-group materials and background texture loading
//! - `resources`: file loading and GPU upload helpers
//! - `pipelines`: the render pipeline pieces are drawn with
//! - `context`: device, queue and async runtime
//! - `component`: the host adapter attaching built pieces to scene nodes
//!

pub mod binder;
pub mod component;
pub mod context;
pub mod data_structures;
pub mod generators;
pub mod piece;
pub mod pipelines;
pub mod resources;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath;
pub use wgpu;
