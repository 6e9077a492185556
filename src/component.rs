//! Host adapter.
//!
//! The host calls [`Component::init`] once per scene node with the node's
//! attribute map. The component builds its mesh, binds materials, uploads the
//! result and attaches it under [`MESH_SLOT`]. Nothing is returned to the host:
//! a piece that can't be built is logged and the slot stays empty.

use crate::{
    binder::MaterialBinder,
    context::Context,
    data_structures::{
        material::SIDE_COLOUR,
        model::PieceModel,
        scene_graph::{MESH_SLOT, SceneNode},
    },
    generators::{build_piece_mesh, build_rounded_triangle_mesh, uv::UvOptions},
    piece::{Attributes, PieceDescriptor},
    resources::mesh::upload_piece,
};

pub trait Component {
    /// Name the host registers the component under.
    fn name(&self) -> &'static str;

    /// Build the renderable described by `attributes`.
    fn build(&self, attributes: &Attributes, ctx: &Context) -> anyhow::Result<PieceModel>;

    /// Lifecycle hook: build and attach under [`MESH_SLOT`], logging instead of failing.
    fn init(&self, node: &mut dyn SceneNode, attributes: &Attributes, ctx: &Context) {
        match self.build(attributes, ctx) {
            Ok(model) => node.set_object(MESH_SLOT, model),
            Err(e) => log::error!("{} was not built: {:#}", self.name(), e),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PuzzlePieceComponent {
    pub uv_options: UvOptions,
}

impl PuzzlePieceComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uv_options(uv_options: UvOptions) -> Self {
        Self { uv_options }
    }

    /// Same as [`Component::build`] for an already parsed descriptor.
    pub fn build_descriptor(&self, piece: &PieceDescriptor, ctx: &Context) -> anyhow::Result<PieceModel> {
        let mesh = build_piece_mesh(piece, &self.uv_options)?;
        let materials = MaterialBinder::new(ctx).bind_piece(ctx, &piece.texture_src);
        let name = format!("piece ({}, {})", piece.row, piece.col);
        upload_piece(&ctx.device, &name, &mesh, materials)
    }
}

impl Component for PuzzlePieceComponent {
    fn name(&self) -> &'static str {
        "puzzle-piece"
    }

    fn build(&self, attributes: &Attributes, ctx: &Context) -> anyhow::Result<PieceModel> {
        let piece = PieceDescriptor::from_attributes(attributes);
        self.build_descriptor(&piece, ctx)
    }
}

/// Fixed rounded-triangle shape, flat coloured. Takes no attributes.
#[derive(Clone, Copy, Debug)]
pub struct RoundedTriangleComponent {
    pub depth: f32,
    pub colour: u32,
}

impl Default for RoundedTriangleComponent {
    fn default() -> Self {
        Self {
            depth: 1.0,
            colour: SIDE_COLOUR,
        }
    }
}

impl Component for RoundedTriangleComponent {
    fn name(&self) -> &'static str {
        "rounded-triangle"
    }

    fn build(&self, _: &Attributes, ctx: &Context) -> anyhow::Result<PieceModel> {
        let mesh = build_rounded_triangle_mesh(self.depth)?;
        let materials = MaterialBinder::new(ctx).bind_flat(ctx, self.colour);
        upload_piece(&ctx.device, self.name(), &mesh, materials)
    }
}
