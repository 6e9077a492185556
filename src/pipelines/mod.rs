//! Render pipelines. Pieces only need one, see [`piece`].

pub mod piece;
