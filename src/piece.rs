//! Piece descriptors and the component attribute schema.
//!
//! A [`PieceDescriptor`] fully determines the geometry of one puzzle piece: its
//! cell in the NxN grid, its base size, extrusion depth, the four edge codes and
//! the shared texture it samples from. Descriptors are read once from the host's
//! attribute map via [`PieceDescriptor::from_attributes`] and never mutated after.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use anyhow::bail;

/// Raw component attributes as handed over by the host scene framework.
pub type Attributes = HashMap<String, String>;

pub const DEFAULT_GRID: u32 = 4;
pub const DEFAULT_SIZE: f32 = 1.0;
pub const DEFAULT_DEPTH: f32 = 0.3;
pub const DEFAULT_TEXTURE_SRC: &str = "../../images/puzzle1.jpg";

/// Shape of a single piece edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeCode {
    #[default]
    Flat,
    /// Bulges outward into the neighbouring cell.
    Tab,
    /// Recedes into the piece itself.
    Blank,
}

impl EdgeCode {
    pub const ALL: [EdgeCode; 3] = [EdgeCode::Flat, EdgeCode::Tab, EdgeCode::Blank];

    /// Map the integer code used by the attribute schema (0, 1, 2).
    ///
    /// Unknown codes draw a straight edge, same as `0`.
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => EdgeCode::Flat,
            1 => EdgeCode::Tab,
            2 => EdgeCode::Blank,
            other => {
                log::warn!("Unknown edge code {other}, drawing a flat edge instead.");
                EdgeCode::Flat
            }
        }
    }

    pub fn code(self) -> i64 {
        match self {
            EdgeCode::Flat => 0,
            EdgeCode::Tab => 1,
            EdgeCode::Blank => 2,
        }
    }

    pub fn is_flat(self) -> bool {
        self == EdgeCode::Flat
    }
}

/// The four edge codes of a piece.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Edges {
    pub top: EdgeCode,
    pub left: EdgeCode,
    pub bottom: EdgeCode,
    pub right: EdgeCode,
}

impl Edges {
    pub fn new(top: EdgeCode, left: EdgeCode, bottom: EdgeCode, right: EdgeCode) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub fn flat() -> Self {
        Self::default()
    }

    /// Every one of the 81 edge combinations, handy for exhaustive checks.
    pub fn all_combinations() -> impl Iterator<Item = Edges> {
        EdgeCode::ALL.into_iter().flat_map(|top| {
            EdgeCode::ALL.into_iter().flat_map(move |left| {
                EdgeCode::ALL.into_iter().flat_map(move |bottom| {
                    EdgeCode::ALL
                        .into_iter()
                        .map(move |right| Edges::new(top, left, bottom, right))
                })
            })
        })
    }
}

/// Everything needed to build one piece.
#[derive(Clone, Debug, PartialEq)]
pub struct PieceDescriptor {
    /// Grid position. Negative or too large values are allowed, the piece then
    /// samples outside of the puzzle image.
    pub row: i32,
    pub col: i32,
    /// Grid dimension N of the NxN puzzle.
    pub grid: u32,
    /// Base size S of a single cell.
    pub size: f32,
    pub depth: f32,
    pub edges: Edges,
    pub texture_src: String,
}

impl Default for PieceDescriptor {
    fn default() -> Self {
        Self {
            row: 0,
            col: 0,
            grid: DEFAULT_GRID,
            size: DEFAULT_SIZE,
            depth: DEFAULT_DEPTH,
            edges: Edges::default(),
            texture_src: DEFAULT_TEXTURE_SRC.to_string(),
        }
    }
}

impl PieceDescriptor {
    /**
     * Reads the component schema (`top`, `left`, `bottom`, `right`, `row`, `col`,
     * `grid`, `size`, `depth`, `textureSrc`) from the host's attribute map.
     *
     * Missing keys use the schema defaults. Values that don't parse fall back to
     * the default as well so a typo in one attribute never prevents the piece
     * from being built.
     */
    pub fn from_attributes(attributes: &Attributes) -> Self {
        let defaults = Self::default();
        let edge = |key: &str| EdgeCode::from_code(parse_or(attributes, key, 0i64));
        let edges = Edges {
            top: edge("top"),
            left: edge("left"),
            bottom: edge("bottom"),
            right: edge("right"),
        };
        Self {
            row: parse_or(attributes, "row", defaults.row),
            col: parse_or(attributes, "col", defaults.col),
            grid: parse_or(attributes, "grid", defaults.grid),
            size: parse_or(attributes, "size", defaults.size),
            depth: parse_or(attributes, "depth", defaults.depth),
            edges,
            texture_src: attributes
                .get("textureSrc")
                .map(|src| src.trim().to_string())
                .filter(|src| !src.is_empty())
                .unwrap_or(defaults.texture_src),
        }
    }

    /// Rejects descriptors that would divide by zero in the UV mapper or collapse the solid.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.grid == 0 {
            bail!("grid must be at least 1");
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            bail!("size must be a positive number, got {}", self.size);
        }
        if !self.depth.is_finite() || self.depth <= 0.0 {
            bail!("depth must be a positive number, got {}", self.depth);
        }
        let inside = 0..self.grid as i64;
        if !inside.contains(&(self.row as i64)) || !inside.contains(&(self.col as i64)) {
            // Still renderable, the UVs just leave the [0, 1] range.
            log::warn!(
                "Piece ({}, {}) lies outside of the {}x{} grid.",
                self.row,
                self.col,
                self.grid,
                self.grid
            );
        }
        Ok(())
    }

    /// Total edge length of the puzzle (`N * S`).
    pub fn puzzle_extent(&self) -> f32 {
        self.grid as f32 * self.size
    }
}

fn parse_or<T>(attributes: &Attributes, key: &str, default: T) -> T
where
    T: FromStr + Display + Copy,
{
    match attributes.get(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("Attribute {key}=\"{raw}\" is invalid, using default {default}.");
                default
            }
        },
    }
}
