use flow_jigsaw::piece::{
    Attributes, DEFAULT_DEPTH, DEFAULT_GRID, DEFAULT_SIZE, DEFAULT_TEXTURE_SRC, EdgeCode, Edges,
    PieceDescriptor,
};

use crate::common::test_utils::{attributes, piece};
mod common;

#[test]
fn empty_attributes_give_the_schema_defaults() {
    let piece = PieceDescriptor::from_attributes(&Attributes::new());

    assert_eq!(piece, PieceDescriptor::default());
    assert_eq!(piece.edges, Edges::flat());
    assert_eq!(piece.grid, DEFAULT_GRID);
    assert_eq!(piece.size, DEFAULT_SIZE);
    assert_eq!(piece.depth, DEFAULT_DEPTH);
    assert_eq!(piece.texture_src, DEFAULT_TEXTURE_SRC);
    assert!(piece.validate().is_ok());
}

#[test]
fn attributes_are_read_by_their_schema_names() {
    let piece = PieceDescriptor::from_attributes(&attributes(&[
        ("top", "1"),
        ("left", "2"),
        ("bottom", "0"),
        ("right", "1"),
        ("row", "2"),
        ("col", "3"),
        ("grid", "5"),
        ("size", "2.5"),
        ("depth", "0.5"),
        ("textureSrc", "puzzle.png"),
    ]));

    assert_eq!(
        piece.edges,
        Edges::new(EdgeCode::Tab, EdgeCode::Blank, EdgeCode::Flat, EdgeCode::Tab)
    );
    assert_eq!((piece.row, piece.col, piece.grid), (2, 3, 5));
    assert_eq!(piece.size, 2.5);
    assert_eq!(piece.depth, 0.5);
    assert_eq!(piece.texture_src, "puzzle.png");
    assert_eq!(piece.puzzle_extent(), 12.5);
}

#[test]
fn unparsable_values_fall_back_to_defaults() {
    let piece = PieceDescriptor::from_attributes(&attributes(&[
        ("row", "1.5"),
        ("grid", "four"),
        ("size", ""),
        ("depth", " 0.75 "),
        ("textureSrc", "   "),
    ]));

    assert_eq!(piece.row, 0);
    assert_eq!(piece.grid, DEFAULT_GRID);
    assert_eq!(piece.size, DEFAULT_SIZE);
    assert_eq!(piece.depth, 0.75);
    assert_eq!(piece.texture_src, DEFAULT_TEXTURE_SRC);
}

#[test]
fn unknown_edge_codes_draw_flat_edges() {
    assert_eq!(EdgeCode::from_code(3), EdgeCode::Flat);
    assert_eq!(EdgeCode::from_code(-1), EdgeCode::Flat);

    let piece = PieceDescriptor::from_attributes(&attributes(&[("top", "7"), ("right", "x")]));
    assert_eq!(piece.edges, Edges::flat());
}

#[test]
fn edge_codes_round_trip_through_their_integers() {
    for code in EdgeCode::ALL {
        assert_eq!(EdgeCode::from_code(code.code()), code);
    }
    assert!(EdgeCode::Flat.is_flat());
    assert!(!EdgeCode::Tab.is_flat());
}

#[test]
fn there_are_81_edge_combinations() {
    let all: std::collections::HashSet<Edges> = Edges::all_combinations().collect();
    assert_eq!(all.len(), 81);
}

#[test]
fn validation_rejects_unbuildable_pieces() {
    let zero_grid = PieceDescriptor {
        grid: 0,
        ..Default::default()
    };
    assert!(zero_grid.validate().is_err());

    for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
        let piece = PieceDescriptor {
            size,
            ..Default::default()
        };
        assert!(piece.validate().is_err(), "size {size} accepted");
    }
    for depth in [0.0, -0.3, f32::NAN] {
        let piece = PieceDescriptor {
            depth,
            ..Default::default()
        };
        assert!(piece.validate().is_err(), "depth {depth} accepted");
    }
}

#[test]
fn pieces_outside_the_grid_are_still_buildable() {
    assert!(piece(4, 7, Edges::flat()).validate().is_ok());
    assert!(piece(-1, 0, Edges::flat()).validate().is_ok());
}

#[test]
fn negative_grid_positions_are_kept() {
    let piece = PieceDescriptor::from_attributes(&attributes(&[("row", "-1"), ("col", "-2")]));

    assert_eq!((piece.row, piece.col), (-1, -2));
    assert!(piece.validate().is_ok());
}
