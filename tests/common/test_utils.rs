#![allow(dead_code)]

use flow_jigsaw::piece::{Attributes, EdgeCode, Edges, PieceDescriptor};

pub const EPSILON: f32 = 1e-5;

pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub fn assert_uv(actual: [f32; 2], expected: [f32; 2]) {
    assert!(
        (actual[0] - expected[0]).abs() <= EPSILON && (actual[1] - expected[1]).abs() <= EPSILON,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

pub fn attributes(pairs: &[(&str, &str)]) -> Attributes {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A piece of the default 4x4 unit puzzle.
pub fn piece(row: i32, col: i32, edges: Edges) -> PieceDescriptor {
    PieceDescriptor {
        row,
        col,
        edges,
        ..Default::default()
    }
}

pub fn all_tabs() -> Edges {
    Edges::new(EdgeCode::Tab, EdgeCode::Tab, EdgeCode::Tab, EdgeCode::Tab)
}

pub fn all_blanks() -> Edges {
    Edges::new(EdgeCode::Blank, EdgeCode::Blank, EdgeCode::Blank, EdgeCode::Blank)
}

#[cfg(feature = "integration-tests")]
pub fn test_context() -> flow_jigsaw::context::Context {
    flow_jigsaw::context::init_logger();
    futures::executor::block_on(flow_jigsaw::context::Context::headless())
        .expect("no adapter available for the GPU tests")
}

/// Poll `condition` until it holds or roughly two seconds have passed.
#[cfg(feature = "integration-tests")]
pub fn wait_for(condition: impl Fn() -> bool) -> bool {
    for _ in 0..200 {
        if condition() {
            return true;
        }
        std::thread::sleep(std::time::Duration::from_millis(10));
    }
    condition()
}
