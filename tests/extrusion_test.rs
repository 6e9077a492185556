use cgmath::{InnerSpace, Point2, Vector3};
use flow_jigsaw::{
    data_structures::{
        contour::ContourBuilder,
        mesh::{GroupKind, partition_groups},
    },
    generators::{
        build_rounded_triangle_mesh,
        extrude::{derive_groups, extrude, signed_area, triangulate},
        outline::build_outline,
    },
    piece::{EdgeCode, Edges},
};

use crate::common::test_utils::{all_blanks, all_tabs, assert_close};
mod common;

#[test]
fn flat_square_extrudes_to_twelve_triangles() {
    let mesh = extrude(&build_outline(1.0, &Edges::flat()), 0.3).expect("square extrudes");

    assert_eq!(mesh.vertex_count(), 36);
    assert_eq!(mesh.triangle_count(), 12);
    let counts: Vec<(GroupKind, u32)> = mesh.groups().iter().map(|g| (g.kind, g.count)).collect();
    assert_eq!(
        counts,
        vec![(GroupKind::Front, 6), (GroupKind::Sides, 24), (GroupKind::Back, 6)]
    );
}

#[test]
fn groups_partition_every_extrusion() {
    for edges in Edges::all_combinations() {
        let mesh = extrude(&build_outline(1.0, &edges), 0.3).expect("outline extrudes");
        let front = mesh.group(GroupKind::Front).expect("front group");
        let sides = mesh.group(GroupKind::Sides).expect("sides group");
        let back = mesh.group(GroupKind::Back).expect("back group");

        assert_eq!(front.count, back.count, "{:?}", edges);
        assert_eq!(
            (front.count + sides.count + back.count) as usize,
            mesh.vertex_count(),
            "{:?}",
            edges
        );
        assert_eq!(front.start, 0);
        assert_eq!(sides.start, front.count);
        assert_eq!(back.start, front.count + sides.count);
        assert_eq!(
            mesh.groups().iter().map(|g| g.material_index()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }
}

#[test]
fn derived_groups_match_the_native_ones() {
    for edges in Edges::all_combinations() {
        let contour = build_outline(1.0, &edges);
        let mesh = extrude(&contour, 0.3).expect("outline extrudes");

        let derived = derive_groups(&contour, mesh.vertex_count() as u32).expect("groups derive");
        assert_eq!(derived.as_slice(), mesh.groups(), "{:?}", edges);
    }
}

#[test]
fn derived_groups_put_the_remainder_on_the_sides() {
    let contour = build_outline(1.0, &Edges::flat());
    let groups = derive_groups(&contour, 100).expect("groups derive");
    assert_eq!(groups.map(|g| g.count), [6, 88, 6]);

    assert!(derive_groups(&contour, 10).is_err());
}

#[test]
fn partition_rejects_caps_larger_than_the_mesh() {
    assert!(partition_groups(20, 30).is_err());
    assert!(partition_groups(u32::MAX, 10).is_err());
    let groups = partition_groups(0, 12).expect("caps may be empty");
    assert_eq!(groups.map(|g| g.count), [0, 12, 0]);
}

#[test]
fn depth_leaves_the_caps_untouched() {
    for edges in [Edges::flat(), all_tabs(), all_blanks()] {
        let contour = build_outline(1.0, &edges);
        let thin = extrude(&contour, 0.1).expect("thin extrusion");
        let thick = extrude(&contour, 5.0).expect("thick extrusion");

        assert_eq!(thin.group(GroupKind::Front), thick.group(GroupKind::Front));
        assert_eq!(thin.group(GroupKind::Back), thick.group(GroupKind::Back));
        assert_eq!(thin.vertex_count(), thick.vertex_count());
    }
}

#[test]
fn caps_lie_on_their_planes_and_face_outward() {
    let depth = 0.3;
    let mesh = extrude(&build_outline(1.0, &all_tabs()), depth).expect("outline extrudes");
    let front = mesh.group(GroupKind::Front).expect("front group").range();
    let back = mesh.group(GroupKind::Back).expect("back group").range();

    for i in front {
        assert_close(mesh.positions()[i as usize][2], depth);
        assert_eq!(mesh.normals()[i as usize], [0.0, 0.0, 1.0]);
    }
    for i in back {
        assert_close(mesh.positions()[i as usize][2], 0.0);
        assert_eq!(mesh.normals()[i as usize], [0.0, 0.0, -1.0]);
    }
}

#[test]
fn front_cap_winds_counter_clockwise_and_back_cap_clockwise() {
    let mesh = extrude(&build_outline(1.0, &all_blanks()), 0.3).expect("outline extrudes");
    let winding = |triangle: &[[f32; 3]]| {
        let [a, b, c] = [triangle[0], triangle[1], triangle[2]].map(|p| Point2::new(p[0], p[1]));
        signed_area(&[a, b, c])
    };

    for triangle in mesh.group_positions(GroupKind::Front).chunks_exact(3) {
        assert!(winding(triangle) > 0.0);
    }
    for triangle in mesh.group_positions(GroupKind::Back).chunks_exact(3) {
        assert!(winding(triangle) < 0.0);
    }
}

#[test]
fn side_normals_point_away_from_the_piece() {
    let mesh = extrude(&build_outline(1.0, &Edges::flat()), 0.3).expect("square extrudes");
    let sides = mesh.group(GroupKind::Sides).expect("sides group").range();
    let centre = Vector3::new(0.5, 0.5, 0.15);

    for i in sides {
        let p = mesh.positions()[i as usize];
        let n = Vector3::from(mesh.normals()[i as usize]);
        assert_close(n.magnitude(), 1.0);
        assert_close(n.z, 0.0);
        assert!((Vector3::from(p) - centre).dot(n) > 0.0);
    }
}

#[test]
fn invalid_depth_is_rejected() {
    let contour = build_outline(1.0, &Edges::flat());
    assert!(extrude(&contour, 0.0).is_err());
    assert!(extrude(&contour, -1.0).is_err());
    assert!(extrude(&contour, f32::NAN).is_err());
}

#[test]
fn degenerate_contour_is_rejected() {
    let sliver = ContourBuilder::new(Point2::new(0.0, 0.0))
        .line_to(Point2::new(1.0, 0.0))
        .close();
    assert!(extrude(&sliver, 1.0).is_err());
}

#[test]
fn clockwise_outlines_are_triangulated_counter_clockwise() {
    let clockwise = [
        Point2::new(0.0, 0.0),
        Point2::new(0.0, 1.0),
        Point2::new(1.0, 1.0),
        Point2::new(1.0, 0.0),
    ];
    let triangles = triangulate(&clockwise);
    assert_eq!(triangles.len(), 2);
    for [a, b, c] in triangles {
        assert!(signed_area(&[clockwise[a], clockwise[b], clockwise[c]]) > 0.0);
    }
    assert!(triangulate(&clockwise[..2]).is_empty());
}

#[test]
fn rounded_triangle_extrudes_to_a_unit_solid() {
    let mesh = build_rounded_triangle_mesh(1.0).expect("preset extrudes");
    let front = mesh.group(GroupKind::Front).expect("front group");
    let back = mesh.group(GroupKind::Back).expect("back group");

    assert_eq!(front.count, back.count);
    assert!(front.count > 0);
    assert!(mesh.positions().iter().all(|p| p[2] == 0.0 || p[2] == 1.0));
}

#[test]
fn tiny_pieces_extrude_like_unit_pieces() {
    let edges = Edges::new(EdgeCode::Tab, EdgeCode::Blank, EdgeCode::Tab, EdgeCode::Blank);
    let unit = extrude(&build_outline(1.0, &edges), 0.3).expect("unit piece extrudes");

    for size in [1e-3, 1e-4, 1e-5, 1e-6] {
        let tiny = extrude(&build_outline(size, &edges), 0.3 * size)
            .unwrap_or_else(|e| panic!("size {size} failed: {e:#}"));
        assert_eq!(tiny.vertex_count(), unit.vertex_count(), "size {size}");
        assert_eq!(
            tiny.groups().iter().map(|g| g.count).collect::<Vec<_>>(),
            unit.groups().iter().map(|g| g.count).collect::<Vec<_>>(),
            "size {size}"
        );
    }
}
