//! Mesh building tests on parsed .lineobj text

use lineobj_mesh::{MeshBuilder, MeshTopology, build_mesh, combine_meshes};
use lineobj_text::LineObjParser;

fn build_single(text: &str) -> lineobj_mesh::MeshBuffers {
    let doc = LineObjParser::new()
        .parse_str(text)
        .expect("valid input")
        .into_document();
    build_mesh(doc.first().expect("one group"))
}

/// Test the single triangle example
#[test]
fn test_single_triangle() {
    let mesh = build_single("v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");

    assert_eq!(
        mesh.vertices(),
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]]
    );
    assert_eq!(mesh.triangle_indices(), &[0, 1, 2]);
    assert!(mesh.line_indices().is_empty());

    let bounds = mesh.bounds().unwrap();
    assert_eq!(bounds.min(), [0.0, 0.0, 0.0]);
    assert_eq!(bounds.max(), [1.0, 1.0, 0.0]);
}

/// Test the single edge example
#[test]
fn test_single_edge() {
    let mesh = build_single("v 0 0 0\nv 2 0 0\nl 1 2\n");
    assert_eq!(mesh.line_indices(), &[0, 1]);
    assert!(mesh.triangle_indices().is_empty());

    let [tris, lines] = mesh.sub_meshes();
    assert!(tris.is_empty());
    assert_eq!(lines.topology, MeshTopology::Lines);
    assert_eq!(lines.primitive_count(), 1);
}

/// Test that the rejected quad leaves no triangles behind
#[test]
fn test_rejected_quad_builds_nothing() {
    let mesh = build_single("v 0 0 0\nv 1 0 0\nv 1 1 0\nv 0 1 0\nf 1 2 3 4\n");
    assert_eq!(mesh.vertex_count(), 4);
    assert!(mesh.triangle_indices().is_empty());
}

/// Test combining two two-vertex groups with one edge each
#[test]
fn test_combine_two_groups() {
    let text = "o a\nv 0 0 0\nv 1 0 0\nl 1 2\no b\nv 0 0 1\nv 1 0 1\nl 1 2\n";
    let doc = LineObjParser::new().parse_str(text).unwrap().into_document();

    let meshes: Vec<_> = doc.groups().map(build_mesh).collect();
    let merged = combine_meshes(&meshes).unwrap();

    assert_eq!(merged.vertex_count(), 4);
    assert_eq!(merged.line_indices(), &[0, 1, 2, 3]);
    assert_eq!(
        merged.lines().collect::<Vec<_>>(),
        vec![
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]],
            [[0.0, 0.0, 1.0], [1.0, 0.0, 1.0]]
        ]
    );
}

/// Test that reordering inputs changes index values but not geometry
#[test]
fn test_combine_order_changes_indices_only() {
    let text = "o tri\nv 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\no wire\nv 5 5 5\nv 6 6 6\nl 2 1\n";
    let doc = LineObjParser::new().parse_str(text).unwrap().into_document();
    let meshes: Vec<_> = doc.groups().map(build_mesh).collect();

    let builder = MeshBuilder::new();
    let forward = builder.combine(&meshes).unwrap();
    let reversed: Vec<_> = meshes.iter().rev().cloned().collect();
    let backward = builder.combine(&reversed).unwrap();

    assert_eq!(forward.line_indices(), &[4, 3]);
    assert_eq!(backward.line_indices(), &[1, 0]);
    assert_eq!(
        forward.lines().collect::<Vec<_>>(),
        backward.lines().collect::<Vec<_>>()
    );
    assert_eq!(
        forward.triangles().collect::<Vec<_>>(),
        backward.triangles().collect::<Vec<_>>()
    );
}
