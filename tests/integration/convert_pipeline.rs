#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use evlp2boel::convert::{run_convert, ConvertConfig};
use evlp2boel::encode::encode;
use evlp2boel::error::ConvertError;
use evlp2boel::ingest::Directedness;
use evlp2boel::table::VertexTable;

fn setup_graph(vertices: &str, edges: &str) -> (TempDir, ConvertConfig) {
    let dir = TempDir::new().expect("tempdir");
    let vertex_path = dir.path().join("g.v");
    let edge_path = dir.path().join("g.e");
    fs::write(&vertex_path, vertices).expect("write vertex file");
    fs::write(&edge_path, edges).expect("write edge file");
    let cfg = ConvertConfig {
        vertex_path,
        edge_path,
        output_path: dir.path().join("g.boel"),
        vertex_count_hint: 16,
        directedness: Directedness::Directed,
    };
    (dir, cfg)
}

/// Test-only reader for the output format: scans records until end-of-file.
fn decode(path: &Path) -> Vec<(i64, Vec<i64>)> {
    let bytes = fs::read(path).expect("read output");
    let mut records = Vec::new();
    let mut off = 0;
    while off < bytes.len() {
        let id = i64::from_be_bytes(bytes[off..off + 8].try_into().unwrap());
        off += 8;
        let count = i32::from_be_bytes(bytes[off..off + 4].try_into().unwrap());
        off += 4;
        assert!(count >= 0, "negative neighbor count in record");
        let mut neighbors = Vec::with_capacity(count as usize);
        for _ in 0..count {
            neighbors.push(i64::from_be_bytes(bytes[off..off + 8].try_into().unwrap()));
            off += 8;
        }
        records.push((id, neighbors));
    }
    records
}

fn decode_sorted(path: &Path) -> Vec<(i64, Vec<i64>)> {
    let mut records = decode(path);
    records.sort_by_key(|(id, _)| *id);
    records
}

#[test]
fn directed_scenario_produces_expected_records() {
    let (_dir, cfg) = setup_graph("1\n2\n3\n", "1 2\n2 3\n");
    let summary = run_convert(&cfg, &mut ()).unwrap();
    assert_eq!(summary.vertices, 3);
    assert_eq!(summary.edges, 2);
    assert_eq!(
        decode_sorted(&cfg.output_path),
        vec![(1, vec![2]), (2, vec![3]), (3, vec![])]
    );
}

#[test]
fn undirected_scenario_records_reverse_edges() {
    let (_dir, mut cfg) = setup_graph("1\n2\n3\n", "1 2\n");
    cfg.directedness = Directedness::Undirected;
    let summary = run_convert(&cfg, &mut ()).unwrap();
    assert_eq!(summary.edges, 1);
    assert_eq!(
        decode_sorted(&cfg.output_path),
        vec![(1, vec![2]), (2, vec![1]), (3, vec![])]
    );
}

#[test]
fn properties_and_duplicate_vertices_are_ignored() {
    let (_dir, cfg) = setup_graph(
        "1 color=red weight=3\n2 color=blue\n1 color=green\n3\n",
        "1 2 0.25\n1 2 0.75\n",
    );
    let summary = run_convert(&cfg, &mut ()).unwrap();
    assert_eq!(summary.vertices, 3);
    // Parallel edges are kept in edge-file order.
    assert_eq!(
        decode_sorted(&cfg.output_path),
        vec![(1, vec![2, 2]), (2, vec![]), (3, vec![])]
    );
}

#[test]
fn isolated_percentage_is_reported() {
    let (_dir, cfg) = setup_graph("1\n2\n3\n4\n", "1 2\n");
    let summary = run_convert(&cfg, &mut ()).unwrap();
    assert_eq!(summary.isolated_pct, 75.0);
}

#[test]
fn undeclared_edge_source_aborts_without_output() {
    let (_dir, cfg) = setup_graph("1\n2\n", "5 1\n");
    let err = run_convert(&cfg, &mut ()).unwrap_err();
    assert!(matches!(err, ConvertError::MissingVertex(5)));
    assert!(
        !cfg.output_path.exists(),
        "edge pass failure must precede any output"
    );
}

#[test]
fn malformed_vertex_line_aborts_the_run() {
    let (_dir, cfg) = setup_graph("1\nnope 2\n", "");
    let err = run_convert(&cfg, &mut ()).unwrap_err();
    assert!(matches!(err, ConvertError::MalformedLine { line: 2, .. }));
}

#[test]
fn existing_output_is_left_untouched() {
    let (_dir, cfg) = setup_graph("1\n", "");
    fs::write(&cfg.output_path, b"do not clobber").unwrap();
    let err = run_convert(&cfg, &mut ()).unwrap_err();
    assert!(matches!(err, ConvertError::OutputExists(_)));
    assert_eq!(fs::read(&cfg.output_path).unwrap(), b"do not clobber");
}

#[test]
fn missing_vertex_file_surfaces_open_error() {
    let dir = TempDir::new().unwrap();
    let cfg = ConvertConfig {
        vertex_path: dir.path().join("absent.v"),
        edge_path: dir.path().join("absent.e"),
        output_path: dir.path().join("absent.boel"),
        vertex_count_hint: 0,
        directedness: Directedness::Directed,
    };
    let err = run_convert(&cfg, &mut ()).unwrap_err();
    assert!(matches!(err, ConvertError::OpenInput { .. }));
}

fn adjacency_strategy() -> impl Strategy<Value = Vec<(i64, Vec<i64>)>> {
    proptest::collection::hash_map(
        any::<i64>(),
        proptest::collection::vec(any::<i64>(), 0..8),
        0..32,
    )
    .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn encode_decode_roundtrip(records in adjacency_strategy()) {
        let dir = TempDir::new().unwrap();
        let out: PathBuf = dir.path().join("prop.boel");

        let mut table = VertexTable::with_capacity(records.len());
        for (id, neighbors) in &records {
            table.ensure_vertex(*id);
            for n in neighbors {
                table.append_neighbor(*id, *n).unwrap();
            }
        }
        encode(table, &out).unwrap();

        let mut decoded = decode(&out);
        decoded.sort_by_key(|(id, _)| *id);
        let mut expected = records;
        expected.sort_by_key(|(id, _)| *id);
        prop_assert_eq!(decoded, expected);
    }
}
