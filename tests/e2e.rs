//! End-to-end integration tests for svg2dxf.
//!
//! The pipeline is pure (string in, string out), so unlike network-bound
//! converters nothing here needs gating or fixtures — every test runs
//! unconditionally on inline markup.

use svg2dxf::pipeline::{cleanup, flatten, repair, tokenize};
use svg2dxf::{convert, convert_to_file, ConversionConfig, PathErrorPolicy, Point};

// ── Test helpers ─────────────────────────────────────────────────────────────

fn convert_default(markup: &str) -> svg2dxf::ConversionOutput {
    convert(markup, &ConversionConfig::default()).expect("conversion should succeed")
}

/// Assert the document passes basic structural checks.
fn assert_dxf_well_formed(dxf: &str, context: &str) {
    assert!(
        dxf.starts_with("0\nSECTION\n2\nHEADER\n"),
        "[{context}] document must open with the HEADER section"
    );
    assert!(
        dxf.contains("9\n$ACADVER\n1\nAC1009\n"),
        "[{context}] HEADER must declare the version tag"
    );
    assert!(
        dxf.contains("0\nSECTION\n2\nENTITIES\n"),
        "[{context}] document must contain an ENTITIES section"
    );
    assert!(
        dxf.ends_with("0\nENDSEC\n0\nEOF\n"),
        "[{context}] document must close with ENDSEC and EOF"
    );
    // Every POLYLINE is paired with a SEQEND.
    assert_eq!(
        dxf.matches("0\nPOLYLINE\n").count(),
        dxf.matches("0\nSEQEND\n").count(),
        "[{context}] POLYLINE/SEQEND records must pair up"
    );
}

fn entity_count(dxf: &str) -> usize {
    dxf.matches("0\nPOLYLINE\n").count()
}

// ── Spec scenarios ───────────────────────────────────────────────────────────

#[test]
fn square_path_one_entity_four_vertices() {
    let out = convert_default(r#"<path d="M0 0 L10 0 L10 10 L0 10 Z"/>"#);
    assert_dxf_well_formed(&out.dxf, "square");
    assert_eq!(entity_count(&out.dxf), 1);

    let expected = "0\nSECTION\n2\nHEADER\n\
                    9\n$ACADVER\n1\nAC1009\n\
                    9\n$EXTMIN\n10\n0\n20\n0\n\
                    9\n$EXTMAX\n10\n1000\n20\n1000\n\
                    0\nENDSEC\n\
                    0\nSECTION\n2\nENTITIES\n\
                    0\nPOLYLINE\n8\nsymbols\n62\n7\n70\n1\n10\n0\n20\n0\n66\n1\n\
                    0\nVERTEX\n8\nsymbols\n10\n0\n20\n0\n70\n0\n\
                    0\nVERTEX\n8\nsymbols\n10\n10\n20\n0\n70\n0\n\
                    0\nVERTEX\n8\nsymbols\n10\n10\n20\n10\n70\n0\n\
                    0\nVERTEX\n8\nsymbols\n10\n0\n20\n10\n70\n0\n\
                    0\nSEQEND\n8\nsymbols\n\
                    0\nENDSEC\n0\nEOF\n";
    assert_eq!(out.dxf, expected, "square document must be byte-exact");
}

#[test]
fn markup_without_paths_yields_empty_entities_section() {
    let out = convert_default(r#"<svg width="100" height="100"><rect x="1"/></svg>"#);
    assert_dxf_well_formed(&out.dxf, "no-paths");
    assert_eq!(entity_count(&out.dxf), 0);
    assert!(out
        .dxf
        .contains("0\nSECTION\n2\nENTITIES\n0\nENDSEC\n0\nEOF\n"));
}

#[test]
fn glued_path_tag_is_repaired_and_converted() {
    let out = convert_default(r#"<pathd="M0 0L5 5"/>"#);
    assert_eq!(out.stats.paths_found, 1);
    assert_eq!(entity_count(&out.dxf), 1);
    assert_eq!(out.stats.total_vertices, 2);
    assert!(out.dxf.contains("10\n5\n20\n5\n"));
}

#[test]
fn cubic_curve_raw_sampling_is_exact() {
    let commands = tokenize::tokenize("M0 0 C0 10 10 10 10 0").unwrap();
    let raw = flatten::flatten(&commands, 100);
    assert_eq!(raw.len(), 102, "move + 101 samples");
    assert_eq!(raw[101], Point::new(10.0, 0.0), "endpoint must be literal");
}

#[test]
fn degenerate_path_contributes_zero_entities() {
    let out = convert_default(
        r#"<svg>
            <path d="M5 5"/>
            <path d="M0 0 L10 0 L10 10 L0 10"/>
        </svg>"#,
    );
    assert_eq!(out.stats.paths_found, 2);
    assert_eq!(entity_count(&out.dxf), 1);
    assert_eq!(out.stats.paths_skipped, 1);
}

// ── Testable properties ──────────────────────────────────────────────────────

#[test]
fn repair_is_idempotent_on_clean_markup() {
    let samples = [
        r#"<svg width="100"><path d="M0 0 L1 1"/></svg>"#,
        r#"<path d="M0 0 C0 10 10 10 10 0" style="fill:none"/>"#,
        "",
        "plain text with no markup",
    ];
    for s in samples {
        let once = repair::repair_markup(s);
        let twice = repair::repair_markup(&once);
        assert_eq!(once, twice, "repair must be idempotent for {s:?}");
    }
}

#[test]
fn curve_endpoint_exact_for_arbitrary_steps() {
    for steps in [1, 2, 3, 7, 100, 1000] {
        let commands = tokenize::tokenize("M1 1 C2 9 8 9 9.3 1.7").unwrap();
        let raw = flatten::flatten(&commands, steps);
        assert_eq!(
            *raw.last().unwrap(),
            Point::new(9.3, 1.7),
            "endpoint drifted at steps={steps}"
        );
    }
}

#[test]
fn cleanup_never_expands_and_zero_tol_keeps_distinct() {
    let commands = tokenize::tokenize("M0 0 C0 10 10 10 10 0 L10 0 L20 0").unwrap();
    let raw = flatten::flatten(&commands, 100);
    for tol in [0.0, 0.001, 0.05, 1.0, 100.0] {
        let out = cleanup::cleanup(raw.clone(), tol);
        assert!(out.len() <= raw.len(), "cleanup expanded at tol={tol}");
    }
    // tol = 0: only exact adjacent duplicates go — here the curve's t=0
    // sample (equal to the move) and the repeated line start.
    let out = cleanup::cleanup(raw.clone(), 0.0);
    assert_eq!(out.len(), raw.len() - 2);
}

#[test]
fn entity_count_matches_retained_paths() {
    let markup = r#"
        <path d="M0 0 L10 0 L10 10"/>
        <path d="M5 5"/>
        <path d="M0 0 C0 10 10 10 10 0"/>
        <path d="M1 1 L1.0001 1"/>
    "#;
    let out = convert_default(markup);
    // Paths 1 and 3 survive; path 2 is a single point and path 4 collapses
    // to one vertex under the default tolerance.
    let retained = out.paths.iter().filter(|r| r.emitted).count();
    assert_eq!(entity_count(&out.dxf), retained);
    assert_eq!(retained, 2);
}

#[test]
fn records_report_vertex_counts() {
    let out = convert_default(r#"<path d="M0 0 L10 0 L10 10 L0 10"/>"#);
    assert_eq!(out.paths.len(), 1);
    assert_eq!(out.paths[0].vertices, 4);
    assert!(out.paths[0].emitted);
    assert!(out.paths[0].error.is_none());
    assert_eq!(out.stats.total_vertices, 4);
}

// ── Error-policy split ───────────────────────────────────────────────────────

#[test]
fn skip_policy_converts_remaining_paths() {
    let markup = r#"<path d="M0 0 L oops"/><path d="M0 0 L10 0 L10 10"/>"#;
    let out = convert_default(markup);
    assert_eq!(out.stats.paths_failed, 1);
    assert_eq!(entity_count(&out.dxf), 1);
    assert!(matches!(
        out.paths[0].error,
        Some(svg2dxf::PathError::Syntax { index: 0, .. })
    ));
}

#[test]
fn abort_policy_returns_no_partial_document() {
    let config = ConversionConfig::builder()
        .on_path_error(PathErrorPolicy::Abort)
        .build()
        .unwrap();
    let markup = r#"<path d="M0 0 L10 0"/><path d="M0 0 L oops"/>"#;
    let err = convert(markup, &config).unwrap_err();
    assert!(matches!(
        err,
        svg2dxf::Svg2DxfError::PathSyntax { index: 1, .. }
    ));
}

// ── Configuration effects ────────────────────────────────────────────────────

#[test]
fn custom_layer_and_color_reach_every_record() {
    let config = ConversionConfig::builder()
        .layer("cut")
        .color(3)
        .build()
        .unwrap();
    let out = convert(r#"<path d="M0 0 L10 0 L10 10"/>"#, &config).unwrap();
    assert!(out.dxf.contains("0\nPOLYLINE\n8\ncut\n62\n3\n"));
    assert!(out.dxf.contains("0\nVERTEX\n8\ncut\n"));
    assert!(out.dxf.contains("0\nSEQEND\n8\ncut\n"));
}

#[test]
fn coarser_steps_reduce_vertex_count() {
    let markup = r#"<path d="M0 0 C0 10 10 10 10 0"/>"#;
    let fine = convert_default(markup);
    let coarse_config = ConversionConfig::builder().curve_steps(4).build().unwrap();
    let coarse = convert(markup, &coarse_config).unwrap();
    assert!(coarse.stats.total_vertices < fine.stats.total_vertices);
    // Both keep the exact curve endpoint.
    assert!(coarse.dxf.contains("10\n10\n20\n0\n"));
    assert!(fine.dxf.contains("10\n10\n20\n0\n"));
}

// ── File round-trip ──────────────────────────────────────────────────────────

#[test]
fn file_output_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("nested/drawing.dxf");
    let stats = convert_to_file(
        r#"<path d="M0 0 L10 0 L10 10 L0 10 Z"/>"#,
        &out_path,
        &ConversionConfig::default(),
    )
    .unwrap();
    assert_eq!(stats.polylines_emitted, 1);

    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_dxf_well_formed(&written, "file round-trip");
    assert_eq!(entity_count(&written), 1);
}

#[test]
fn output_records_serialise_to_json() {
    let out = convert_default(r#"<path d="M0 0 L10 0 L10 10"/>"#);
    let json = serde_json::to_string_pretty(&out).unwrap();
    assert!(json.contains("\"polylines_emitted\": 1"));
    assert!(json.contains("\"emitted\": true"));
    let back: svg2dxf::ConversionOutput = serde_json::from_str(&json).unwrap();
    assert_eq!(back.dxf, out.dxf);
}
