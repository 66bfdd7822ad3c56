//! DXF serialisation: polylines → minimal HEADER/ENTITIES/EOF document.
//!
//! Emits the smallest DXF subset (AC1009-era) that downstream CAD readers
//! accept for closed polylines: a HEADER with a version tag and drawing
//! extents, one POLYLINE entity per figure with its VERTEX records and a
//! SEQEND, then ENDSEC and EOF. Field order within a record is significant;
//! readers consume code/value line pairs positionally, so the grammar here
//! must be reproduced byte for byte.
//!
//! The declared extents are the static box `(0,0)-(1000,1000)`, never
//! computed from the actual geometry. Readers that trust `$EXTMIN`/`$EXTMAX`
//! for an initial zoom will frame that box rather than the drawing; the
//! entity coordinates themselves are exact.

use crate::geometry::Polyline;

/// Serialise polylines as a DXF document.
///
/// Every polyline is written as a *closed* figure on the single `layer`
/// with ACI colour `color`, in input order. Callers must exclude polylines
/// with fewer than 2 points before this stage; serialisation assumes all
/// inputs are valid.
///
/// Coordinates are written in Rust's default `f64` decimal form, which
/// round-trips back to the same double.
pub fn serialize(polylines: &[Polyline], layer: &str, color: i16) -> String {
    let mut out = String::new();

    write_header(&mut out);

    out.push_str("0\nSECTION\n2\nENTITIES\n");
    for polyline in polylines {
        write_polyline(&mut out, polyline, layer, color);
    }
    out.push_str("0\nENDSEC\n0\nEOF\n");

    out
}

/// Fixed HEADER section: format version tag and static drawing extents.
fn write_header(out: &mut String) {
    out.push_str("0\nSECTION\n2\nHEADER\n");
    out.push_str("9\n$ACADVER\n1\nAC1009\n");
    out.push_str("9\n$EXTMIN\n10\n0\n20\n0\n");
    out.push_str("9\n$EXTMAX\n10\n1000\n20\n1000\n");
    out.push_str("0\nENDSEC\n");
}

/// One closed POLYLINE entity: header record, vertex records, SEQEND.
fn write_polyline(out: &mut String, polyline: &Polyline, layer: &str, color: i16) {
    out.push_str("0\nPOLYLINE\n");
    out.push_str(&format!("8\n{layer}\n"));
    out.push_str(&format!("62\n{color}\n"));
    // 70/1 marks the polyline closed; 66/1 announces the vertex sequence.
    out.push_str("70\n1\n");
    out.push_str("10\n0\n20\n0\n");
    out.push_str("66\n1\n");

    for point in polyline {
        out.push_str("0\nVERTEX\n");
        out.push_str(&format!("8\n{layer}\n"));
        out.push_str(&format!("10\n{}\n", point.x));
        out.push_str(&format!("20\n{}\n", point.y));
        out.push_str("70\n0\n");
    }

    out.push_str("0\nSEQEND\n");
    out.push_str(&format!("8\n{layer}\n"));
}
