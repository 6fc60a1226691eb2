use super::{artifact, assert_line, catalog, lines};
use crate::catalog::VectorLength;
use crate::emit::matrix::{element_types, matrix_name};
use crate::emit::MATRIX_TYPES;

#[test]
fn half_matrices_are_not_generated() {
    let elements = element_types(catalog())
        .into_iter()
        .map(|ty| ty.name)
        .collect::<Vec<_>>();
    assert_eq!(elements, ["float", "double"]);
    assert!(!artifact(MATRIX_TYPES).contains("half"));
}

#[test]
fn names_give_column_width_then_column_count() {
    let float = catalog().get("float").unwrap();
    assert_eq!(
        matrix_name(float, VectorLength::TWO, VectorLength::FOUR),
        "float2x4"
    );
    assert_line(MATRIX_TYPES, "typedef Matrix4<float2> float2x4;");
    assert_line(
        MATRIX_TYPES,
        "inline float2x4 convert_float2x4(const double2x4& m) {return matrix4(convert_float2(m.x), convert_float2(m.y), convert_float2(m.z), convert_float2(m.w));}",
    );
}

#[test]
fn matrix_header_matches_historical_layout() {
    let lines = lines(MATRIX_TYPES);
    assert_eq!(lines.len(), 90);
    assert_eq!(
        lines[..6],
        [
            "typedef Matrix2<float2> float2x2;",
            "typedef Matrix2<double2> double2x2;",
            "",
            "typedef Matrix3<float2> float2x3;",
            "typedef Matrix3<double2> double2x3;",
            "",
        ]
    );
    let at = |line: usize| lines[line - 1];
    assert_eq!(
        at(35),
        "inline float2x3 convert_float2x3(const float2x3& m) {return m;}"
    );
    assert_eq!(
        at(36),
        "inline float2x3 convert_float2x3(const double2x3& m) {return matrix3(convert_float2(m.x), convert_float2(m.y), convert_float2(m.z));}"
    );
    assert_eq!(
        at(87),
        "inline double4x4 convert_double4x4(const float4x4& m) {return matrix4(convert_double4(m.x), convert_double4(m.y), convert_double4(m.z), convert_double4(m.w));}"
    );
    assert!(artifact(MATRIX_TYPES).ends_with("{return m;}\n\n\n"));
}
