use super::{artifact, assert_line, catalog, lines, PrettyString};
use crate::catalog::VectorLength;
use crate::conversion::ConversionVariant;
use crate::decl::{Item, Style};
use crate::emit::{self, TYPES_DEFINE, TYPES_UNDEF, VECTOR_TYPES, VECTOR_TYPES_DECL};
use crate::Generator;

#[test]
fn scalar_macros() {
    assert_eq!(
        PrettyString(artifact(TYPES_DEFINE)),
        PrettyString(
            "#define byte int8_t
#define ubyte uint8_t
#define short int16_t
#define ushort uint16_t
#define int int32_t
#define uint uint32_t
#define long int64_t
#define ulong uint64_t
"
        )
    );
    let undef = lines(TYPES_UNDEF);
    assert_eq!(undef.len(), 8);
    assert_eq!(undef[0], "#undef byte");
    assert_eq!(undef[7], "#undef ulong");
}

#[test]
fn typedef_layout() {
    let lines = lines(VECTOR_TYPES);
    // The scalar length has no typedefs, only its separator.
    assert_eq!(lines[0], "");
    assert_eq!(lines[1], "typedef Vector2<bool> bool2;");
    assert_eq!(lines[12], "typedef Vector2<double> double2;");
    assert_eq!(lines[13], "");
    assert_eq!(lines[39], "");
    assert_eq!(lines[40], "typedef bool2 packed_bool2;");
    assert_eq!(lines[78], "");
    assert_eq!(
        lines[79],
        "template <typename T0, typename T1> bool2 make_bool2(T0 x, T1 y) {return vector2(bool(x), bool(y));}"
    );
    assert_eq!(
        lines[80],
        "template <typename T0, typename T1> byte2 make_byte2(T0 x, T1 y) {return vector2(int8_t(x), int8_t(y));}"
    );
    assert_eq!(
        lines[116],
        "template <typename T0, typename T1, typename T2, typename T3> double4 make_double4(T0 x, T1 y, T2 z, T3 w) {return vector4(double(x), double(y), double(z), double(w));}"
    );
    // Then the scalar `convert_` group, opened by the empty `bool` destination.
    assert_eq!(lines[117], "");
    assert_eq!(lines[118], "");
    assert_eq!(lines[119], "inline int8_t convert_byte(bool v) {return int8_t(v);}");
    assert_eq!(lines[120], "inline int8_t convert_byte(int8_t v) {return v;}");
}

#[test]
fn vector_header_matches_historical_layout() {
    let lines = lines(VECTOR_TYPES);
    assert_eq!(lines.len(), 1526);
    let at = |line: usize| lines[line - 1];
    assert_eq!(
        at(387),
        "inline float2 convert_float2(int2 v) {return vector2(float(v.x), float(v.y));}"
    );
    assert_eq!(
        at(700),
        "inline int8_t convert_byte_rte(half v) {return rint<int8_t>(v);}"
    );
    assert_eq!(
        at(862),
        "inline uint8_t convert_ubyte_sat(int16_t v) {return clamp_rtz(v, std::numeric_limits<uint8_t>::min(), std::numeric_limits<uint8_t>::max());}"
    );
    assert_eq!(
        at(884),
        "inline uint16_t convert_ushort_sat(int8_t v) {return convert_ushort(v);}"
    );
    assert_eq!(
        at(901),
        "inline int32_t convert_int_sat(uint32_t v) {return min_rtz(v, std::numeric_limits<int32_t>::max());}"
    );
    assert_eq!(
        at(912),
        "inline uint32_t convert_uint_sat(int32_t v) {return max_rtz(v, uint32_t(0));}"
    );
    assert_eq!(
        at(1100),
        "inline int3 convert_int3_sat(short3 v) {return convert_int3(v);}"
    );
    assert_eq!(
        at(1253),
        "inline int8_t convert_byte_sat_rte(float v) {return clamp_rte(v, std::numeric_limits<int8_t>::min(), std::numeric_limits<int8_t>::max());}"
    );
    assert_eq!(
        at(1521),
        "inline float4 as_float4(int4 v) {return *(float4*)&v;}"
    );
    assert!(artifact(VECTOR_TYPES)
        .ends_with("inline double4 as_double4(ulong4 v) {return *(double4*)&v;}\n\n"));
}

#[test]
fn declarations_header() {
    let decl = lines(VECTOR_TYPES_DECL);
    assert!(decl.iter().all(|line| !line.starts_with("inline ")));
    assert!(decl.iter().all(|line| !line.contains("make_")));
    assert_line(
        VECTOR_TYPES_DECL,
        "uint8_t convert_ubyte_sat(int16_t v);",
    );
    assert_line(VECTOR_TYPES_DECL, "float4 as_float4(int4 v);");
    assert_line(VECTOR_TYPES_DECL, "int3 convert_int3_sat_rte(double3 v);");

    // Same functions in the same order as the definitions.
    let definitions = lines(VECTOR_TYPES)
        .into_iter()
        .filter(|line| line.starts_with("inline "))
        .count();
    let declarations = decl.iter().filter(|line| !line.is_empty()).count();
    assert_eq!(declarations, definitions);
}

#[test]
fn every_convert_function_is_emitted_once() {
    let artifacts = emit::vector::emit(catalog());
    let definitions = artifacts
        .iter()
        .find(|artifact| artifact.name == VECTOR_TYPES)
        .unwrap();
    assert_eq!(definitions.style, Style::Definitions);

    // 11 non-bool destinations from 12 sources, at 4 lengths.
    let plain = definitions
        .functions()
        .filter(|function| {
            function.name.starts_with("convert_")
                && !function.name.ends_with("_rte")
                && !function.name.ends_with("_sat")
        })
        .count();
    assert_eq!(plain, 11 * 12 * 4);

    // 8 integer destinations from 3 floating sources, at 4 lengths.
    let sat_rte = definitions
        .functions()
        .filter(|function| function.name.ends_with("_sat_rte"))
        .count();
    assert_eq!(sat_rte, 8 * 3 * 4);

    let double = catalog().get("double").unwrap();
    let as_double = ConversionVariant::Reinterpret.function_name(double, VectorLength::SCALAR);
    let as_double = definitions
        .functions()
        .filter(|function| function.name == as_double)
        .map(|function| function.params[0].ty.as_str())
        .collect::<Vec<_>>();
    assert_eq!(as_double, ["int64_t", "uint64_t"]);
}

#[test]
fn bool_destinations_leave_empty_groups() {
    let artifacts = emit::vector::emit(catalog());
    let decl = artifacts
        .iter()
        .find(|artifact| artifact.name == VECTOR_TYPES_DECL)
        .unwrap();
    // Scalar plain conversions start with the empty `bool` group.
    assert_eq!(decl.items[0], Item::Blank);
    assert!(decl.items[1].as_function().is_some());
}

#[test]
fn generation_is_deterministic() {
    let first = Generator::builtin().unwrap().generate();
    let second = Generator::builtin().unwrap().generate();
    assert_eq!(first, second);
    for (name, contents) in first.iter() {
        assert_eq!(
            PrettyString(contents),
            PrettyString(artifact(name)),
            "{}",
            name
        );
    }
}

#[test]
fn artifacts_in_order() {
    let generator = Generator::builtin().unwrap();
    let names = generator.generate().names().map(str::to_owned).collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "TypesDefine.inc.h",
            "TypesUndef.inc.h",
            "VectorTypes.inc.h",
            "VectorTypesDecl.inc.h",
            "MatrixTypes.inc.h",
            "Vector2.inc.h",
            "Vector2Ref.inc.h",
            "Vector3.inc.h",
            "Vector3Ref.inc.h",
            "Vector4.inc.h",
            "Vector4Ref.inc.h",
            "SwizzleDefine.inc.h",
            "SwizzleUndef.inc.h",
        ]
    );
}

#[test]
fn filters_select_by_substring() {
    let output = Generator::builtin()
        .unwrap()
        .only("Ref")
        .only("Matrix")
        .generate();
    let names = output.names().collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "MatrixTypes.inc.h",
            "Vector2Ref.inc.h",
            "Vector3Ref.inc.h",
            "Vector4Ref.inc.h",
        ]
    );
}
