use crate::decl::{Artifact, Body, Expr, Function, Item, Limit, Param, Style};
use crate::render::{render, render_item};

fn convert() -> Function {
    Function::inline(
        "float",
        "convert_float",
        vec![Param::new("int32_t", "v")],
        Body::Return(Expr::cast("float", Expr::var("v"))),
    )
}

#[test]
fn expressions() {
    let v = Expr::var("v");
    assert_eq!(v.clone().field("x").to_string(), "v.x");
    assert_eq!(
        Expr::generic_call("rint", "int8_t", vec![v.clone()]).to_string(),
        "rint<int8_t>(v)"
    );
    assert_eq!(
        Expr::limit("double", Limit::Max).neg().to_string(),
        "-std::numeric_limits<double>::max()"
    );
    assert_eq!(Expr::reinterpret("uint2", v).to_string(), "*(uint2*)&v");
    assert_eq!(
        Expr::call("f", vec![Expr::SelfField("yRef".to_owned()), Expr::Int(0)]).to_string(),
        "f(this->yRef, 0)"
    );
}

#[test]
fn definition_and_declaration_styles() {
    let item = Item::from(convert());
    assert_eq!(
        render_item(&item, Style::Definitions),
        "inline float convert_float(int32_t v) {return float(v);}"
    );
    assert_eq!(
        render_item(&item, Style::Declarations),
        "float convert_float(int32_t v);"
    );
}

#[test]
fn templates_and_members() {
    let function = Function::new(
        "T",
        "first",
        vec![Param::new("T0", "a"), Param::new("T1", "b")],
        Body::Return(Expr::var("a")),
    )
    .with_template_params(vec!["T0".to_owned(), "T1".to_owned()]);
    assert_eq!(
        function.display(Style::Definitions).to_string(),
        "template <typename T0, typename T1> T first(T0 a, T1 b) {return a;}"
    );

    let accessor = Function::accessor(
        "const Vector2<Type>",
        "yy",
        Body::Aggregate {
            ty: "Vector2<Type>".to_owned(),
            name: "a".to_owned(),
            init: vec![Expr::SelfField("y".to_owned()); 2],
        },
    )
    .with_const_self();
    assert_eq!(
        accessor.display(Style::Definitions).to_string(),
        "const Vector2<Type> yy() const {Vector2<Type> a = {this->y, this->y}; return a;}"
    );
}

#[test]
fn artifacts_end_every_line() {
    let artifact = Artifact::new(
        "Test.inc.h",
        Style::Definitions,
        vec![
            Item::IfNotDefined("GUARD".to_owned()),
            Item::typedef("Vector2<float>", "float2"),
            Item::Blank,
            Item::define("byte", "int8_t"),
            Item::Undef("byte".to_owned()),
            convert().into(),
            Item::EndIf,
        ],
    );
    assert_eq!(artifact.functions().count(), 1);
    assert_eq!(
        render(&artifact),
        "#ifndef GUARD
typedef Vector2<float> float2;

#define byte int8_t
#undef byte
inline float convert_float(int32_t v) {return float(v);}
#endif
"
    );
}
