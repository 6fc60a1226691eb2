//! Swizzle accessors for the vector class templates, and the macros exposing them as bare tokens.

use super::{SWIZZLE_DEFINE, SWIZZLE_UNDEF};
use crate::catalog::VectorLength;
use crate::decl::{Artifact, Body, Expr, Function, Item, Style};
use crate::swizzle::Swizzle;

/// Only defined when the compiler does not provide vectors natively.
const GUARD: &str = "BUILTIN_VECTORS";

/// Name of the header included in the body of the `len`-wide vector template.
pub fn value_header(len: VectorLength) -> String {
    format!("Vector{}.inc.h", len)
}

/// Name of the header included in the body of the `len`-wide reference vector template.
pub fn ref_header(len: VectorLength) -> String {
    format!("Vector{}Ref.inc.h", len)
}

/// `const Vector3<Type> zyx() const {Vector3<Type> a = {this->z, this->y, this->x}; return a;}`
pub fn value_accessor(swizzle: &Swizzle) -> Function {
    let ty = format!("Vector{}<Type>", swizzle.output());
    let init = swizzle
        .axes()
        .iter()
        .map(|axis| Expr::SelfField(axis.name().to_owned()))
        .collect();
    Function::accessor(
        format!("const {}", ty),
        swizzle.name(),
        Body::Aggregate {
            ty,
            name: "a".to_owned(),
            init,
        },
    )
    .with_const_self()
}

/// `Vector3Ref<Type> zyx() {return Vector3Ref<Type>(this->z, this->y, this->x);}`
///
/// On a reference vector the components are themselves references, named `xRef` and so on.
pub fn ref_accessor(swizzle: &Swizzle, of_ref: bool) -> Option<Function> {
    if !swizzle.is_writable() {
        return None;
    }
    let ty = format!("Vector{}Ref<Type>", swizzle.output());
    let args = swizzle
        .axes()
        .iter()
        .map(|axis| {
            let field = if of_ref {
                format!("{}Ref", axis)
            } else {
                axis.name().to_owned()
            };
            Expr::SelfField(field)
        })
        .collect();
    Some(Function::accessor(
        ty.clone(),
        swizzle.name(),
        Body::Return(Expr::call(ty, args)),
    ))
}

/// The per-length accessor headers followed by the macro headers.
pub fn emit() -> Vec<Artifact> {
    let mut artifacts = Vec::new();
    let mut define = vec![Item::IfNotDefined(GUARD.to_owned())];
    let mut undef = vec![Item::IfNotDefined(GUARD.to_owned())];

    for input in VectorLength::VECTORS {
        let mut values: Vec<Item> = Vec::new();
        let mut refs: Vec<Item> = Vec::new();
        for output in VectorLength::VECTORS {
            for swizzle in Swizzle::all(input, output) {
                values.push(value_accessor(&swizzle).into());
                if let Some(accessor) = ref_accessor(&swizzle, false) {
                    values.push(accessor.into());
                }
                if let Some(accessor) = ref_accessor(&swizzle, true) {
                    refs.push(accessor.into());
                }
                if input == VectorLength::FOUR {
                    let name = swizzle.name();
                    define.push(Item::define(name.clone(), format!("{}()", name)));
                    undef.push(Item::Undef(name));
                }
            }
        }
        tracing::debug!(
            input = input.get(),
            accessors = values.len(),
            ref_accessors = refs.len(),
            "enumerated swizzles"
        );
        artifacts.push(Artifact::new(value_header(input), Style::Definitions, values));
        artifacts.push(Artifact::new(ref_header(input), Style::Definitions, refs));
    }

    define.push(Item::EndIf);
    undef.push(Item::EndIf);
    artifacts.push(Artifact::new(SWIZZLE_DEFINE, Style::Definitions, define));
    artifacts.push(Artifact::new(SWIZZLE_UNDEF, Style::Definitions, undef));
    artifacts
}
