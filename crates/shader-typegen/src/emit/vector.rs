//! Scalar and vector typedefs, constructor helpers and every conversion between them.

use super::{push_group, TYPES_DEFINE, TYPES_UNDEF, VECTOR_TYPES, VECTOR_TYPES_DECL};
use crate::catalog::{TypeCatalog, TypeDescriptor, VectorLength};
use crate::conversion::{ConversionVariant, RuleEngine};
use crate::decl::{Artifact, Body, Expr, Function, Item, Param, Style};
use crate::swizzle::Axis;

/// Emits the scalar macro headers, then the vector header with definitions and its declarations
/// counterpart.
pub fn emit(catalog: &TypeCatalog) -> Vec<Artifact> {
    let engine = RuleEngine::new(catalog);
    let conversions = conversions(&engine);
    tracing::debug!(
        functions = conversions.iter().filter(|item| item.as_function().is_some()).count(),
        "lowered vector conversions"
    );

    let mut definitions = typedefs(catalog);
    definitions.extend(constructors(catalog));
    definitions.extend(conversions.iter().cloned());

    vec![
        Artifact::new(
            TYPES_DEFINE,
            Style::Definitions,
            catalog
                .aliased()
                .map(|(ty, storage)| Item::define(ty.name, storage))
                .collect(),
        ),
        Artifact::new(
            TYPES_UNDEF,
            Style::Definitions,
            catalog
                .aliased()
                .map(|(ty, _)| Item::Undef(ty.name.to_owned()))
                .collect(),
        ),
        Artifact::new(VECTOR_TYPES, Style::Definitions, definitions),
        Artifact::new(VECTOR_TYPES_DECL, Style::Declarations, conversions),
    ]
}

/// `typedef Vector3<int32_t> int3;` for every type and length, then the `packed_` aliases.
///
/// The scalar length has no typedef, but still closes its (empty) group.
fn typedefs(catalog: &TypeCatalog) -> Vec<Item> {
    let mut items = Vec::new();
    for len in VectorLength::ALL {
        let typedefs = catalog
            .iter()
            .filter(|_| !len.is_scalar())
            .map(|ty| {
                Item::typedef(
                    format!("Vector{}<{}>", len, catalog.storage_name(ty)),
                    ty.vector_name(len),
                )
            })
            .collect::<Vec<_>>();
        push_group(&mut items, typedefs);
    }
    for len in VectorLength::VECTORS {
        let typedefs = catalog
            .iter()
            .map(|ty| {
                let name = ty.vector_name(len);
                Item::typedef(name.clone(), format!("packed_{}", name))
            })
            .collect::<Vec<_>>();
        push_group(&mut items, typedefs);
    }
    items
}

/// `make_<type><L>` templates, one independently typed parameter per component.
fn constructors(catalog: &TypeCatalog) -> Vec<Item> {
    let mut items = Vec::new();
    for len in VectorLength::VECTORS {
        let functions = catalog
            .iter()
            .map(|ty| constructor(catalog, ty, len))
            .collect::<Vec<_>>();
        push_group(&mut items, functions);
    }
    items
}

fn constructor(catalog: &TypeCatalog, ty: &TypeDescriptor, len: VectorLength) -> Function {
    let storage = catalog.storage_name(ty);
    let components = Axis::components(len);
    let template_params = (0..components.len())
        .map(|i| format!("T{}", i))
        .collect::<Vec<_>>();
    let params = template_params
        .iter()
        .zip(components)
        .map(|(param, axis)| Param::new(param.clone(), axis.name()))
        .collect();
    let args = components
        .iter()
        .map(|axis| Expr::cast(storage, Expr::var(axis.name())))
        .collect();

    Function::new(
        ty.vector_name(len),
        format!("make_{}", ty.vector_name(len)),
        params,
        Body::Return(Expr::call(format!("vector{}", len), args)),
    )
    .with_template_params(template_params)
}

/// The `convert_` families followed by the `as_` reinterpretations.
///
/// Every destination closes a group, even one without conversions. The `convert_` families also
/// close a group per length; the reinterpretations do not.
fn conversions(engine: &RuleEngine<'_>) -> Vec<Item> {
    let catalog = engine.catalog();
    let mut items = Vec::new();
    for variant in ConversionVariant::CONVERT {
        for len in VectorLength::ALL {
            for dest in catalog.iter() {
                push_group(&mut items, engine.conversions_into(variant, dest, len));
            }
            items.push(Item::Blank);
        }
    }
    for len in VectorLength::ALL {
        for dest in catalog.iter() {
            push_group(
                &mut items,
                engine.conversions_into(ConversionVariant::Reinterpret, dest, len),
            );
        }
    }
    items
}
