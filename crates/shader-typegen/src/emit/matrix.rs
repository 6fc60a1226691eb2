//! Matrix typedefs and conversions between matrices of different element types.

use super::{push_group, MATRIX_TYPES};
use crate::catalog::{TypeCatalog, TypeDescriptor, VectorLength};
use crate::conversion::{decide, ConversionVariant, Rule};
use crate::decl::{Artifact, Body, Expr, Function, Item, Param, Style};
use crate::swizzle::Axis;

/// Half precision matrices are not part of the runtime.
const MIN_ELEMENT_SIZE: u32 = 4;

/// The element types matrices are generated for.
pub fn element_types(catalog: &TypeCatalog) -> Vec<&TypeDescriptor> {
    catalog
        .floating()
        .filter(|ty| ty.byte_size >= MIN_ELEMENT_SIZE)
        .collect()
}

/// The name of `Matrix{count}<{ty}{width}>`: `count` columns, each a `width`-wide vector of `ty`.
/// `float3x4` holds four `float3` columns.
pub fn matrix_name(ty: &TypeDescriptor, width: VectorLength, count: VectorLength) -> String {
    format!("{}x{}", ty.vector_name(width), count)
}

pub fn emit(catalog: &TypeCatalog) -> Artifact {
    let elements = element_types(catalog);
    let mut items = Vec::new();

    for width in VectorLength::VECTORS {
        for count in VectorLength::VECTORS {
            let typedefs = elements
                .iter()
                .map(|ty| {
                    Item::typedef(
                        format!("Matrix{}<{}>", count, ty.vector_name(width)),
                        matrix_name(ty, width, count),
                    )
                })
                .collect::<Vec<_>>();
            push_group(&mut items, typedefs);
        }
    }

    let mut total = 0;
    for width in VectorLength::VECTORS {
        for count in VectorLength::VECTORS {
            for &dest in &elements {
                let functions = elements
                    .iter()
                    .filter_map(|&src| convert(dest, src, width, count))
                    .collect::<Vec<_>>();
                total += functions.len();
                push_group(&mut items, functions);
            }
            items.push(Item::Blank);
        }
    }
    tracing::debug!(functions = total, "lowered matrix conversions");

    Artifact::new(MATRIX_TYPES, Style::Definitions, items)
}

/// `convert_<dest>WxN(const <src>WxN& m)`, converting column by column.
fn convert(
    dest: &TypeDescriptor,
    src: &TypeDescriptor,
    width: VectorLength,
    count: VectorLength,
) -> Option<Function> {
    let conversion = decide(ConversionVariant::Plain, dest, src)?;
    let m = Expr::var("m");
    let body = match conversion.rule {
        Rule::Identity => m,
        _ => {
            let convert_column = ConversionVariant::Plain.function_name(dest, width);
            let args = Axis::components(count)
                .iter()
                .map(|axis| Expr::call(convert_column.clone(), vec![m.clone().field(axis.name())]))
                .collect();
            Expr::call(format!("matrix{}", count), args)
        }
    };

    let dest_name = matrix_name(dest, width, count);
    Some(Function::inline(
        dest_name.clone(),
        format!("convert_{}", dest_name),
        vec![Param::new(
            format!("const {}&", matrix_name(src, width, count)),
            "m",
        )],
        Body::Return(body),
    ))
}
