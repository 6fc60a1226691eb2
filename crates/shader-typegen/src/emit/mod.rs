//! The emitters. Each one is a pure function from the catalog to finished artifacts.

pub mod matrix;
pub mod swizzle;
pub mod vector;

use crate::catalog::TypeCatalog;
use crate::decl::{Artifact, Item};

pub const TYPES_DEFINE: &str = "TypesDefine.inc.h";
pub const TYPES_UNDEF: &str = "TypesUndef.inc.h";
pub const VECTOR_TYPES: &str = "VectorTypes.inc.h";
pub const VECTOR_TYPES_DECL: &str = "VectorTypesDecl.inc.h";
pub const MATRIX_TYPES: &str = "MatrixTypes.inc.h";
pub const SWIZZLE_DEFINE: &str = "SwizzleDefine.inc.h";
pub const SWIZZLE_UNDEF: &str = "SwizzleUndef.inc.h";

/// Every artifact, in the order they are written.
pub fn all(catalog: &TypeCatalog) -> Vec<Artifact> {
    let mut artifacts = vector::emit(catalog);
    artifacts.push(matrix::emit(catalog));
    artifacts.extend(swizzle::emit());
    artifacts
}

/// Appends `functions` followed by the blank line closing their group.
fn push_group(items: &mut Vec<Item>, functions: impl IntoIterator<Item = impl Into<Item>>) {
    items.extend(functions.into_iter().map(Into::into));
    items.push(Item::Blank);
}
