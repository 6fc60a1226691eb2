//! The fixed table of scalar types everything else is generated from.

use indexmap::IndexMap;
use std::fmt;
use thiserror::Error;

/// The broad family a scalar type belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BaseKind {
    Bool,
    Integer,
    Floating,
}

/// Describes one scalar type of the shader type system.
///
/// `range_class` is only ever compared against other range classes. It grows with the magnitude
/// (or precision) a type can represent, so that `a.range_class < b.range_class` means a value of
/// `b` may not fit into `a`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
    pub name: &'static str,
    pub base: BaseKind,
    pub byte_size: u32,
    /// Meaningless for [`BaseKind::Bool`].
    pub signed: bool,
    pub range_class: u32,
}

impl TypeDescriptor {
    pub const fn new(
        name: &'static str,
        base: BaseKind,
        range_class: u32,
        signed: bool,
        byte_size: u32,
    ) -> Self {
        Self {
            name,
            base,
            byte_size,
            signed,
            range_class,
        }
    }

    pub fn is_bool(&self) -> bool {
        self.base == BaseKind::Bool
    }

    pub fn is_integer(&self) -> bool {
        self.base == BaseKind::Integer
    }

    pub fn is_floating(&self) -> bool {
        self.base == BaseKind::Floating
    }

    /// The name of the `len`-wide vector of this type, e.g. `float3`. Scalars have no suffix.
    pub fn vector_name(&self, len: VectorLength) -> String {
        format!("{}{}", self.name, len.suffix())
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Number of components of a scalar or vector. A length of one is the bare scalar.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VectorLength(u8);

impl VectorLength {
    pub const SCALAR: Self = Self(1);
    pub const TWO: Self = Self(2);
    pub const THREE: Self = Self(3);
    pub const FOUR: Self = Self(4);

    /// Every length conversions are generated for, scalar first.
    pub const ALL: [Self; 4] = [Self::SCALAR, Self::TWO, Self::THREE, Self::FOUR];
    /// Every length that forms an actual vector.
    pub const VECTORS: [Self; 3] = [Self::TWO, Self::THREE, Self::FOUR];

    pub fn new(len: usize) -> Option<Self> {
        match len {
            1..=4 => Some(Self(len as u8)),
            _ => None,
        }
    }

    pub fn get(self) -> usize {
        self.0 as usize
    }

    pub fn is_scalar(self) -> bool {
        self == Self::SCALAR
    }

    /// The suffix appended to type and function names, empty for scalars.
    pub fn suffix(self) -> String {
        if self.is_scalar() {
            String::new()
        } else {
            self.0.to_string()
        }
    }
}

impl fmt::Display for VectorLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A catalog that cannot be generated from. None of these are recoverable: the table is compiled
/// in, so the only fix is to correct it and run again.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogError {
    #[error("type catalog is empty")]
    Empty,
    #[error("type #{} has an empty name", .0)]
    EmptyName(usize),
    #[error("type {:?} is declared more than once", .0)]
    DuplicateType(&'static str),
    #[error("type {:?} has no storage type mapping", .0)]
    MissingStorage(&'static str),
    #[error("storage type mapping for {:?} does not name a declared type", .0)]
    UnknownStorage(&'static str),
    #[error("type {:?} has a byte size of zero", .0)]
    ZeroSize(&'static str),
    #[error(
        "type {:?} has range class {}, below the {} of the type declared before it",
        .name,
        .range_class,
        .previous
    )]
    RangeOrder {
        name: &'static str,
        range_class: u32,
        previous: u32,
    },
}

/// The validated, ordered list of scalar types and the storage type each one is spelled as in the
/// generated headers.
///
/// The order of the table is the order of emission, so it is part of the output format.
#[derive(Clone, Debug)]
pub struct TypeCatalog {
    types: Vec<TypeDescriptor>,
    storage: IndexMap<&'static str, &'static str>,
}

impl TypeCatalog {
    /// The type system of the shader runtime.
    pub fn builtin() -> Result<Self, CatalogError> {
        use BaseKind::{Bool, Floating, Integer};
        Self::new(
            vec![
                TypeDescriptor::new("bool", Bool, 0, false, 1),
                TypeDescriptor::new("byte", Integer, 1, true, 1),
                TypeDescriptor::new("ubyte", Integer, 1, false, 1),
                TypeDescriptor::new("short", Integer, 2, true, 2),
                TypeDescriptor::new("ushort", Integer, 2, false, 2),
                TypeDescriptor::new("int", Integer, 3, true, 4),
                TypeDescriptor::new("uint", Integer, 3, false, 4),
                TypeDescriptor::new("long", Integer, 4, true, 8),
                TypeDescriptor::new("ulong", Integer, 4, false, 8),
                TypeDescriptor::new("half", Floating, 5, true, 2),
                TypeDescriptor::new("float", Floating, 6, true, 4),
                TypeDescriptor::new("double", Floating, 7, true, 8),
            ],
            [
                ("bool", "bool"),
                ("byte", "int8_t"),
                ("ubyte", "uint8_t"),
                ("short", "int16_t"),
                ("ushort", "uint16_t"),
                ("int", "int32_t"),
                ("uint", "uint32_t"),
                ("long", "int64_t"),
                ("ulong", "uint64_t"),
                ("half", "half"),
                ("float", "float"),
                ("double", "double"),
            ],
        )
    }

    /// Validates `types` against the `storage` name mapping.
    pub fn new(
        types: Vec<TypeDescriptor>,
        storage: impl IntoIterator<Item = (&'static str, &'static str)>,
    ) -> Result<Self, CatalogError> {
        let storage: IndexMap<_, _> = storage.into_iter().collect();

        if types.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut previous: Option<&TypeDescriptor> = None;
        for (index, ty) in types.iter().enumerate() {
            if ty.name.is_empty() {
                return Err(CatalogError::EmptyName(index));
            }
            if types[..index].iter().any(|other| other.name == ty.name) {
                return Err(CatalogError::DuplicateType(ty.name));
            }
            if ty.byte_size == 0 {
                return Err(CatalogError::ZeroSize(ty.name));
            }
            if !storage.contains_key(ty.name) {
                return Err(CatalogError::MissingStorage(ty.name));
            }
            if let Some(previous) = previous {
                if ty.range_class < previous.range_class {
                    return Err(CatalogError::RangeOrder {
                        name: ty.name,
                        range_class: ty.range_class,
                        previous: previous.range_class,
                    });
                }
            }
            previous = Some(ty);
        }

        if let Some(&name) = storage
            .keys()
            .find(|name| !types.iter().any(|ty| ty.name == **name))
        {
            return Err(CatalogError::UnknownStorage(name));
        }

        Ok(Self { types, storage })
    }

    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> + '_ {
        self.types.iter()
    }

    pub fn floating(&self) -> impl Iterator<Item = &TypeDescriptor> + '_ {
        self.iter().filter(|ty| ty.is_floating())
    }

    pub fn get(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.iter().find(|ty| ty.name == name)
    }

    /// The storage type `ty` is spelled as, e.g. `int8_t` for `byte`.
    ///
    /// # Panics
    ///
    /// If `ty` was not taken from this catalog and its name has no storage mapping here.
    pub fn storage_name(&self, ty: &TypeDescriptor) -> &'static str {
        // Every catalog type was checked for a mapping in `new`.
        self.storage[ty.name]
    }

    /// The type of a `len`-wide value of `ty` as written in a signature: the storage type for
    /// scalars, the vector alias otherwise.
    ///
    /// Panics like [`Self::storage_name`] for scalars of a type foreign to this catalog.
    pub fn value_type(&self, ty: &TypeDescriptor, len: VectorLength) -> String {
        if len.is_scalar() {
            self.storage_name(ty).to_owned()
        } else {
            ty.vector_name(len)
        }
    }

    /// Types whose logical name is not already the name of their storage type, and so need a
    /// `#define` to be usable as scalars.
    pub fn aliased(&self) -> impl Iterator<Item = (&TypeDescriptor, &'static str)> + '_ {
        self.iter()
            .map(move |ty| (ty, self.storage_name(ty)))
            .filter(|(ty, storage)| ty.name != *storage)
    }
}
