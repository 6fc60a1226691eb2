//! Decides which conversion functions exist between two types, and what they do.
//!
//! Every query is answered from the two [`TypeDescriptor`]s alone. A combination without a
//! conversion is simply absent: the emitters ask about every pair and skip the `None`s.

use crate::catalog::{TypeCatalog, TypeDescriptor, VectorLength};
use crate::decl::{Body, Expr, Function, Limit, Param};
use crate::swizzle::Axis;

bitflags::bitflags! {
    /// The set of conversion variants available from one type to another.
    pub struct Variants: u8 {
        const PLAIN = 1 << 0;
        const RTE = 1 << 1;
        const SAT = 1 << 2;
        const SAT_RTE = 1 << 3;
        const REINTERPRET = 1 << 4;
    }
}

/// One flavor of conversion function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConversionVariant {
    /// `convert_<dest>`: a value-preserving cast where possible.
    Plain,
    /// `convert_<dest>_rte`: floating to integer, rounding to nearest even.
    Rte,
    /// `convert_<dest>_sat`: clamps out-of-range values.
    Sat,
    /// `convert_<dest>_sat_rte`: floating to integer, clamping and rounding to nearest even.
    SatRte,
    /// `as_<dest>`: reinterprets the bits.
    Reinterpret,
}

impl ConversionVariant {
    /// The `convert_` family in the order it is emitted.
    pub const CONVERT: [Self; 4] = [Self::Plain, Self::Rte, Self::Sat, Self::SatRte];

    pub fn flag(self) -> Variants {
        match self {
            Self::Plain => Variants::PLAIN,
            Self::Rte => Variants::RTE,
            Self::Sat => Variants::SAT,
            Self::SatRte => Variants::SAT_RTE,
            Self::Reinterpret => Variants::REINTERPRET,
        }
    }

    /// Name of the function converting to a `len`-wide `dest`, e.g. `convert_int4_sat`.
    pub fn function_name(self, dest: &TypeDescriptor, len: VectorLength) -> String {
        let dest = dest.vector_name(len);
        match self {
            Self::Plain => format!("convert_{}", dest),
            Self::Rte => format!("convert_{}_rte", dest),
            Self::Sat => format!("convert_{}_sat", dest),
            Self::SatRte => format!("convert_{}_sat_rte", dest),
            Self::Reinterpret => format!("as_{}", dest),
        }
    }
}

/// Returns every variant that exists for converting `src` into `dest`.
pub fn variants(dest: &TypeDescriptor, src: &TypeDescriptor) -> Variants {
    let mut variants = Variants::empty();
    if !dest.is_bool() {
        variants |= Variants::PLAIN;
    }
    if dest.is_integer() && src.is_floating() {
        variants |= Variants::RTE | Variants::SAT_RTE;
    }
    if !dest.is_bool() && !dest.is_floating() && !src.is_bool() {
        variants |= Variants::SAT;
    }
    if dest.name != src.name
        && !dest.is_bool()
        && !src.is_bool()
        && dest.byte_size == src.byte_size
    {
        variants |= Variants::REINTERPRET;
    }
    variants
}

/// How a saturating conversion keeps the value inside the destination range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Saturation {
    /// The destination range is smaller: clamp to both bounds, truncating toward zero.
    Clamp,
    /// Same range, unsigned destination from signed source: only negative values can escape.
    LowerBound,
    /// Same range otherwise: only values above the destination maximum can escape.
    UpperBound,
    /// The destination range is larger, nothing can escape: a plain conversion suffices.
    Widen,
}

/// Picks the clamping policy for a saturating conversion between two different types.
pub fn saturation(dest: &TypeDescriptor, src: &TypeDescriptor) -> Saturation {
    use std::cmp::Ordering;

    match dest.range_class.cmp(&src.range_class) {
        Ordering::Less => Saturation::Clamp,
        Ordering::Equal if !dest.signed && src.signed => Saturation::LowerBound,
        Ordering::Equal => Saturation::UpperBound,
        Ordering::Greater => Saturation::Widen,
    }
}

/// What a conversion function body does to its argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Rule {
    /// Source and destination are the same type.
    Identity,
    /// Storage-type cast of every component.
    Cast,
    /// `rint` of every component.
    RoundToEven,
    Saturate(Saturation),
    /// Clamp to both bounds, rounding to nearest even.
    SaturateRoundToEven,
    Reinterpret,
}

/// A conversion that exists, with the rule its body follows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Conversion<'a> {
    pub variant: ConversionVariant,
    pub dest: &'a TypeDescriptor,
    pub src: &'a TypeDescriptor,
    pub rule: Rule,
}

/// Decides whether `variant` exists from `src` to `dest` and, if so, how it behaves.
pub fn decide<'a>(
    variant: ConversionVariant,
    dest: &'a TypeDescriptor,
    src: &'a TypeDescriptor,
) -> Option<Conversion<'a>> {
    if !variants(dest, src).contains(variant.flag()) {
        return None;
    }

    let same = dest.name == src.name;
    let rule = match variant {
        ConversionVariant::Plain if same => Rule::Identity,
        ConversionVariant::Plain => Rule::Cast,
        ConversionVariant::Rte => Rule::RoundToEven,
        ConversionVariant::Sat if same => Rule::Identity,
        ConversionVariant::Sat => Rule::Saturate(saturation(dest, src)),
        ConversionVariant::SatRte => Rule::SaturateRoundToEven,
        ConversionVariant::Reinterpret => Rule::Reinterpret,
    };

    Some(Conversion {
        variant,
        dest,
        src,
        rule,
    })
}

/// Lowers conversion decisions to function declarations for a given catalog.
pub struct RuleEngine<'a> {
    catalog: &'a TypeCatalog,
}

impl<'a> RuleEngine<'a> {
    pub fn new(catalog: &'a TypeCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a TypeCatalog {
        self.catalog
    }

    /// Every `variant` conversion into `dest` at length `len`, in catalog order of the source.
    pub fn conversions_into(
        &self,
        variant: ConversionVariant,
        dest: &TypeDescriptor,
        len: VectorLength,
    ) -> Vec<Function> {
        self.catalog
            .iter()
            .filter_map(|src| decide(variant, dest, src))
            .map(|conversion| self.declare(&conversion, len))
            .collect()
    }

    /// Builds the `len`-wide function for an existing conversion.
    pub fn declare(&self, conversion: &Conversion<'_>, len: VectorLength) -> Function {
        let Conversion {
            variant,
            dest,
            src,
            rule,
        } = *conversion;

        let dest_type = self.catalog.value_type(dest, len);
        let src_type = self.catalog.value_type(src, len);
        let storage = self.catalog.storage_name(dest);
        let v = Expr::var("v");

        let body = match rule {
            Rule::Identity => v,
            Rule::Cast => per_component(len, |component| Expr::cast(storage, component)),
            Rule::RoundToEven => per_component(len, |component| {
                Expr::generic_call("rint", storage, vec![component])
            }),
            Rule::Saturate(Saturation::Clamp) => Expr::call(
                "clamp_rtz",
                vec![v, self.lower_bound(dest), self.upper_bound(dest)],
            ),
            Rule::Saturate(Saturation::LowerBound) => {
                Expr::call("max_rtz", vec![v, Expr::cast(storage, Expr::Int(0))])
            }
            Rule::Saturate(Saturation::UpperBound) => {
                Expr::call("min_rtz", vec![v, self.upper_bound(dest)])
            }
            Rule::Saturate(Saturation::Widen) => {
                Expr::call(ConversionVariant::Plain.function_name(dest, len), vec![v])
            }
            Rule::SaturateRoundToEven => Expr::call(
                "clamp_rte",
                vec![v, self.lower_bound(dest), self.upper_bound(dest)],
            ),
            Rule::Reinterpret => Expr::reinterpret(dest_type.clone(), v),
        };

        Function::inline(
            dest_type,
            variant.function_name(dest, len),
            vec![Param::new(src_type, "v")],
            Body::Return(body),
        )
    }

    /// The lowest value a saturating conversion into `ty` may produce.
    fn lower_bound(&self, ty: &TypeDescriptor) -> Expr {
        let storage = self.catalog.storage_name(ty);
        if ty.is_floating() {
            // `min()` of a floating type is its smallest positive value.
            Expr::limit(storage, Limit::Max).neg()
        } else {
            Expr::limit(storage, Limit::Min)
        }
    }

    fn upper_bound(&self, ty: &TypeDescriptor) -> Expr {
        Expr::limit(self.catalog.storage_name(ty), Limit::Max)
    }
}

/// Applies `f` to `v`, or to each component of `v` when it is a vector and builds a new vector.
fn per_component(len: VectorLength, f: impl Fn(Expr) -> Expr) -> Expr {
    let v = Expr::var("v");
    if len.is_scalar() {
        return f(v);
    }
    let components = Axis::components(len)
        .iter()
        .map(|axis| f(v.clone().field(axis.name())))
        .collect();
    Expr::call(format!("vector{}", len), components)
}
