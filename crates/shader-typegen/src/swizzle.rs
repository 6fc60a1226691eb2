//! Vector components and the enumeration of swizzle patterns over them.

use crate::catalog::VectorLength;
use std::fmt;

/// A vector component, in declaration order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
    W,
}

impl Axis {
    pub const ALL: [Self; 4] = [Self::X, Self::Y, Self::Z, Self::W];

    /// The components a `len`-wide vector has. A scalar has the single component `x`.
    pub fn components(len: VectorLength) -> &'static [Self] {
        &Self::ALL[..len.get()]
    }

    /// The component at `index` of a `len`-wide vector, if it has one.
    pub fn of(len: VectorLength, index: usize) -> Option<Self> {
        Self::components(len).get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::W => "w",
        }
    }

    fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|axis| axis.name().starts_with(letter))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An ordered selection of components of an `input`-wide vector, possibly repeating some.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Swizzle {
    input: VectorLength,
    axes: Vec<Axis>,
}

impl Swizzle {
    /// Builds a swizzle from component indices, or `None` if an index is not a component of an
    /// `input`-wide vector or the result would not be a vector.
    pub fn new(input: VectorLength, indices: &[usize]) -> Option<Self> {
        VectorLength::new(indices.len())?;
        let axes = indices
            .iter()
            .map(|&index| Axis::of(input, index))
            .collect::<Option<Vec<_>>>()?;
        Some(Self { input, axes })
    }

    /// Parses a swizzle name such as `wzyx`.
    pub fn parse(input: VectorLength, name: &str) -> Option<Self> {
        let indices = name
            .chars()
            .map(|letter| Axis::from_letter(letter).map(Axis::index))
            .collect::<Option<Vec<_>>>()?;
        Self::new(input, &indices)
    }

    /// Decodes combination `ordinal` of `input` components into `output` components.
    ///
    /// The ordinal is read as a number in base `input`, least significant digit first, so ordinal
    /// zero is `xx..x` and the ordinals `0..input^output` enumerate every selection exactly once.
    pub fn decode(input: VectorLength, output: VectorLength, ordinal: usize) -> Option<Self> {
        if ordinal >= Self::count(input, output) {
            return None;
        }
        let radix = input.get();
        let mut rest = ordinal;
        let indices = (0..output.get())
            .map(|_| {
                let digit = rest % radix;
                rest /= radix;
                digit
            })
            .collect::<Vec<_>>();
        Self::new(input, &indices)
    }

    /// Number of distinct `output`-wide selections from an `input`-wide vector.
    pub fn count(input: VectorLength, output: VectorLength) -> usize {
        input.get().pow(output.get() as u32)
    }

    /// Every `output`-wide swizzle of an `input`-wide vector, in ordinal order.
    pub fn all(input: VectorLength, output: VectorLength) -> impl Iterator<Item = Self> {
        (0..Self::count(input, output)).filter_map(move |ordinal| Self::decode(input, output, ordinal))
    }

    pub fn input(&self) -> VectorLength {
        self.input
    }

    pub fn output(&self) -> VectorLength {
        // `new` only accepts one to four components.
        VectorLength::new(self.axes.len()).unwrap_or(VectorLength::SCALAR)
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.axes.iter().map(|axis| axis.index())
    }

    /// Whether every component is selected at most once. Only such swizzles can be written
    /// through, since each output component must alias a distinct input component.
    pub fn is_writable(&self) -> bool {
        self.axes
            .iter()
            .enumerate()
            .all(|(i, axis)| !self.axes[..i].contains(axis))
    }

    /// The accessor name, the selected component letters concatenated.
    pub fn name(&self) -> String {
        self.axes.iter().map(|axis| axis.name()).collect()
    }
}

impl fmt::Display for Swizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in &self.axes {
            f.write_str(axis.name())?;
        }
        Ok(())
    }
}
