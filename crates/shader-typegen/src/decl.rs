//! Structured declarations, built by the emitters and turned into text by [`crate::render`].
//!
//! Emitters never concatenate source text themselves. Keeping the records structured lets the
//! combinatorial logic be tested on names, parameters and expression trees instead of on strings.

/// Which end of a type's range an [`Expr::Limit`] refers to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Limit {
    /// `std::numeric_limits<T>::min()`
    Min,
    /// `std::numeric_limits<T>::max()`
    Max,
}

/// An expression tree. Only the forms the generated headers actually use exist.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    /// A parameter or local, e.g. `v`.
    Var(String),
    /// An integer literal.
    Int(i64),
    /// `base.field`
    Field(Box<Expr>, String),
    /// `this->field`
    SelfField(String),
    /// Functional cast `ty(arg)`.
    Cast(String, Box<Expr>),
    /// `callee<generic>(args...)`, the generic argument being optional.
    Call {
        callee: String,
        generic: Option<String>,
        args: Vec<Expr>,
    },
    /// Bit pattern reinterpretation `*(ty*)&arg`.
    Reinterpret(String, Box<Expr>),
    /// `std::numeric_limits<ty>::min()` or `max()`.
    Limit(String, Limit),
    /// Unary minus.
    Neg(Box<Expr>),
}

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    pub fn field(self, field: impl Into<String>) -> Self {
        Self::Field(Box::new(self), field.into())
    }

    pub fn cast(ty: impl Into<String>, arg: Self) -> Self {
        Self::Cast(ty.into(), Box::new(arg))
    }

    pub fn call(callee: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Call {
            callee: callee.into(),
            generic: None,
            args,
        }
    }

    pub fn generic_call(
        callee: impl Into<String>,
        generic: impl Into<String>,
        args: Vec<Self>,
    ) -> Self {
        Self::Call {
            callee: callee.into(),
            generic: Some(generic.into()),
            args,
        }
    }

    pub fn reinterpret(ty: impl Into<String>, arg: Self) -> Self {
        Self::Reinterpret(ty.into(), Box::new(arg))
    }

    pub fn limit(ty: impl Into<String>, limit: Limit) -> Self {
        Self::Limit(ty.into(), limit)
    }

    pub fn neg(self) -> Self {
        Self::Neg(Box::new(self))
    }
}

/// A function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub ty: String,
    pub name: String,
}

impl Param {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

/// What a function does with its arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Body {
    /// `{return expr;}`
    Return(Expr),
    /// `{ty name = {init...}; return name;}`, aggregate-initializing a local before returning it.
    Aggregate {
        ty: String,
        name: String,
        init: Vec<Expr>,
    },
}

/// A free function or, for the swizzle headers, a member function.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    /// Names of `typename` template parameters, in order.
    pub template_params: Vec<String>,
    pub inline: bool,
    pub return_type: String,
    pub name: String,
    pub params: Vec<Param>,
    /// Marks a member function `const`.
    pub const_self: bool,
    pub body: Body,
}

impl Function {
    pub fn new(
        return_type: impl Into<String>,
        name: impl Into<String>,
        params: Vec<Param>,
        body: Body,
    ) -> Self {
        Self {
            template_params: Vec::new(),
            inline: false,
            return_type: return_type.into(),
            name: name.into(),
            params,
            const_self: false,
            body,
        }
    }

    /// An `inline` free function.
    pub fn inline(
        return_type: impl Into<String>,
        name: impl Into<String>,
        params: Vec<Param>,
        body: Body,
    ) -> Self {
        Self {
            inline: true,
            ..Self::new(return_type, name, params, body)
        }
    }

    /// A member function without parameters, the shape of every swizzle accessor.
    pub fn accessor(return_type: impl Into<String>, name: impl Into<String>, body: Body) -> Self {
        Self::new(return_type, name, Vec::new(), body)
    }

    pub fn with_template_params(mut self, params: Vec<String>) -> Self {
        self.template_params = params;
        self
    }

    pub fn with_const_self(mut self) -> Self {
        self.const_self = true;
        self
    }
}

/// One top-level entry of a generated header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Item {
    /// An empty line separating groups.
    Blank,
    /// `typedef target alias;`
    Typedef { target: String, alias: String },
    /// `#define name value`
    Define { name: String, value: String },
    /// `#undef name`
    Undef(String),
    /// `#ifndef name`
    IfNotDefined(String),
    /// `#endif`
    EndIf,
    Function(Function),
}

impl Item {
    pub fn typedef(target: impl Into<String>, alias: impl Into<String>) -> Self {
        Self::Typedef {
            target: target.into(),
            alias: alias.into(),
        }
    }

    pub fn define(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Define {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }
}

impl From<Function> for Item {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

/// Whether functions are written out with their bodies or as bare prototypes.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Style {
    Definitions,
    Declarations,
}

/// A whole generated header, before rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub style: Style,
    pub items: Vec<Item>,
}

impl Artifact {
    pub fn new(name: impl Into<String>, style: Style, items: Vec<Item>) -> Self {
        Self {
            name: name.into(),
            style,
            items,
        }
    }

    pub fn functions(&self) -> impl Iterator<Item = &Function> + '_ {
        self.items.iter().filter_map(Item::as_function)
    }
}
