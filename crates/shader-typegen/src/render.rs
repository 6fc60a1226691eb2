//! The one place declarations become text.

use crate::decl::{Artifact, Body, Expr, Function, Item, Limit, Param, Style};
use std::fmt;

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Var(name) => f.write_str(name),
            Self::Int(value) => write!(f, "{}", value),
            Self::Field(base, field) => write!(f, "{}.{}", base, field),
            Self::SelfField(field) => write!(f, "this->{}", field),
            Self::Cast(ty, arg) => write!(f, "{}({})", ty, arg),
            Self::Call {
                callee,
                generic,
                args,
            } => {
                f.write_str(callee)?;
                if let Some(generic) = generic {
                    write!(f, "<{}>", generic)?;
                }
                f.write_str("(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Self::Reinterpret(ty, arg) => write!(f, "*({}*)&{}", ty, arg),
            Self::Limit(ty, limit) => {
                let limit = match limit {
                    Limit::Min => "min",
                    Limit::Max => "max",
                };
                write!(f, "std::numeric_limits<{}>::{}()", ty, limit)
            }
            Self::Neg(arg) => write!(f, "-{}", arg),
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.ty, self.name)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Return(expr) => write!(f, "{{return {};}}", expr),
            Self::Aggregate { ty, name, init } => {
                write!(f, "{{{} {} = {{", ty, name)?;
                write_list(f, init)?;
                write!(f, "}}; return {};}}", name)
            }
        }
    }
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i != 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl Function {
    /// Prints the function as a definition or a prototype.
    pub fn display(&self, style: Style) -> FunctionPrinter<'_> {
        FunctionPrinter {
            function: self,
            style,
        }
    }
}

pub struct FunctionPrinter<'a> {
    function: &'a Function,
    style: Style,
}

impl fmt::Display for FunctionPrinter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let function = self.function;
        if !function.template_params.is_empty() {
            f.write_str("template <")?;
            for (i, param) in function.template_params.iter().enumerate() {
                if i != 0 {
                    f.write_str(", ")?;
                }
                write!(f, "typename {}", param)?;
            }
            f.write_str("> ")?;
        }
        // Prototypes in the declarations header are out-of-line.
        if function.inline && self.style == Style::Definitions {
            f.write_str("inline ")?;
        }
        write!(f, "{} {}(", function.return_type, function.name)?;
        write_list(f, &function.params)?;
        f.write_str(")")?;
        if function.const_self {
            f.write_str(" const")?;
        }
        match self.style {
            Style::Definitions => write!(f, " {}", function.body),
            Style::Declarations => f.write_str(";"),
        }
    }
}

/// Writes one item as a single line, without the line terminator.
fn write_item(out: &mut impl fmt::Write, item: &Item, style: Style) -> fmt::Result {
    match item {
        Item::Blank => Ok(()),
        Item::Typedef { target, alias } => write!(out, "typedef {} {};", target, alias),
        Item::Define { name, value } => write!(out, "#define {} {}", name, value),
        Item::Undef(name) => write!(out, "#undef {}", name),
        Item::IfNotDefined(name) => write!(out, "#ifndef {}", name),
        Item::EndIf => out.write_str("#endif"),
        Item::Function(function) => write!(out, "{}", function.display(style)),
    }
}

/// Renders a whole artifact. Every item is one line and every line ends in `\n`.
pub fn render(artifact: &Artifact) -> String {
    let mut out = String::new();
    for item in &artifact.items {
        // Writing into a `String` cannot fail.
        let _ = write_item(&mut out, item, artifact.style);
        out.push('\n');
    }
    out
}

/// Renders a single item, e.g. for log messages and tests.
pub fn render_item(item: &Item, style: Style) -> String {
    let mut out = String::new();
    let _ = write_item(&mut out, item, style);
    out
}
