mod matrix;
mod render;
mod vector;

use crate::{Generator, Output, TypeCatalog};
use lazy_static::lazy_static;

// https://github.com/colin-kiegel/rust-pretty-assertions/issues/24
#[derive(PartialEq, Eq)]
pub struct PrettyString<'a>(pub &'a str);
/// Make diff to display string as multi-line string
impl<'a> std::fmt::Debug for PrettyString<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

// Generating everything takes a moment, so every test shares one run.
lazy_static! {
    static ref CATALOG: TypeCatalog = TypeCatalog::builtin().unwrap();
    static ref OUTPUT: Output = Generator::builtin().unwrap().generate();
}

fn catalog() -> &'static TypeCatalog {
    &CATALOG
}

fn artifact(name: &str) -> &'static str {
    OUTPUT
        .get(name)
        .unwrap_or_else(|| panic!("{} was not generated", name))
}

fn lines(name: &str) -> Vec<&'static str> {
    artifact(name).lines().collect()
}

/// Asserts `line` appears in artifact `name` exactly once.
fn assert_line(name: &str, line: &str) {
    let count = lines(name).iter().filter(|l| **l == line).count();
    assert_eq!(count, 1, "expected exactly one {:?} in {}", line, name);
}

fn assert_no_line(name: &str, prefix: &str) {
    assert!(
        !lines(name).iter().any(|l| l.starts_with(prefix)),
        "unexpected line starting with {:?} in {}",
        prefix,
        name
    );
}
