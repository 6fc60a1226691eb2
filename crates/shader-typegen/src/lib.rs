// BEGIN - Embark standard lints v0.3
// do not change or add/remove here, but one can add exceptions after this section
// for more info see: <https://github.com/EmbarkStudios/rust-ecosystem/issues/59>
#![deny(unsafe_code)]
#![warn(
    clippy::all,
    clippy::await_holding_lock,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::doc_markdown,
    clippy::empty_enum,
    clippy::enum_glob_use,
    clippy::exit,
    clippy::explicit_into_iter_loop,
    clippy::filter_map_next,
    clippy::fn_params_excessive_bools,
    clippy::if_let_mutex,
    clippy::imprecise_flops,
    clippy::inefficient_to_string,
    clippy::large_types_passed_by_value,
    clippy::let_unit_value,
    clippy::linkedlist,
    clippy::lossy_float_literal,
    clippy::macro_use_imports,
    clippy::map_err_ignore,
    clippy::map_flatten,
    clippy::map_unwrap_or,
    clippy::match_on_vec_items,
    clippy::match_same_arms,
    clippy::match_wildcard_for_single_variants,
    clippy::mem_forget,
    clippy::mismatched_target_os,
    clippy::needless_borrow,
    clippy::needless_continue,
    clippy::option_option,
    clippy::pub_enum_variant_names,
    clippy::ref_option_ref,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::string_add_assign,
    clippy::string_add,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::todo,
    clippy::unimplemented,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::verbose_file_reads,
    future_incompatible,
    nonstandard_style,
    rust_2018_idioms
)]
// END - Embark standard lints v0.3
// crate-specific exceptions:
#![allow()]

//! Generates the C++ headers of a shader-style numeric type system: vector and matrix typedefs,
//! every conversion function between them, and the swizzle accessors of the vector templates.
//!
//! ```no_run
//! use shader_typegen::{sink::DirectorySink, Generator};
//!
//! Generator::builtin()?
//!     .only("Vector")
//!     .write(&mut DirectorySink::new("include/math"))?;
//! # Ok::<(), shader_typegen::GenerateError>(())
//! ```

#[cfg(test)]
mod test;

pub mod catalog;
pub mod conversion;
pub mod decl;
pub mod emit;
mod error;
pub mod render;
pub mod sink;
pub mod swizzle;

pub use catalog::{CatalogError, TypeCatalog};
pub use error::{GenerateError, Result};
pub use sink::{EmissionSink, Output};

use decl::Artifact;

pub struct Generator {
    catalog: TypeCatalog,
    filters: Vec<String>,
}

impl Generator {
    pub fn new(catalog: TypeCatalog) -> Self {
        Self {
            catalog,
            filters: Vec::new(),
        }
    }

    /// A generator over [`TypeCatalog::builtin`].
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(TypeCatalog::builtin()?))
    }

    /// Restricts generation to artifacts whose name contains `filter`. Can be given more than
    /// once; an artifact matching any filter is kept. Without filters everything is generated.
    pub fn only(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    fn selected(&self, name: &str) -> bool {
        self.filters.is_empty() || self.filters.iter().any(|filter| name.contains(filter.as_str()))
    }

    /// The selected artifacts as declarations, before rendering.
    pub fn artifacts(&self) -> Vec<Artifact> {
        emit::all(&self.catalog)
            .into_iter()
            .filter(|artifact| self.selected(&artifact.name))
            .collect()
    }

    /// Renders every selected artifact into `sink`, stopping at the first sink error.
    pub fn write(&self, sink: &mut impl EmissionSink) -> Result<()> {
        for artifact in self.artifacts() {
            let contents = render::render(&artifact);
            tracing::info!(
                artifact = %artifact.name,
                lines = contents.lines().count(),
                "emitting"
            );
            sink.emit(&artifact.name, &contents)?;
        }
        Ok(())
    }

    /// Renders every selected artifact into memory.
    pub fn generate(&self) -> Output {
        let mut output = Output::default();
        for artifact in self.artifacts() {
            let contents = render::render(&artifact);
            output.insert(artifact.name, contents);
        }
        output
    }
}
