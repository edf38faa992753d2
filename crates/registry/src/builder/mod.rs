//! Fluent builders for conventions.
//!
//! Setters validate eagerly and return the builder; setters taking strings
//! are fallible and return `Result<Self>` so chains read as `b.x()?.y()`.
//! Collection slots (exports, imports, metadata, required metadata) append
//! on every call and never replace what was staged before. Nothing is
//! materialized until `build`.

mod export;
mod import;
mod part;
mod type_default;

pub use export::ExportConventionBuilder;
pub use import::ImportConventionBuilder;
pub use part::PartConventionBuilder;
pub use type_default::TypeDefaultConventionBuilder;

use weft_primitives::{MemberRef, TypeDef, inspect};

use crate::conventions::MemberSelector;
use crate::error::{ConventionError, Result};
use crate::metadata::MetadataItem;
use crate::select;

/// Selector for the exact member `source` names on `ty`.
fn member_on(ty: &TypeDef, source: &str) -> Result<MemberSelector> {
	let member: MemberRef = inspect(ty, source)?;
	Ok(select::fixed(member))
}

/// Evaluates a metadata supplier, rejecting `None`.
fn supplied_metadata(supplier: impl FnOnce() -> Option<Vec<MetadataItem>>) -> Result<Vec<MetadataItem>> {
	supplier().ok_or(ConventionError::SupplierReturnedNone("metadata"))
}

#[cfg(test)]
mod tests;
