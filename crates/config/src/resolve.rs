//! Type lookup by fully-qualified name.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use weft_primitives::{TypeDef, TypeRef, known};
use weft_registry::TypeScanner;

/// Resolves the type names used in configuration.
///
/// Lookup order: well-known framework types, types added explicitly, then
/// every type the scanner knows, interfaces and abstract types included. A trailing `[]` resolves the element
/// type and wraps it in an array.
#[derive(Clone, Default)]
pub struct TypeResolver {
	types: FxHashMap<String, TypeDef>,
	scanner: Option<Arc<dyn TypeScanner>>,
}

impl TypeResolver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_scanner(scanner: Arc<dyn TypeScanner>) -> Self {
		Self {
			types: FxHashMap::default(),
			scanner: Some(scanner),
		}
	}

	/// Makes `ty` resolvable even if the scanner does not produce it.
	pub fn add(&mut self, ty: TypeDef) {
		self.types.insert(ty.identity().to_string(), ty);
	}

	pub fn scanner(&self) -> Option<Arc<dyn TypeScanner>> {
		self.scanner.clone()
	}

	/// The full definition behind `name`, needed to resolve member selectors.
	pub fn resolve_def(&self, name: &str) -> Option<TypeDef> {
		if let Some(ty) = self.types.get(name) {
			return Some(ty.clone());
		}
		self.scanner.as_ref()?.find(name)
	}

	pub fn resolve_type(&self, name: &str) -> Option<TypeRef> {
		if let Some(element) = name.strip_suffix("[]") {
			return self.resolve_type(element).map(TypeRef::array_of);
		}
		known::by_name(name).or_else(|| self.resolve_def(name).map(|ty| ty.shape().clone()))
	}
}

impl fmt::Debug for TypeResolver {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("TypeResolver")
			.field("types", &self.types.len())
			.field("scanner", &self.scanner.is_some())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use weft_primitives::Assembly;
	use weft_registry::{AssemblyScanner, TypeList};

	use super::*;

	fn widget() -> TypeDef {
		TypeDef::builder(TypeRef::class("Acme", "Widget")).build()
	}

	#[test]
	fn resolves_well_known_types_first() {
		let resolver = TypeResolver::new();
		assert_eq!(resolver.resolve_type("System.String"), Some(known::string()));
		assert_eq!(resolver.resolve_type("Acme.Widget"), None);
	}

	#[test]
	fn resolves_scanned_and_added_types() {
		let resolver = TypeResolver::with_scanner(Arc::new(TypeList::from_types(vec![widget()])));
		assert_eq!(resolver.resolve_def("Acme.Widget"), Some(widget()));

		let mut resolver = TypeResolver::new();
		resolver.add(widget());
		assert_eq!(resolver.resolve_type("Acme.Widget"), Some(widget().shape().clone()));
	}

	#[test]
	fn resolves_interfaces_behind_assembly_scanners() {
		let iface = TypeDef::builder(TypeRef::interface("Acme", "IMailer")).build();
		let assembly = Assembly::new("Acme", vec![widget(), iface.clone()]);
		let resolver = TypeResolver::with_scanner(Arc::new(AssemblyScanner::new(assembly)));
		assert_eq!(resolver.resolve_type("Acme.IMailer"), Some(iface.shape().clone()));
		assert_eq!(resolver.resolve_def("Acme.Widget"), Some(widget()));
	}

	#[test]
	fn resolves_arrays_by_suffix() {
		let resolver = TypeResolver::new();
		assert_eq!(
			resolver.resolve_type("System.Int32[]"),
			Some(TypeRef::array_of(known::int32()))
		);
		assert_eq!(resolver.resolve_type("Acme.Missing[]"), None);
	}
}
